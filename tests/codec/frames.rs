//! Frame tag and layout checks across every unit type.

use varstore_codec::{DecodeError, Marker, Persist, Unit};
use varstore_foundation::{Kind, Table, Value};
use varstore_schema::{Database, VarFlags, VarInfo};

fn sample_table() -> Table {
    let mut t = Table::new();
    t.set("capacity", 100.0f32);
    t.set("years", 25.0f32);
    t
}

fn sample_db() -> Database {
    let mut db = Database::new();
    db.add("x", Kind::Number, "X", "", "", "", VarFlags::empty(), 1.0f32);
    db
}

fn assert_trailing_mismatch<T: Persist + std::fmt::Debug>(mut bytes: Vec<u8>, unit: Unit) {
    *bytes.last_mut().unwrap() ^= 0xFF;
    match T::from_bytes(&bytes) {
        Err(DecodeError::FrameMismatch {
            unit: u,
            marker: Marker::Trailing,
            expected,
            ..
        }) => {
            assert_eq!(u, unit);
            assert_eq!(expected, unit.tag());
        }
        other => panic!("expected trailing mismatch for {unit}, got {other:?}"),
    }
}

#[test]
fn every_unit_checks_its_trailing_tag() {
    assert_trailing_mismatch::<Value>(Value::from(1.0f32).to_bytes().unwrap(), Unit::Value);
    assert_trailing_mismatch::<Table>(sample_table().to_bytes().unwrap(), Unit::Table);
    assert_trailing_mismatch::<VarInfo>(
        VarInfo::new("x", Kind::Number).to_bytes().unwrap(),
        Unit::VarInfo,
    );
    assert_trailing_mismatch::<Database>(sample_db().to_bytes().unwrap(), Unit::Database);
}

#[test]
fn leading_tags_and_version() {
    assert_eq!(&Value::from(1.0f32).to_bytes().unwrap()[..2], &[0xF2, 1]);
    assert_eq!(&sample_table().to_bytes().unwrap()[..2], &[0xF9, 1]);
    assert_eq!(&VarInfo::default().to_bytes().unwrap()[..2], &[0xE1, 1]);
    assert_eq!(&sample_db().to_bytes().unwrap()[..2], &[0xF8, 1]);
}

#[test]
fn wrong_unit_is_a_leading_mismatch() {
    let bytes = sample_table().to_bytes().unwrap();
    assert!(matches!(
        Database::from_bytes(&bytes),
        Err(DecodeError::FrameMismatch {
            marker: Marker::Leading,
            found: 0xF9,
            ..
        })
    ));
}

#[test]
fn zero_rows_is_invalid_dimensions() {
    // F2 ver kind=number rows=0 cols=5
    let bytes = [0xF2, 1, 1, 0, 0, 0, 0, 5, 0, 0, 0, 0xF2];
    assert!(matches!(
        Value::from_bytes(&bytes),
        Err(DecodeError::InvalidDimensions { rows: 0, cols: 5 })
    ));
}

#[test]
fn array_is_one_row() {
    let bytes = Value::from(vec![1.0f32, 2.0, 3.0]).to_bytes().unwrap();
    assert_eq!(bytes[2], 2);
    assert_eq!(&bytes[3..7], &1u32.to_le_bytes());
    assert_eq!(&bytes[7..11], &3u32.to_le_bytes());
}

#[test]
fn truncated_stream_is_eof() {
    let bytes = sample_table().to_bytes().unwrap();
    assert!(matches!(
        Table::from_bytes(&bytes[..bytes.len() - 3]),
        Err(DecodeError::UnexpectedEof)
    ));
}
