//! Decode limits against hostile size fields.

use varstore_codec::{DecodeError, DecodeLimits, Persist};
use varstore_foundation::{Table, Value};

#[test]
fn huge_string_length_is_rejected() {
    // F2 ver kind=string len=u32::MAX
    let bytes = [0xF2, 1, 5, 0xFF, 0xFF, 0xFF, 0xFF];
    let limits = DecodeLimits::default().with_max_string_len(1024);
    assert!(matches!(
        Value::from_bytes_with(&bytes, limits),
        Err(DecodeError::LimitExceeded { .. })
    ));
}

#[test]
fn huge_matrix_is_rejected() {
    // F2 ver kind=matrix rows=65536 cols=65536
    let bytes = [0xF2, 1, 3, 0, 0, 1, 0, 0, 0, 1, 0];
    assert!(matches!(
        Value::from_bytes(&bytes),
        Err(DecodeError::LimitExceeded { .. })
    ));
}

#[test]
fn entry_count_is_capped() {
    // F9 ver count=1000
    let mut bytes = vec![0xF9, 1];
    bytes.extend_from_slice(&1000u32.to_le_bytes());
    let limits = DecodeLimits::default().with_max_entries(10);
    assert!(matches!(
        Table::from_bytes_with(&bytes, limits),
        Err(DecodeError::LimitExceeded { .. })
    ));
}

#[test]
fn depth_is_capped() {
    let mut v = Value::from(1.0f32);
    for _ in 0..8 {
        let mut t = Table::new();
        t.set("inner", v);
        v = Value::from(t);
    }
    let bytes = v.to_bytes().unwrap();

    assert!(Value::from_bytes_with(&bytes, DecodeLimits::default().with_max_depth(4)).is_err());
    assert_eq!(Value::from_bytes_with(&bytes, DecodeLimits::unlimited()).unwrap(), v);
}
