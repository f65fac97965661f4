//! Integration tests for Value kinds, setters, and accessors.

use varstore_foundation::{ErrorKind, Kind, Matrix, Table, Value};

// =============================================================================
// Construction
// =============================================================================

#[test]
fn default_is_invalid() {
    let v = Value::default();
    assert!(v.is_invalid());
    assert_eq!(v.kind(), Kind::Invalid);
}

#[test]
fn from_conversions() {
    assert_eq!(Value::from(2.5f32).kind(), Kind::Number);
    assert_eq!(Value::from(true), Value::Number(1.0));
    assert_eq!(Value::from(vec![1.0f32, 2.0]).kind(), Kind::Array);
    assert_eq!(Value::from("kW").kind(), Kind::String);
    assert_eq!(Value::from(Table::new()).kind(), Kind::Table);
    assert_eq!(Value::from(Matrix::filled(2, 3, 0.0)).kind(), Kind::Matrix);
}

#[test]
fn matrix_from_slice_checks_dimensions() {
    let v = Value::matrix_from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
    assert_eq!(v.matrix().dims(), (2, 3));
    assert_eq!(v.matrix().get(1, 0), Some(4.0));

    let err = Value::matrix_from_slice(&[1.0, 2.0, 3.0], 2, 2).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::DimensionMismatch {
            rows: 2,
            cols: 2,
            len: 3
        }
    ));
}

// =============================================================================
// Setters
// =============================================================================

#[test]
fn setters_change_kind() {
    let mut v = Value::default();
    v.set_number(1.0);
    assert_eq!(v.kind(), Kind::Number);
    v.set_array(&[1.0, 2.0]);
    assert_eq!(v.kind(), Kind::Array);
    v.set_string("x");
    assert_eq!(v.kind(), Kind::String);
    v.set_matrix(Matrix::filled(1, 1, 3.0));
    assert_eq!(v.kind(), Kind::Matrix);
    v.clear();
    assert!(v.is_invalid());
}

#[test]
fn set_table_copies() {
    let mut t = Table::new();
    t.set("a", 1.0f32);
    let mut v = Value::default();
    v.set_table(&t);

    t.set("a", 2.0f32);
    assert_eq!(v.table().get("a").unwrap().number(), 1.0);
}

#[test]
fn copy_from_is_deep() {
    let mut inner = Table::new();
    inner.set("rate", 0.5f32);
    let src = Value::from(inner);

    let mut dst = Value::default();
    dst.copy_from(&src);
    dst.table_mut().unwrap().set("rate", 0.9f32);

    assert_eq!(src.table().get("rate").unwrap().number(), 0.5);
    assert_eq!(dst.table().get("rate").unwrap().number(), 0.9);
}

// =============================================================================
// Lenient accessors
// =============================================================================

#[test]
fn lenient_accessors_on_wrong_kind() {
    let v = Value::from("text");
    assert!(v.number().is_nan());
    assert!(v.array().is_empty());
    assert!(v.matrix().is_empty());
    assert!(v.table().is_empty());

    let n = Value::from(3.0f32);
    assert_eq!(n.string(), "");
}

#[test]
fn integer_truncates_toward_zero() {
    assert_eq!(Value::from(3.9f32).integer(), 3);
    assert_eq!(Value::from(-3.9f32).integer(), -3);
}

// =============================================================================
// Checked accessors
// =============================================================================

#[test]
fn checked_accessors_report_kinds() {
    let v = Value::from(vec![1.0f32]);
    assert_eq!(v.try_array().unwrap(), &[1.0]);
    let err = v.try_number().unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::TypeMismatch {
            expected: Kind::Number,
            actual: Kind::Array
        }
    ));
}

// =============================================================================
// Equality
// =============================================================================

#[test]
fn nan_equals_itself() {
    assert_eq!(Value::from(f32::NAN), Value::from(f32::NAN));
}

#[test]
fn kinds_never_compare_equal() {
    assert_ne!(Value::Number(1.0), Value::Array(vec![1.0]));
    assert_ne!(Value::Invalid, Value::from(""));
}
