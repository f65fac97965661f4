//! Typed getters and setters.

use varstore_foundation::{ErrorKind, Kind, Matrix, Table};
use varstore_schema::{VarType, get, set};

#[test]
fn kinds_match_rust_types() {
    assert_eq!(<f32 as VarType>::KIND, Kind::Number);
    assert_eq!(<i32 as VarType>::KIND, Kind::Number);
    assert_eq!(<bool as VarType>::KIND, Kind::Number);
    assert_eq!(<Vec<f32> as VarType>::KIND, Kind::Array);
    assert_eq!(<Matrix as VarType>::KIND, Kind::Matrix);
    assert_eq!(<String as VarType>::KIND, Kind::String);
    assert_eq!(<Table as VarType>::KIND, Kind::Table);
}

#[test]
fn set_then_get() {
    let mut t = Table::new();
    set(&mut t, "profile", Matrix::filled(2, 3, 1.0));
    set(&mut t, "enabled", false);
    assert_eq!(get::<Matrix>(&t, "profile").unwrap().dims(), (2, 3));
    assert!(!get::<bool>(&t, "enabled").unwrap());
}

#[test]
fn get_reports_missing_and_mismatch() {
    let mut t = Table::new();
    t.set("n", 1.0f32);
    assert!(matches!(get::<String>(&t, "n").unwrap_err().kind, ErrorKind::TypeMismatch { .. }));
    assert!(matches!(get::<f32>(&t, "m").unwrap_err().kind, ErrorKind::NotFound(_)));
}
