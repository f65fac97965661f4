//! Integration tests for the host value bridge.

use std::collections::BTreeMap;

use varstore_foundation::{DynValue, Kind, Matrix, Table, Value};

fn list(items: &[f64]) -> DynValue {
    DynValue::List(items.iter().copied().map(DynValue::Number).collect())
}

#[test]
fn flat_list_into_matrix_without_type_change_is_a_column() {
    let mut v = Value::from(Matrix::filled(1, 1, 0.0));
    assert!(v.read_host(&list(&[4.0, 5.0]), false));
    assert_eq!(v.matrix().dims(), (2, 1));
}

#[test]
fn null_changes_nothing() {
    let mut v = Value::from(1.0f32);
    assert!(!v.read_host(&DynValue::Null, true));
    assert_eq!(v, Value::from(1.0f32));
}

#[test]
fn table_projects_and_reads_back() {
    let mut inner = Table::new();
    inner.set("rate", 0.25f32);
    let mut t = Table::new();
    t.set("capacity", 100.0f32);
    t.set("years", vec![1.0f32, 2.0, 3.0]);
    t.set("label", "plant");
    t.set("inner", inner);
    let original = Value::from(t);

    let host: DynValue = original.to_host();
    assert!(matches!(host, DynValue::Hash(ref h) if h.len() == 4));
    assert_eq!(Value::from_host(&host), original);
}

#[test]
fn nested_hash_entries_take_their_own_kind() {
    let mut h = BTreeMap::new();
    h.insert("m".to_string(), DynValue::List(vec![list(&[1.0, 2.0]), list(&[3.0])]));
    h.insert("s".to_string(), DynValue::String("x".into()));

    let mut v = Value::from(Table::new());
    assert!(v.read_host(&DynValue::Hash(h), false));
    let t = v.table();
    assert_eq!(t.get("m").unwrap().kind(), Kind::Matrix);
    assert_eq!(t.get("m").unwrap().matrix().as_slice(), &[1.0, 2.0, 3.0, 0.0]);
    assert_eq!(t.get("s").unwrap().string(), "x");
}
