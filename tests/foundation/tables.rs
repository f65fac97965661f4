//! Integration tests for Table semantics.

use varstore_foundation::{Kind, Table, Value};

#[test]
fn set_counts_and_replaces() {
    let mut t = Table::new();
    t.set("capacity", 100.0f32);
    t.set("years", 25.0f32);
    assert_eq!(t.len(), 2);

    t.set("capacity", 120.0f32);
    assert_eq!(t.len(), 2);
    assert_eq!(t.get("capacity").unwrap().number(), 120.0);
}

#[test]
fn set_stores_a_copy() {
    let v = Value::from(vec![1.0f32, 2.0]);
    let mut t = Table::new();
    t.set("a", &v);
    t.get_mut("a").unwrap().array_mut().unwrap().push(3.0);
    assert_eq!(v.array().len(), 2);
    assert_eq!(t.get("a").unwrap().array().len(), 3);
}

#[test]
fn create_inserts_invalid_once() {
    let mut t = Table::new();
    assert!(t.create("x").is_invalid());
    t.create("x").set_number(1.0);
    assert_eq!(t.create("x").number(), 1.0);
    assert_eq!(t.len(), 1);
}

#[test]
fn names_are_case_sensitive() {
    let mut t = Table::new();
    t.set("Rate", 1.0f32);
    assert!(t.get("rate").is_none());
    assert!(t.contains("Rate"));
}

#[test]
fn remove_and_clear() {
    let mut t: Table = [("a", 1.0f32), ("b", 2.0)].into_iter().collect();
    assert_eq!(t.remove("a"), Some(Value::Number(1.0)));
    assert!(t.remove("a").is_none());
    t.clear();
    assert!(t.is_empty());
}

#[test]
fn copy_from_replaces_everything() {
    let src: Table = [("a", 1.0f32)].into_iter().collect();
    let mut dst: Table = [("z", 9.0f32)].into_iter().collect();
    dst.copy_from(&src);
    assert_eq!(dst, src);
    assert!(!dst.contains("z"));
}

#[test]
fn clones_do_not_alias() {
    let mut a = Table::new();
    a.set("n", 1.0f32);
    let mut b = a.clone();
    b.set("n", 2.0f32);
    b.set("m", "new");
    assert_eq!(a.get("n").unwrap().number(), 1.0);
    assert!(!a.contains("m"));
}

#[test]
fn list_all_names_every_entry() {
    let mut t = Table::new();
    t.set("b", 1.0f32);
    t.set("a", "x");
    let mut names = t.list_all();
    names.sort();
    assert_eq!(names, vec!["a", "b"]);
    assert_eq!(t.iter().count(), 2);
    assert!(t.iter().any(|(n, v)| n == "a" && v.kind() == Kind::String));
}
