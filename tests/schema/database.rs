//! Registry operations and persistence.

use varstore_codec::Persist;
use varstore_foundation::{Kind, Value};
use varstore_schema::{Database, NOT_FOUND_LABEL, VarFlags, VarInfo};

fn add_x(db: &mut Database) {
    db.add("x", Kind::Number, "X", "m", "G", "a,b", VarFlags::INPUT, 1.0f32);
}

#[test]
fn add_then_delete() {
    let mut db = Database::new();
    add_x(&mut db);
    assert!(db.lookup("x").is_some());
    assert!(db.delete("x"));
    assert!(db.lookup("x").is_none());
    assert!(!db.delete("x"));
}

#[test]
fn rename_to_free_name() {
    let mut db = Database::new();
    add_x(&mut db);
    assert!(db.rename("x", "y"));
    assert!(db.lookup("x").is_none());
    assert_eq!(db.label("y"), "X");
    assert_eq!(db.lookup("y").unwrap().name, "x");
}

#[test]
fn rename_onto_existing_name_fails() {
    let mut db = Database::new();
    add_x(&mut db);
    db.add("y", Kind::String, "Y", "", "", "", VarFlags::empty(), Value::Invalid);
    assert!(!db.rename("x", "y"));
    assert_eq!(db.label("x"), "X");
    assert_eq!(db.label("y"), "Y");
}

#[test]
fn sentinels() {
    let db = Database::new();
    assert_eq!(db.var_type("q"), Kind::Invalid);
    assert_eq!(db.label("q"), NOT_FOUND_LABEL);
    assert_eq!(db.label("q"), "<not found>");
    assert_eq!(db.units("q"), "");
    assert_eq!(db.group("q"), "");
    assert!(db.index_labels("q").is_empty());
    assert_eq!(db.flags("q").bits(), 0);
    assert!(db.default_value("q").is_invalid());
}

#[test]
fn index_labels_split_on_comma() {
    let mut db = Database::new();
    add_x(&mut db);
    assert_eq!(db.index_labels("x"), ["a", "b"]);
}

#[test]
fn registry_roundtrip_preserves_everything() {
    let mut db = Database::new();
    add_x(&mut db);
    db.insert(
        "profile",
        VarInfo::new("profile", Kind::Matrix)
            .with_label("Hourly profile")
            .with_index_labels(["hour", "day"])
            .with_flags(VarFlags::from_raw(0x0100_0001))
            .with_default(varstore_foundation::Matrix::filled(2, 2, 0.5)),
    );

    let back = Database::from_bytes(&db.to_bytes().unwrap()).unwrap();
    assert_eq!(back, db);
    assert_eq!(back.flags("profile").bits(), 0x0100_0001);
    assert_eq!(back.list_all(), vec!["profile", "x"]);
}

#[test]
fn registry_file_roundtrip() {
    let path = std::env::temp_dir().join(format!("varstore_it_db_{}.bin", std::process::id()));
    let mut db = Database::new();
    add_x(&mut db);
    assert!(db.save_file(&path));

    let mut back = Database::new();
    assert!(back.load_file(&path));
    assert_eq!(back, db);
    std::fs::remove_file(&path).unwrap();
}
