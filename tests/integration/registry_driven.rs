//! Using a registry to seed, edit, and validate a case table.

use varstore::codec::{Persist, load_file, save_file};
use varstore::foundation::{Kind, Table, Value};
use varstore::schema::{Database, FieldSpec, VarFlags, get, set};

fn registry() -> Database {
    let mut db = Database::new();
    db.add(
        "capacity",
        Kind::Number,
        "Capacity",
        "kW",
        "System",
        "",
        VarFlags::REQUIRED | VarFlags::INPUT,
        100.0f32,
    );
    db.add(
        "monthly",
        Kind::Array,
        "Monthly",
        "",
        "Losses",
        "Jan,Feb",
        VarFlags::INPUT,
        vec![1.0f32, 1.0],
    );
    db.add(
        "energy",
        Kind::Number,
        "Energy",
        "kWh",
        "Results",
        "",
        VarFlags::OUTPUT | VarFlags::CALCULATED,
        Value::Invalid,
    );
    db
}

#[test]
fn seed_edit_validate_persist() {
    let db = registry();
    let mut case = db.seed_table();
    assert!(db.check_table(&case).is_empty());
    assert!(!case.contains("energy"));

    let capacity = FieldSpec::from_info("capacity", db.lookup("capacity").unwrap());
    assert_eq!(capacity.group, "System");
    capacity.set(&mut case, 250.0f32).unwrap();
    set(&mut case, "energy", 1.0e6f32);

    let path = std::env::temp_dir().join(format!("varstore_it_case_{}.bin", std::process::id()));
    assert!(save_file(&case, &path));
    let mut loaded = Table::new();
    assert!(load_file(&mut loaded, &path));
    std::fs::remove_file(&path).unwrap();

    assert_eq!(get::<f32>(&loaded, "capacity").unwrap(), 250.0);
    assert!(db.check_table(&loaded).is_empty());
}

#[test]
fn registry_and_case_share_a_stream() {
    let db = registry();
    let case = db.seed_table();

    let mut bytes = Vec::new();
    db.write_to(&mut bytes).unwrap();
    case.write_to(&mut bytes).unwrap();

    let mut reader = bytes.as_slice();
    let mut db2 = Database::new();
    let mut case2 = Table::new();
    assert!(db2.read_from(&mut reader));
    assert!(case2.read_from(&mut reader));
    assert_eq!(db2, db);
    assert_eq!(case2, case);
}
