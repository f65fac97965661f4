//! Decoding files of unknown type and exporting them.

use varstore::codec::Persist;
use varstore::foundation::{Kind, Table, Value};
use varstore::runtime::{Document, database_from_msgpack, table_from_msgpack};
use varstore::schema::{Database, VarFlags};

#[test]
fn dump_detects_unit_type() {
    let mut t = Table::new();
    t.set("capacity", 100.0f32);
    let doc = Document::from_bytes(&t.to_bytes().unwrap()).unwrap();
    assert_eq!(doc.summary(), "table (1 entries)");
    assert!(doc.to_string().contains("capacity: number 100"));

    let doc = Document::from_bytes(&Value::from("x").to_bytes().unwrap()).unwrap();
    assert_eq!(doc.summary(), "value (string)");
}

#[test]
fn msgpack_export_matches_binary() {
    let mut t = Table::new();
    t.set("years", vec![1.0f32, 2.0]);
    let doc = Document::from_bytes(&t.to_bytes().unwrap()).unwrap();
    let exported = table_from_msgpack(&doc.to_msgpack().unwrap()).unwrap();
    assert_eq!(exported, t);

    let mut db = Database::new();
    db.add("x", Kind::Array, "X", "", "", "a,b", VarFlags::OUTPUT, vec![0.0f32, 1.0]);
    let doc = Document::from_bytes(&db.to_bytes().unwrap()).unwrap();
    assert_eq!(database_from_msgpack(&doc.to_msgpack().unwrap()).unwrap(), db);
}

#[test]
fn file_decode_errors_name_the_file() {
    let path = std::env::temp_dir().join(format!("varstore_it_doc_{}.bin", std::process::id()));
    std::fs::write(&path, [0xF9u8, 1, 1, 0]).unwrap();
    let err = Document::read_file(&path).unwrap_err();
    let source = err.context.and_then(|c| c.source).unwrap();
    assert!(source.contains("varstore_it_doc"));
    std::fs::remove_file(&path).unwrap();
}
