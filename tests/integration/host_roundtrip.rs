//! Values that travel host -> table -> bytes -> table -> host.

use std::collections::BTreeMap;

use varstore::codec::Persist;
use varstore::foundation::{DynValue, Kind, Table, Value};

#[test]
fn host_hash_survives_the_wire() {
    let mut h = BTreeMap::new();
    h.insert("capacity".to_string(), DynValue::Number(100.0));
    h.insert(
        "years".to_string(),
        DynValue::List(vec![DynValue::Number(1.0), DynValue::Number(2.0)]),
    );
    h.insert("name".to_string(), DynValue::String("plant".into()));

    let value = Value::from_host(&DynValue::Hash(h));
    let table = value.try_table().unwrap().clone();
    let back = Table::from_bytes(&table.to_bytes().unwrap()).unwrap();
    assert_eq!(back.get("years").unwrap().kind(), Kind::Array);

    let host: DynValue = Value::from(back).to_host();
    let DynValue::Hash(entries) = host else {
        panic!("expected a hash");
    };
    assert_eq!(entries.get("capacity"), Some(&DynValue::Number(100.0)));
    assert_eq!(entries.get("name"), Some(&DynValue::String("plant".into())));
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn numeric_tables_survive_bridge_and_wire(
            entries in prop::collection::btree_map("[a-z]{1,8}", -1.0e6f32..1.0e6, 0..16)
        ) {
            let table: Table = entries.iter().map(|(k, v)| (k.clone(), *v)).collect();
            let host: DynValue = Value::from(table.clone()).to_host();
            let back = Value::from_host(&host);
            let bytes = back.try_table().unwrap().to_bytes().unwrap();
            let decoded = Table::from_bytes(&bytes).unwrap();
            prop_assert_eq!(decoded, table);
        }
    }
}
