//! Schema and registry validation of whole tables.

use varstore_foundation::{Kind, Table};
use varstore_schema::{Database, FieldSpec, Problem, Schema, VarFlags};

fn schema() -> Schema {
    Schema::new()
        .with_field(FieldSpec::parse("system_capacity", Kind::Number, "POSITIVE", "*").unwrap())
        .with_field(
            FieldSpec::parse("analysis_period", Kind::Number, "INTEGER,MIN=1,MAX=50", "?=25")
                .unwrap(),
        )
        .with_field(
            FieldSpec::parse("track_mode", Kind::Number, "INTEGER,MIN=0,MAX=2", "?=0").unwrap(),
        )
        .with_field(
            FieldSpec::parse("rotlim", Kind::Number, "MIN=-90,MAX=90", "track_mode=1").unwrap(),
        )
}

#[test]
fn seeded_table_needs_only_required_fields() {
    let s = schema();
    let mut t = s.seed();
    assert_eq!(t.get("analysis_period").unwrap().number(), 25.0);

    let v = s.validate(&t);
    assert_eq!(v.len(), 1);
    assert_eq!(v[0].problem, Problem::Missing);

    t.set("system_capacity", 4.0f32);
    assert!(s.validate(&t).is_empty());
}

#[test]
fn conditional_requirement_and_bounds() {
    let s = schema();
    let mut t = s.seed();
    t.set("system_capacity", 4.0f32);
    t.set("track_mode", 1.0f32);
    assert_eq!(s.validate(&t)[0].name, "rotlim");

    t.set("rotlim", 120.0f32);
    assert!(matches!(s.validate(&t)[0].problem, Problem::Constraint(_)));

    t.set("rotlim", 45.0f32);
    assert!(s.validate(&t).is_empty());
}

#[test]
fn registry_check_uses_flags_and_kinds() {
    let mut db = Database::new();
    db.add("capacity", Kind::Number, "Capacity", "kW", "", "", VarFlags::REQUIRED, 1.0f32);
    db.add("name", Kind::String, "Name", "", "", "", VarFlags::empty(), "plant");

    let mut t = Table::new();
    t.set("name", 3.0f32);
    let problems = db.check_table(&t);
    assert_eq!(problems.len(), 2);
    assert_eq!(problems[0].problem, Problem::Missing);
    assert_eq!(
        problems[1].problem,
        Problem::WrongKind {
            expected: Kind::String,
            actual: Kind::Number
        }
    );

    assert!(db.check_table(&db.seed_table()).is_empty());
}
