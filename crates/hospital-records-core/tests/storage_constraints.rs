//! Storage-side constraint behavior: NOT NULL columns, foreign keys, and
//! registry application.

use hospital_records_core::{hospital_schema, Database, DbError};
use rusqlite::Connection;

/// For each required column, insert the row with that column omitted and
/// assert a constraint violation; then insert the full row and assert it
/// lands.
fn assert_required_columns(
    conn: &Connection,
    table: &str,
    columns: &[(&str, &str)],
    required: &[&str],
) {
    for req in required {
        let kept: Vec<_> = columns.iter().filter(|(name, _)| name != req).collect();
        let names: Vec<_> = kept.iter().map(|(name, _)| *name).collect();
        let values: Vec<_> = kept.iter().map(|(_, value)| *value).collect();
        let sql = format!(
            "INSERT INTO {table} ({}) VALUES ({})",
            names.join(", "),
            values.join(", ")
        );

        let err: DbError = conn.execute(&sql, []).unwrap_err().into();
        assert!(
            err.is_constraint_violation(),
            "{table}.{req} unset should violate NOT NULL"
        );
    }

    let names: Vec<_> = columns.iter().map(|(name, _)| *name).collect();
    let values: Vec<_> = columns.iter().map(|(_, value)| *value).collect();
    let sql = format!(
        "INSERT INTO {table} ({}) VALUES ({})",
        names.join(", "),
        values.join(", ")
    );
    conn.execute(&sql, [])
        .unwrap_or_else(|e| panic!("full {table} row should insert: {e}"));
}

#[test]
fn every_required_column_is_enforced() {
    let db = Database::open_in_memory(&hospital_schema()).unwrap();
    let conn = db.conn();

    assert_required_columns(
        conn,
        "hospital",
        &[("id", "1"), ("name", "'General'"), ("address", "'1 Main St'")],
        &["name", "address"],
    );
    assert_required_columns(
        conn,
        "department",
        &[("id", "1"), ("name", "'Cardiology'")],
        &["name"],
    );
    assert_required_columns(
        conn,
        "patient",
        &[
            ("id", "1"),
            ("first_name", "'Jane'"),
            ("last_name", "'Doe'"),
            ("dob", "'1980-01-01'"),
            ("ssn", "'123-45-6789'"),
        ],
        &["first_name", "last_name", "dob", "ssn"],
    );
    assert_required_columns(
        conn,
        "employee",
        &[
            ("id", "1"),
            ("first_name", "'Ada'"),
            ("last_name", "'Lovelace'"),
            ("ssn", "'000-00-0001'"),
        ],
        &["first_name", "last_name", "ssn"],
    );
    assert_required_columns(
        conn,
        "appointment",
        &[
            ("id", "1"),
            ("appointment_date", "'2024-06-01'"),
            ("description", "'Checkup'"),
        ],
        &["appointment_date", "description"],
    );
    assert_required_columns(
        conn,
        "insurance",
        &[
            ("id", "1"),
            ("provider_name", "'Acme Health'"),
            ("policy_number", "'POL-1'"),
        ],
        &["provider_name", "policy_number"],
    );
    assert_required_columns(
        conn,
        "medication",
        &[
            ("id", "1"),
            ("name", "'Atorvastatin'"),
            ("brand", "'Lipitor'"),
            ("description", "'Statin'"),
        ],
        &["name", "brand", "description"],
    );
    assert_required_columns(
        conn,
        "prescription",
        &[
            ("id", "1"),
            ("prescribing_physician_id", "2"),
            ("prescription_date", "'2024-03-15'"),
            ("quantity", "30"),
            ("refills_available", "2"),
        ],
        &[
            "prescribing_physician_id",
            "prescription_date",
            "quantity",
            "refills_available",
        ],
    );
    assert_required_columns(
        conn,
        "room",
        &[("id", "1"), ("room_type_id", "2"), ("available", "1")],
        &["room_type_id", "available"],
    );
}

#[test]
fn foreign_key_violations_surface_as_constraint_errors() {
    let db = Database::open_in_memory(&hospital_schema()).unwrap();

    let err: DbError = db
        .conn()
        .execute(
            "INSERT INTO patient (id, first_name, last_name, dob, ssn, physician_id)
             VALUES (1, 'Jane', 'Doe', '1980-01-01', '123-45-6789', 99)",
            [],
        )
        .unwrap_err()
        .into();
    assert!(err.is_constraint_violation());
}

#[test]
fn schema_applies_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.db");

    let db = Database::open(&path, &hospital_schema()).unwrap();
    drop(db);

    // Reopening applies the same DDL idempotently.
    let db = Database::open(&path, &hospital_schema()).unwrap();
    let count: i64 = db
        .conn()
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='patient'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn registry_lists_all_thirteen_tables() {
    let registry = hospital_schema();
    assert_eq!(registry.tables().len(), 13);

    let names: Vec<_> = registry.table_names().collect();
    for expected in [
        "hospital",
        "department",
        "physician",
        "patient",
        "employee",
        "appointment",
        "insurance",
        "medication",
        "prescription",
        "room_type",
        "room",
        "manager",
        "nurse",
    ] {
        assert!(names.contains(&expected), "registry should list {expected}");
    }
}
