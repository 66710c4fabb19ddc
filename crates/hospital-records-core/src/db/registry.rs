//! Explicit table definitions and the schema registry they attach to.
//!
//! Nothing here registers itself globally: every table is a plain value,
//! registered on a [`SchemaRegistry`] in a deterministic order and applied
//! through a registry reference handed to [`super::Database::open`].

use rusqlite::Connection;

use super::DbResult;

/// A single table definition: its name and the DDL that creates it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableDef {
    /// Table name as it appears in `sqlite_master`
    pub name: &'static str,
    /// `CREATE TABLE`/`CREATE INDEX` batch for this table
    pub ddl: &'static str,
}

/// An ordered collection of table definitions.
///
/// Registration order is application order; tables referenced by a foreign
/// key must be registered before their referents.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    tables: Vec<TableDef>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Register a table. Later registrations are applied later.
    pub fn register(&mut self, table: TableDef) {
        self.tables.push(table);
    }

    /// Registered tables, in application order.
    pub fn tables(&self) -> &[TableDef] {
        &self.tables
    }

    /// Registered table names, in application order.
    pub fn table_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tables.iter().map(|t| t.name)
    }

    /// Apply all registered DDL to a connection.
    pub fn apply(&self, conn: &Connection) -> DbResult<()> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        for table in &self.tables {
            conn.execute_batch(table.ddl)?;
        }
        Ok(())
    }
}

pub const HOSPITAL: TableDef = TableDef {
    name: "hospital",
    ddl: r#"
CREATE TABLE IF NOT EXISTS hospital (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    address TEXT NOT NULL
);
"#,
};

pub const DEPARTMENT: TableDef = TableDef {
    name: "department",
    ddl: r#"
CREATE TABLE IF NOT EXISTS department (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    hospital_id INTEGER REFERENCES hospital(id)
);

CREATE INDEX IF NOT EXISTS idx_department_hospital ON department(hospital_id);
"#,
};

pub const PHYSICIAN: TableDef = TableDef {
    name: "physician",
    ddl: r#"
CREATE TABLE IF NOT EXISTS physician (
    id INTEGER PRIMARY KEY,
    specialty TEXT
);
"#,
};

pub const PATIENT: TableDef = TableDef {
    name: "patient",
    ddl: r#"
CREATE TABLE IF NOT EXISTS patient (
    id INTEGER PRIMARY KEY,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    dob TEXT NOT NULL,                           -- ISO-8601 date
    ssn TEXT NOT NULL,
    gender TEXT,
    address TEXT,
    physician_id INTEGER REFERENCES physician(id)
);

CREATE INDEX IF NOT EXISTS idx_patient_physician ON patient(physician_id);
CREATE INDEX IF NOT EXISTS idx_patient_last_name ON patient(last_name);
"#,
};

pub const EMPLOYEE: TableDef = TableDef {
    name: "employee",
    ddl: r#"
CREATE TABLE IF NOT EXISTS employee (
    id INTEGER PRIMARY KEY,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    ssn TEXT NOT NULL,
    position TEXT,
    hospital_id INTEGER REFERENCES hospital(id),
    department_id INTEGER REFERENCES department(id)
);

CREATE INDEX IF NOT EXISTS idx_employee_hospital ON employee(hospital_id);
CREATE INDEX IF NOT EXISTS idx_employee_department ON employee(department_id);
"#,
};

pub const APPOINTMENT: TableDef = TableDef {
    name: "appointment",
    ddl: r#"
CREATE TABLE IF NOT EXISTS appointment (
    id INTEGER PRIMARY KEY,
    patient_id INTEGER REFERENCES patient(id),
    appointment_date TEXT NOT NULL,              -- ISO-8601 date
    description TEXT NOT NULL,
    physician_id INTEGER REFERENCES physician(id)
);

CREATE INDEX IF NOT EXISTS idx_appointment_patient ON appointment(patient_id);
CREATE INDEX IF NOT EXISTS idx_appointment_physician ON appointment(physician_id);
"#,
};

pub const INSURANCE: TableDef = TableDef {
    name: "insurance",
    ddl: r#"
CREATE TABLE IF NOT EXISTS insurance (
    id INTEGER PRIMARY KEY,
    patient_id INTEGER REFERENCES patient(id),
    provider_name TEXT NOT NULL,
    policy_number TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_insurance_patient ON insurance(patient_id);
"#,
};

pub const MEDICATION: TableDef = TableDef {
    name: "medication",
    ddl: r#"
CREATE TABLE IF NOT EXISTS medication (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    brand TEXT NOT NULL,
    description TEXT NOT NULL
);
"#,
};

pub const PRESCRIPTION: TableDef = TableDef {
    name: "prescription",
    ddl: r#"
CREATE TABLE IF NOT EXISTS prescription (
    id INTEGER PRIMARY KEY,
    patient_id INTEGER REFERENCES patient(id),
    prescribing_physician_id INTEGER NOT NULL,
    medication_id INTEGER REFERENCES medication(id),
    prescription_date TEXT NOT NULL,             -- ISO-8601 date
    quantity INTEGER NOT NULL,
    dosage TEXT,
    frequency TEXT,
    start_date TEXT,                             -- ISO-8601 date
    end_date TEXT,                               -- ISO-8601 date
    refills_available INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_prescription_patient ON prescription(patient_id);
CREATE INDEX IF NOT EXISTS idx_prescription_medication ON prescription(medication_id);
"#,
};

pub const ROOM_TYPE: TableDef = TableDef {
    name: "room_type",
    ddl: r#"
CREATE TABLE IF NOT EXISTS room_type (
    id INTEGER PRIMARY KEY,
    type TEXT
);
"#,
};

// room_type_id is required but deliberately carries no REFERENCES clause.
pub const ROOM: TableDef = TableDef {
    name: "room",
    ddl: r#"
CREATE TABLE IF NOT EXISTS room (
    id INTEGER PRIMARY KEY,
    room_type_id INTEGER NOT NULL,
    available INTEGER NOT NULL                   -- boolean
);
"#,
};

pub const MANAGER: TableDef = TableDef {
    name: "manager",
    ddl: r#"
CREATE TABLE IF NOT EXISTS manager (
    id INTEGER PRIMARY KEY
);
"#,
};

pub const NURSE: TableDef = TableDef {
    name: "nurse",
    ddl: r#"
CREATE TABLE IF NOT EXISTS nurse (
    id INTEGER PRIMARY KEY,
    qualification TEXT
);
"#,
};

/// Build the full hospital schema, foreign-key targets first.
pub fn hospital_schema() -> SchemaRegistry {
    let mut registry = SchemaRegistry::new();
    registry.register(HOSPITAL);
    registry.register(DEPARTMENT);
    registry.register(PHYSICIAN);
    registry.register(PATIENT);
    registry.register(EMPLOYEE);
    registry.register(APPOINTMENT);
    registry.register(INSURANCE);
    registry.register(MEDICATION);
    registry.register(PRESCRIPTION);
    registry.register(ROOM_TYPE);
    registry.register(ROOM);
    registry.register(MANAGER);
    registry.register(NURSE);
    registry
}
