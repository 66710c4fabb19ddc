//! Hospital Records Core Library
//!
//! Persistence schema and transfer shapes for a hospital management record
//! system.
//!
//! # Architecture
//!
//! ```text
//!                  ┌──────────────────────────────┐
//!                  │      Canonical records        │
//!                  │  (models: Patient, Room, ...) │
//!                  └───────┬──────────────┬───────┘
//!                          │              │
//!              storage projection   transfer projection
//!                          │              │
//!                          ▼              ▼
//!              ┌──────────────────┐  ┌──────────────────────┐
//!              │ db: SQLite tables │  │ transfer: validated  │
//!              │ via SchemaRegistry│  │ shapes (from_map /   │
//!              │ + record ops      │  │ from_record)         │
//!              └──────────────────┘  └──────────────────────┘
//! ```
//!
//! # Core Principle
//!
//! **One definition per entity.** The `models` module is the single source of
//! truth; the storage and transfer sides are projections of it, so the two
//! cannot drift apart.
//!
//! # Modules
//!
//! - [`models`]: Canonical entity records (Patient, Physician, Room, ...)
//! - [`db`]: SQLite storage projection with an explicit schema registry
//! - [`transfer`]: Validated external shapes with strict construction

pub mod db;
pub mod models;
pub mod transfer;

// Re-export commonly used types
pub use db::{hospital_schema, Database, DbError, DbResult, SchemaRegistry, TableDef};
pub use models::{
    Appointment, Department, Employee, Hospital, Insurance, Manager, Medication, Nurse, Patient,
    Physician, Prescription, Room, RoomType,
};
pub use transfer::{
    AppointmentShape, DepartmentShape, FieldType, HospitalShape, InsuranceShape, ManagerShape,
    MedicationShape, NurseShape, PatientShape, PhysicianShape, PrescriptionShape, RoomShape,
    RoomTypeShape, StaffAttrs, ValidationError,
};
