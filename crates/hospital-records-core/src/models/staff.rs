//! Employee records and position-specific specializations.
//!
//! `Manager` and `Nurse` carry no foreign key back to `employee`; the tables
//! they map to are standalone.

use serde::{Deserialize, Serialize};

/// A hospital employee.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Employee {
    /// Unique identifier
    pub id: i64,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Social security number
    pub ssn: String,
    /// Job title (e.g. "Doctor", "Nurse")
    pub position: Option<String>,
    /// Employing hospital, if assigned
    pub hospital_id: Option<i64>,
    /// Department, if assigned
    pub department_id: Option<i64>,
}

impl Employee {
    /// Create an employee record with the required identity fields.
    pub fn new(
        id: i64,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        ssn: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            ssn: ssn.into(),
            position: None,
            hospital_id: None,
            department_id: None,
        }
    }

    /// Full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A manager row. Identifier only; no link to `employee`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Manager {
    /// Unique identifier
    pub id: i64,
}

/// A nurse row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Nurse {
    /// Unique identifier
    pub id: i64,
    /// Nursing qualification, if recorded
    pub qualification: Option<String>,
}

impl Nurse {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            qualification: None,
        }
    }
}
