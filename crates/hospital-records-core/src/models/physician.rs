//! Physician and appointment records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A physician record.
///
/// The storage row carries only the specialty; a physician's staff data
/// (name, ssn, position) lives in their `employee` row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Physician {
    /// Unique identifier
    pub id: i64,
    /// Medical specialty, if recorded
    pub specialty: Option<String>,
}

impl Physician {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            specialty: None,
        }
    }

    pub fn with_specialty(id: i64, specialty: impl Into<String>) -> Self {
        Self {
            id,
            specialty: Some(specialty.into()),
        }
    }
}

/// A scheduled appointment between a patient and a physician.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    /// Unique identifier
    pub id: i64,
    /// Patient, if linked
    pub patient_id: Option<i64>,
    /// Scheduled date
    pub appointment_date: NaiveDate,
    /// Reason for the visit
    pub description: String,
    /// Attending physician, if linked
    pub physician_id: Option<i64>,
}

impl Appointment {
    /// Create an appointment with the required date and description.
    pub fn new(id: i64, appointment_date: NaiveDate, description: impl Into<String>) -> Self {
        Self {
            id,
            patient_id: None,
            appointment_date,
            description: description.into(),
            physician_id: None,
        }
    }
}
