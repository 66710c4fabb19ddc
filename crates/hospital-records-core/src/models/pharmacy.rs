//! Medication and prescription records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A medication in the formulary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Medication {
    /// Unique identifier
    pub id: i64,
    /// Generic name
    pub name: String,
    /// Brand name
    pub brand: String,
    /// Free-text description
    pub description: String,
}

impl Medication {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        brand: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            brand: brand.into(),
            description: description.into(),
        }
    }
}

/// A prescription issued to a patient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Prescription {
    /// Unique identifier
    pub id: i64,
    /// Patient, if linked
    pub patient_id: Option<i64>,
    /// Physician who issued the prescription
    pub prescribing_physician_id: i64,
    /// Prescribed medication, if linked
    pub medication_id: Option<i64>,
    /// Date the prescription was issued
    pub prescription_date: NaiveDate,
    /// Number of units dispensed
    pub quantity: i64,
    /// Dosage instructions (e.g. "10mg"), if recorded
    pub dosage: Option<String>,
    /// Frequency instructions (e.g. "twice daily"), if recorded
    pub frequency: Option<String>,
    /// Course start date, if recorded
    pub start_date: Option<NaiveDate>,
    /// Course end date, if recorded
    pub end_date: Option<NaiveDate>,
    /// Refills remaining
    pub refills_available: i64,
}

impl Prescription {
    /// Create a prescription with the required fields.
    pub fn new(
        id: i64,
        prescribing_physician_id: i64,
        prescription_date: NaiveDate,
        quantity: i64,
        refills_available: i64,
    ) -> Self {
        Self {
            id,
            patient_id: None,
            prescribing_physician_id,
            medication_id: None,
            prescription_date,
            quantity,
            dosage: None,
            frequency: None,
            start_date: None,
            end_date: None,
            refills_available,
        }
    }

    /// Whether any refills remain.
    pub fn has_refills(&self) -> bool {
        self.refills_available > 0
    }
}
