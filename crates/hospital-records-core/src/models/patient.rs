//! Patient and insurance records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A patient record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    /// Unique identifier
    pub id: i64,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Date of birth
    pub dob: NaiveDate,
    /// Social security number
    pub ssn: String,
    /// Gender, if recorded
    pub gender: Option<String>,
    /// Home address, if recorded
    pub address: Option<String>,
    /// Primary physician, if assigned
    pub physician_id: Option<i64>,
}

impl Patient {
    /// Create a patient record with the required identity fields.
    pub fn new(
        id: i64,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        dob: NaiveDate,
        ssn: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            dob,
            ssn: ssn.into(),
            gender: None,
            address: None,
            physician_id: None,
        }
    }

    /// Full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether a primary physician has been assigned.
    pub fn has_physician(&self) -> bool {
        self.physician_id.is_some()
    }
}

/// An insurance policy held by a patient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Insurance {
    /// Unique identifier
    pub id: i64,
    /// Insured patient, if linked
    pub patient_id: Option<i64>,
    /// Insurance provider name
    pub provider_name: String,
    /// Policy number with the provider
    pub policy_number: String,
}

impl Insurance {
    pub fn new(
        id: i64,
        provider_name: impl Into<String>,
        policy_number: impl Into<String>,
    ) -> Self {
        Self {
            id,
            patient_id: None,
            provider_name: provider_name.into(),
            policy_number: policy_number.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dob() -> NaiveDate {
        NaiveDate::from_ymd_opt(1980, 1, 1).unwrap()
    }

    #[test]
    fn test_new_patient() {
        let patient = Patient::new(1, "Jane", "Doe", dob(), "123-45-6789");
        assert_eq!(patient.full_name(), "Jane Doe");
        assert_eq!(patient.dob, dob());
        assert!(!patient.has_physician());
    }

    #[test]
    fn test_patient_serde_dob_is_iso_date() {
        let patient = Patient::new(1, "Jane", "Doe", dob(), "123-45-6789");
        let json = serde_json::to_value(&patient).unwrap();
        assert_eq!(json["dob"], "1980-01-01");
    }

    #[test]
    fn test_new_insurance_unlinked() {
        let ins = Insurance::new(9, "Acme Health", "POL-123");
        assert!(ins.patient_id.is_none());
        assert_eq!(ins.policy_number, "POL-123");
    }
}
