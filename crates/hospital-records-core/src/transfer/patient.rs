//! Patient and insurance transfer shapes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::validate::{
    require_attr, require_date, require_i64, require_text, FieldType, ValidationError,
};
use crate::models::Patient;

/// External representation of a patient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientShape {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub dob: NaiveDate,
    pub ssn: String,
    pub gender: String,
    pub address: String,
    pub physician_id: i64,
}

impl PatientShape {
    /// Build from a raw JSON mapping.
    pub fn from_map(map: &Map<String, Value>) -> Result<Self, ValidationError> {
        Ok(Self {
            id: require_i64(map, "id")?,
            first_name: require_text(map, "first_name")?,
            last_name: require_text(map, "last_name")?,
            dob: require_date(map, "dob")?,
            ssn: require_text(map, "ssn")?,
            gender: require_text(map, "gender")?,
            address: require_text(map, "address")?,
            physician_id: require_i64(map, "physician_id")?,
        })
    }

    /// Build directly from a storage record. Fields that are nullable in
    /// storage but required here surface as `Missing`.
    pub fn from_record(record: &Patient) -> Result<Self, ValidationError> {
        Ok(Self {
            id: record.id,
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            dob: record.dob,
            ssn: record.ssn.clone(),
            gender: require_attr(record.gender.clone(), "gender", FieldType::Text)?,
            address: require_attr(record.address.clone(), "address", FieldType::Text)?,
            physician_id: require_attr(
                record.physician_id,
                "physician_id",
                FieldType::Integer,
            )?,
        })
    }
}

/// External representation of an insurance policy.
///
/// Built from raw mappings only; no record adapter is provided.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InsuranceShape {
    pub id: i64,
    pub provider_name: String,
    pub policy_number: String,
    pub patient_id: i64,
}

impl InsuranceShape {
    /// Build from a raw JSON mapping.
    pub fn from_map(map: &Map<String, Value>) -> Result<Self, ValidationError> {
        Ok(Self {
            id: require_i64(map, "id")?,
            provider_name: require_text(map, "provider_name")?,
            policy_number: require_text(map, "policy_number")?,
            patient_id: require_i64(map, "patient_id")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn patient_map() -> Value {
        json!({
            "id": 1,
            "first_name": "Jane",
            "last_name": "Doe",
            "dob": "1980-01-01",
            "ssn": "123-45-6789",
            "gender": "F",
            "address": "1 Main St",
            "physician_id": 2
        })
    }

    #[test]
    fn test_patient_from_map_parses_dob() {
        let value = patient_map();
        let shape = PatientShape::from_map(value.as_object().unwrap()).unwrap();
        assert_eq!(shape.dob, NaiveDate::from_ymd_opt(1980, 1, 1).unwrap());
        assert_eq!(shape.physician_id, 2);
    }

    #[test]
    fn test_patient_from_record() {
        let mut record = Patient::new(
            1,
            "Jane",
            "Doe",
            NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(),
            "123-45-6789",
        );
        record.gender = Some("F".into());
        record.address = Some("1 Main St".into());
        record.physician_id = Some(2);

        let shape = PatientShape::from_record(&record).unwrap();
        assert_eq!(shape.gender, "F");
        assert_eq!(shape.physician_id, 2);
    }

    #[test]
    fn test_patient_from_record_requires_physician() {
        let mut record = Patient::new(
            1,
            "Jane",
            "Doe",
            NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(),
            "123-45-6789",
        );
        record.gender = Some("F".into());
        record.address = Some("1 Main St".into());

        let err = PatientShape::from_record(&record).unwrap_err();
        assert_eq!(err.field(), "physician_id");
        assert_eq!(err.expected(), FieldType::Integer);
    }

    #[test]
    fn test_insurance_missing_policy_number() {
        let value = json!({"id": 1, "provider_name": "Acme Health", "patient_id": 2});
        let err = InsuranceShape::from_map(value.as_object().unwrap()).unwrap_err();
        assert_eq!(err.field(), "policy_number");
    }
}
