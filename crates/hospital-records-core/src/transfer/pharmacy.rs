//! Medication and prescription transfer shapes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::validate::{
    require_attr, require_date, require_i64, require_text, FieldType, ValidationError,
};
use crate::models::{Medication, Prescription};

/// External representation of a medication.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MedicationShape {
    pub id: i64,
    pub name: String,
    pub brand: String,
    pub description: String,
}

impl MedicationShape {
    /// Build from a raw JSON mapping.
    pub fn from_map(map: &Map<String, Value>) -> Result<Self, ValidationError> {
        Ok(Self {
            id: require_i64(map, "id")?,
            name: require_text(map, "name")?,
            brand: require_text(map, "brand")?,
            description: require_text(map, "description")?,
        })
    }

    /// Build directly from a storage record.
    pub fn from_record(record: &Medication) -> Result<Self, ValidationError> {
        Ok(Self {
            id: record.id,
            name: record.name.clone(),
            brand: record.brand.clone(),
            description: record.description.clone(),
        })
    }
}

/// External representation of a prescription.
///
/// Every field is required externally, including course dates that are
/// nullable in storage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrescriptionShape {
    pub id: i64,
    pub patient_id: i64,
    pub prescribing_physician_id: i64,
    pub medication_id: i64,
    pub prescription_date: NaiveDate,
    pub quantity: i64,
    pub dosage: String,
    pub frequency: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub refills_available: i64,
}

impl PrescriptionShape {
    /// Build from a raw JSON mapping.
    pub fn from_map(map: &Map<String, Value>) -> Result<Self, ValidationError> {
        Ok(Self {
            id: require_i64(map, "id")?,
            patient_id: require_i64(map, "patient_id")?,
            prescribing_physician_id: require_i64(map, "prescribing_physician_id")?,
            medication_id: require_i64(map, "medication_id")?,
            prescription_date: require_date(map, "prescription_date")?,
            quantity: require_i64(map, "quantity")?,
            dosage: require_text(map, "dosage")?,
            frequency: require_text(map, "frequency")?,
            start_date: require_date(map, "start_date")?,
            end_date: require_date(map, "end_date")?,
            refills_available: require_i64(map, "refills_available")?,
        })
    }

    /// Build directly from a storage record. Fields that are nullable in
    /// storage but required here surface as `Missing`.
    pub fn from_record(record: &Prescription) -> Result<Self, ValidationError> {
        Ok(Self {
            id: record.id,
            patient_id: require_attr(record.patient_id, "patient_id", FieldType::Integer)?,
            prescribing_physician_id: record.prescribing_physician_id,
            medication_id: require_attr(
                record.medication_id,
                "medication_id",
                FieldType::Integer,
            )?,
            prescription_date: record.prescription_date,
            quantity: record.quantity,
            dosage: require_attr(record.dosage.clone(), "dosage", FieldType::Text)?,
            frequency: require_attr(record.frequency.clone(), "frequency", FieldType::Text)?,
            start_date: require_attr(record.start_date, "start_date", FieldType::Date)?,
            end_date: require_attr(record.end_date, "end_date", FieldType::Date)?,
            refills_available: record.refills_available,
        })
    }
}
