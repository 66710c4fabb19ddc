//! Physician and appointment transfer shapes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::staff::StaffAttrs;
use super::validate::{require_attr, require_date, require_i64, require_text, FieldType, ValidationError};
use crate::models::{Employee, Physician};

/// External representation of a physician.
///
/// Carries the staff field block in addition to the specialty: the external
/// shape presents a physician as staff, even though the storage row holds
/// only the specialty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhysicianShape {
    pub id: i64,
    #[serde(flatten)]
    pub staff: StaffAttrs,
    pub specialty: String,
}

impl PhysicianShape {
    /// Build from a raw JSON mapping.
    pub fn from_map(map: &Map<String, Value>) -> Result<Self, ValidationError> {
        Ok(Self {
            id: require_i64(map, "id")?,
            staff: StaffAttrs::from_map(map)?,
            specialty: require_text(map, "specialty")?,
        })
    }

    /// Build directly from storage records: the physician row plus the
    /// employee row holding the physician's staff data.
    pub fn from_records(
        physician: &Physician,
        employee: &Employee,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: physician.id,
            staff: StaffAttrs::from_employee(employee)?,
            specialty: require_attr(
                physician.specialty.clone(),
                "specialty",
                FieldType::Text,
            )?,
        })
    }
}

/// External representation of an appointment.
///
/// Built from raw mappings only; no record adapter is provided.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppointmentShape {
    pub id: i64,
    pub patient_id: i64,
    pub physician_id: i64,
    pub appointment_date: NaiveDate,
    pub description: String,
}

impl AppointmentShape {
    /// Build from a raw JSON mapping.
    pub fn from_map(map: &Map<String, Value>) -> Result<Self, ValidationError> {
        Ok(Self {
            id: require_i64(map, "id")?,
            patient_id: require_i64(map, "patient_id")?,
            physician_id: require_i64(map, "physician_id")?,
            appointment_date: require_date(map, "appointment_date")?,
            description: require_text(map, "description")?,
        })
    }
}
