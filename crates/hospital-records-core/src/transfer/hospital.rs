//! Hospital and department transfer shapes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::validate::{require_i64, require_text, ValidationError};
use crate::models::Hospital;

/// External representation of a hospital.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HospitalShape {
    pub id: i64,
    pub name: String,
    pub address: String,
}

impl HospitalShape {
    /// Build from a raw JSON mapping.
    pub fn from_map(map: &Map<String, Value>) -> Result<Self, ValidationError> {
        Ok(Self {
            id: require_i64(map, "id")?,
            name: require_text(map, "name")?,
            address: require_text(map, "address")?,
        })
    }

    /// Build directly from a storage record.
    pub fn from_record(record: &Hospital) -> Result<Self, ValidationError> {
        Ok(Self {
            id: record.id,
            name: record.name.clone(),
            address: record.address.clone(),
        })
    }
}

/// External representation of a department.
///
/// Built from raw mappings only; no record adapter is provided.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DepartmentShape {
    pub id: i64,
    pub name: String,
    pub hospital_id: i64,
}

impl DepartmentShape {
    /// Build from a raw JSON mapping.
    pub fn from_map(map: &Map<String, Value>) -> Result<Self, ValidationError> {
        Ok(Self {
            id: require_i64(map, "id")?,
            name: require_text(map, "name")?,
            hospital_id: require_i64(map, "hospital_id")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hospital_from_map() {
        let value = json!({"id": 1, "name": "General", "address": "1 Main St"});
        let shape = HospitalShape::from_map(value.as_object().unwrap()).unwrap();
        assert_eq!(shape.name, "General");
        assert_eq!(shape.address, "1 Main St");
    }

    #[test]
    fn test_hospital_from_record() {
        let record = Hospital::new(1, "General", "1 Main St");
        let shape = HospitalShape::from_record(&record).unwrap();
        assert_eq!(shape.id, 1);
        assert_eq!(shape.name, "General");
    }

    #[test]
    fn test_department_missing_name() {
        let value = json!({"id": 1, "hospital_id": 2});
        let err = DepartmentShape::from_map(value.as_object().unwrap()).unwrap_err();
        assert_eq!(err.field(), "name");
    }
}
