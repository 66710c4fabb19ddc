//! Shared staff attributes plus manager and nurse transfer shapes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::validate::{require_attr, require_i64, require_text, FieldType, ValidationError};
use crate::models::Employee;

/// The employee field block shared by staff-like transfer shapes
/// (physician, manager).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StaffAttrs {
    pub first_name: String,
    pub last_name: String,
    pub ssn: String,
    pub position: String,
    pub hospital_id: i64,
    pub department_id: i64,
}

impl StaffAttrs {
    /// Parse the staff field block out of a raw JSON mapping.
    pub fn from_map(map: &Map<String, Value>) -> Result<Self, ValidationError> {
        Ok(Self {
            first_name: require_text(map, "first_name")?,
            last_name: require_text(map, "last_name")?,
            ssn: require_text(map, "ssn")?,
            position: require_text(map, "position")?,
            hospital_id: require_i64(map, "hospital_id")?,
            department_id: require_i64(map, "department_id")?,
        })
    }

    /// Extract the staff field block from an employee record. Fields that are
    /// nullable in storage but required here surface as `Missing`.
    pub fn from_employee(employee: &Employee) -> Result<Self, ValidationError> {
        Ok(Self {
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            ssn: employee.ssn.clone(),
            position: require_attr(employee.position.clone(), "position", FieldType::Text)?,
            hospital_id: require_attr(employee.hospital_id, "hospital_id", FieldType::Integer)?,
            department_id: require_attr(
                employee.department_id,
                "department_id",
                FieldType::Integer,
            )?,
        })
    }
}

/// External representation of a manager.
///
/// Built from raw mappings only; no record adapter is provided.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ManagerShape {
    pub id: i64,
    #[serde(flatten)]
    pub staff: StaffAttrs,
}

impl ManagerShape {
    /// Build from a raw JSON mapping.
    pub fn from_map(map: &Map<String, Value>) -> Result<Self, ValidationError> {
        Ok(Self {
            id: require_i64(map, "id")?,
            staff: StaffAttrs::from_map(map)?,
        })
    }
}

/// External representation of a nurse.
///
/// Built from raw mappings only; no record adapter is provided.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NurseShape {
    pub id: i64,
    pub qualification: String,
}

impl NurseShape {
    /// Build from a raw JSON mapping.
    pub fn from_map(map: &Map<String, Value>) -> Result<Self, ValidationError> {
        Ok(Self {
            id: require_i64(map, "id")?,
            qualification: require_text(map, "qualification")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn staff_map() -> Value {
        json!({
            "id": 1,
            "first_name": "Ada",
            "last_name": "Lovelace",
            "ssn": "000-00-0001",
            "position": "Manager",
            "hospital_id": 2,
            "department_id": 3
        })
    }

    #[test]
    fn test_manager_from_map_flattens_staff_block() {
        let value = staff_map();
        let shape = ManagerShape::from_map(value.as_object().unwrap()).unwrap();
        assert_eq!(shape.id, 1);
        assert_eq!(shape.staff.first_name, "Ada");
        assert_eq!(shape.staff.department_id, 3);
    }

    #[test]
    fn test_manager_serializes_flat() {
        let value = staff_map();
        let shape = ManagerShape::from_map(value.as_object().unwrap()).unwrap();
        let json = serde_json::to_value(&shape).unwrap();
        assert_eq!(json["first_name"], "Ada");
        assert!(json.get("staff").is_none());
    }

    #[test]
    fn test_staff_from_employee_requires_position() {
        let mut employee = Employee::new(1, "Ada", "Lovelace", "000-00-0001");
        employee.hospital_id = Some(2);
        employee.department_id = Some(3);

        let err = StaffAttrs::from_employee(&employee).unwrap_err();
        assert_eq!(err.field(), "position");

        employee.position = Some("Manager".into());
        let attrs = StaffAttrs::from_employee(&employee).unwrap();
        assert_eq!(attrs.position, "Manager");
    }

    #[test]
    fn test_nurse_missing_qualification() {
        let value = json!({"id": 1});
        let err = NurseShape::from_map(value.as_object().unwrap()).unwrap_err();
        assert_eq!(err.field(), "qualification");
    }
}
