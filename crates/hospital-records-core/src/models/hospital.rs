//! Hospital and department records.

use serde::{Deserialize, Serialize};

/// A hospital facility.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hospital {
    /// Unique identifier
    pub id: i64,
    /// Facility name
    pub name: String,
    /// Street address
    pub address: String,
}

impl Hospital {
    /// Create a hospital record with all required fields.
    pub fn new(id: i64, name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
        }
    }
}

/// A department within a hospital.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Department {
    /// Unique identifier
    pub id: i64,
    /// Department name
    pub name: String,
    /// Owning hospital, if assigned
    pub hospital_id: Option<i64>,
}

impl Department {
    /// Create a department record not yet assigned to a hospital.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hospital_id: None,
        }
    }
}
