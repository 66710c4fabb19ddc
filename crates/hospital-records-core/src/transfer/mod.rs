//! Transfer projection: validated external shapes.
//!
//! Every shape is constructed through [`from_map`](HospitalShape::from_map)
//! from a raw JSON mapping. A marked subset (hospital, medication, patient,
//! prescription, physician) additionally offers an explicit `from_record`
//! adapter that builds the shape straight from storage records; all other
//! shapes must be assembled into a mapping by the caller first.
//!
//! Construction either succeeds completely or fails with a
//! [`ValidationError`] naming the offending field and its expected type.

mod hospital;
mod patient;
mod pharmacy;
mod physician;
mod room;
mod staff;
mod validate;

pub use hospital::*;
pub use patient::*;
pub use pharmacy::*;
pub use physician::*;
pub use room::*;
pub use staff::*;
pub use validate::{FieldType, ValidationError};
