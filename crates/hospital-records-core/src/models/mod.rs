//! Canonical entity records for the hospital record system.
//!
//! These are the single source of truth for entity shape. The [`crate::db`]
//! module projects them onto SQLite tables and the [`crate::transfer`] module
//! projects them onto validated external shapes.

mod hospital;
mod patient;
mod pharmacy;
mod physician;
mod room;
mod staff;

pub use hospital::*;
pub use patient::*;
pub use pharmacy::*;
pub use physician::*;
pub use room::*;
pub use staff::*;
