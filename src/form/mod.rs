//! Form Module
//!
//! Form state management with field-level validation, plus a set of
//! reusable field validators.

mod controller;
pub mod validators;

pub use controller::{FieldErrors, FieldValues, FormController};
