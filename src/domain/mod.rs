//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the disease selector (`DiseaseId`)
//! - field ranges (`Bounds`, `FieldSpec`)
//! - per-submission values (`RawInput`, `CoercedInput`, `ValidationResult`, `Outcome`)

pub mod types;

pub use types::*;
