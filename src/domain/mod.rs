//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the five model fields and their specs (`FieldId`, `FieldKind`, `FieldSpec`)
//! - raw and validated form values (`RawInput`, `ValidatedInput`)
//! - validation outcomes (`FieldErrors`)
//! - scoring outputs (`RiskAssessment`, `AssessmentFile`)

pub mod types;

pub use types::*;
