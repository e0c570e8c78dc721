//! Hospitalization risk model.
//!
//! The model is a small, pure function so the shells and the pipeline can
//! stay presentation-only.

pub mod model;

pub use model::*;
