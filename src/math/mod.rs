//! Mathematical utilities: the logistic transform.

pub mod logistic;

pub use logistic::*;
