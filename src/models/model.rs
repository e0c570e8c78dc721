//! Model evaluation for the 12-month cardiovascular hospitalization risk.
//!
//! The scorer relies on two primitive operations:
//! - evaluate the linear predictor `z` from validated inputs
//! - map `z` to a probability through the logistic transform
//!
//! The coefficients are fixed constants of the published model, not
//! configuration.

use crate::domain::{RiskAssessment, ValidatedInput};
use crate::math::logistic;

/// Model intercept.
const INTERCEPT: f64 = -6.032;
/// Per-unit weight of alpha-galactosidase A activity.
const W_ALPHA_GAL: f64 = -0.020;
/// Per-point weight of the H2FPEF score.
const W_H2FPEF: f64 = 0.385;
/// Weight of a prior cardiovascular hospitalization.
const W_HOSPITALIZATION: f64 = 1.817;
/// Weight of active smoking.
const W_SMOKING: f64 = 2.489;
/// Per-unit weight of the E/e' ratio.
const W_E_EPRIME: f64 = 0.178;

/// Evaluate the linear predictor `z`.
pub fn linear_predictor(input: &ValidatedInput) -> f64 {
    INTERCEPT
        + W_ALPHA_GAL * input.alpha_gal
        + W_H2FPEF * input.h2fpef
        + W_HOSPITALIZATION * f64::from(input.hospitalization)
        + W_SMOKING * f64::from(input.smoking)
        + W_E_EPRIME * input.e_eprime
}

/// Evaluate the full model: linear predictor plus probability.
pub fn assess(input: &ValidatedInput) -> RiskAssessment {
    let z = linear_predictor(input);
    RiskAssessment {
        linear_predictor: z,
        probability: logistic(z),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worked_example() {
        let input = ValidatedInput {
            alpha_gal: 20.0,
            h2fpef: 5.0,
            hospitalization: 1,
            smoking: 0,
            e_eprime: 10.0,
        };
        let out = assess(&input);
        assert!(
            (out.linear_predictor - -0.91).abs() < 1e-12,
            "z = {}",
            out.linear_predictor
        );
        assert!(
            (out.probability - 0.28700).abs() < 1e-4,
            "p = {}",
            out.probability
        );
    }

    #[test]
    fn all_minimum_inputs_hit_intercept() {
        let input = ValidatedInput {
            alpha_gal: 0.0,
            h2fpef: 0.0,
            hospitalization: 0,
            smoking: 0,
            e_eprime: 0.0,
        };
        let out = assess(&input);
        assert_eq!(out.linear_predictor, INTERCEPT);
        assert!((out.probability - 0.0024).abs() < 1e-4, "p = {}", out.probability);
    }

    #[test]
    fn risk_factors_increase_probability() {
        let base = ValidatedInput {
            alpha_gal: 100.0,
            h2fpef: 3.0,
            hospitalization: 0,
            smoking: 0,
            e_eprime: 8.0,
        };
        let p0 = assess(&base).probability;

        let smoker = ValidatedInput { smoking: 1, ..base };
        assert!(assess(&smoker).probability > p0);

        let hospitalized = ValidatedInput {
            hospitalization: 1,
            ..base
        };
        assert!(assess(&hospitalized).probability > p0);

        // Higher enzyme activity is protective (negative weight).
        let higher_enzyme = ValidatedInput {
            alpha_gal: 500.0,
            ..base
        };
        assert!(assess(&higher_enzyme).probability < p0);
    }
}
