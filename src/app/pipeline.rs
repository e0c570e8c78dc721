//! Shared "validate and compute" pipeline used by both CLI and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! raw form values -> per-field validation -> scoring
//!
//! The CLI and the TUI can then focus on presentation (printing vs widgets).
//! The pipeline itself holds no state: "clear" is purely a shell operation.

use crate::domain::{FieldErrors, RawInput, RiskAssessment, ValidatedInput};
use crate::models;
use crate::validate;

/// All computed outputs of a single evaluation.
///
/// `inputs` and `assessment` are both `Some` exactly when `errors` is clean.
#[derive(Debug, Clone, Default)]
pub struct RunOutput {
    pub errors: FieldErrors,
    pub inputs: Option<ValidatedInput>,
    pub assessment: Option<RiskAssessment>,
}

/// Validate the raw form values and, when every field passes, score them.
///
/// Validation is total: every field's slot in `errors` is refreshed on every
/// call, so shells can clear stale messages by redisplaying all five slots.
pub fn evaluate(raw: &RawInput) -> RunOutput {
    let (errors, inputs) = validate::validate_all(raw);
    let assessment = inputs.as_ref().map(models::assess);
    RunOutput {
        errors,
        inputs,
        assessment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::format_percent;

    fn valid_raw() -> RawInput {
        RawInput {
            alpha_gal: "20".to_string(),
            h2fpef: "5".to_string(),
            hospitalization: "1".to_string(),
            smoking: "0".to_string(),
            e_eprime: "10".to_string(),
        }
    }

    #[test]
    fn evaluate_withholds_result_on_any_error() {
        let mut raw = valid_raw();
        raw.e_eprime = "oops".to_string();

        let run = evaluate(&raw);
        assert!(run.inputs.is_none());
        assert!(run.assessment.is_none());
        assert!(!run.errors.is_clean());
    }

    #[test]
    fn evaluate_scores_clean_input() {
        let run = evaluate(&valid_raw());
        assert!(run.errors.is_clean());

        let assessment = run.assessment.expect("clean input must score");
        assert!((assessment.linear_predictor - -0.91).abs() < 1e-12);
        assert_eq!(format_percent(assessment.probability), "28.70%");
    }

    #[test]
    fn evaluate_accepts_comma_decimals() {
        let mut raw = valid_raw();
        raw.h2fpef = "5,0".to_string();

        let with_comma = evaluate(&raw);
        let with_period = evaluate(&valid_raw());
        assert_eq!(
            with_comma.assessment.map(|a| a.probability),
            with_period.assessment.map(|a| a.probability)
        );
    }

    #[test]
    fn evaluate_all_minimum_inputs() {
        let raw = RawInput {
            alpha_gal: "0".to_string(),
            h2fpef: "0".to_string(),
            hospitalization: "0".to_string(),
            smoking: "0".to_string(),
            e_eprime: "0".to_string(),
        };

        let run = evaluate(&raw);
        let assessment = run.assessment.expect("minimum inputs are valid");
        assert_eq!(assessment.linear_predictor, -6.032);
        assert_eq!(format_percent(assessment.probability), "0.24%");
    }
}
