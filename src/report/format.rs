//! Formatted terminal output: percentages, the result sentence, error lists,
//! and the `cvr calc` summary.
//!
//! We keep formatting code in one place so:
//! - the validation/scoring code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::domain::{FieldErrors, FieldId, RiskAssessment, ValidatedInput};

/// Render a probability as a percentage with exactly two decimals.
pub fn format_percent(probability: f64) -> String {
    format!("{:.2}%", probability * 100.0)
}

/// The full result sentence shown after a successful calculation.
pub fn format_result(assessment: &RiskAssessment) -> String {
    format!(
        "Probability of cardiovascular hospitalization within the next 12 months: {}",
        format_percent(assessment.probability)
    )
}

/// One line per failing field, in form order, under a short header.
pub fn format_errors(errors: &FieldErrors) -> String {
    let mut out = String::new();
    out.push_str("Input errors:\n");
    for (_, message) in errors.iter() {
        out.push_str(&format!("- {message}\n"));
    }
    out
}

/// Format the full calc summary (inputs echoed + assessment).
pub fn format_run_summary(inputs: &ValidatedInput, assessment: &RiskAssessment) -> String {
    let mut out = String::new();

    out.push_str("=== cvr - Cardiovascular Hospitalization Risk ===\n");
    out.push_str(&format!(
        "{:<22} {}\n",
        concat_label(FieldId::AlphaGal),
        inputs.alpha_gal
    ));
    out.push_str(&format!(
        "{:<22} {}\n",
        concat_label(FieldId::H2fpef),
        inputs.h2fpef
    ));
    out.push_str(&format!(
        "{:<22} {}\n",
        concat_label(FieldId::Hospitalization),
        yes_no(inputs.hospitalization)
    ));
    out.push_str(&format!(
        "{:<22} {}\n",
        concat_label(FieldId::Smoking),
        yes_no(inputs.smoking)
    ));
    out.push_str(&format!(
        "{:<22} {}\n",
        concat_label(FieldId::EEprime),
        inputs.e_eprime
    ));

    out.push('\n');
    out.push_str(&format!(
        "Linear predictor: z = {:.3}\n",
        assessment.linear_predictor
    ));
    out.push_str(&format_result(assessment));
    out.push('\n');

    out
}

fn concat_label(id: FieldId) -> String {
    format!("{}:", id.label())
}

fn yes_no(code: u8) -> &'static str {
    if code == 1 { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_has_two_decimals() {
        assert_eq!(format_percent(0.5), "50.00%");
        assert_eq!(format_percent(0.0024), "0.24%");
        assert_eq!(format_percent(0.287), "28.70%");
    }

    #[test]
    fn result_sentence() {
        let assessment = RiskAssessment {
            linear_predictor: 0.0,
            probability: 0.5,
        };
        assert_eq!(
            format_result(&assessment),
            "Probability of cardiovascular hospitalization within the next 12 months: 50.00%"
        );
    }

    #[test]
    fn errors_listed_in_form_order() {
        let mut errors = FieldErrors::default();
        errors.set(FieldId::EEprime, Some("e message".to_string()));
        errors.set(FieldId::AlphaGal, Some("a message".to_string()));

        let text = format_errors(&errors);
        let a = text.find("a message").expect("alpha-gal message present");
        let e = text.find("e message").expect("e/e' message present");
        assert!(a < e);
        assert!(text.starts_with("Input errors:\n"));
    }

    #[test]
    fn run_summary_echoes_inputs_and_result() {
        let inputs = ValidatedInput {
            alpha_gal: 20.0,
            h2fpef: 5.0,
            hospitalization: 1,
            smoking: 0,
            e_eprime: 10.0,
        };
        let assessment = RiskAssessment {
            linear_predictor: -0.91,
            probability: 0.28700,
        };

        let summary = format_run_summary(&inputs, &assessment);
        assert!(summary.contains("Alpha-Gal A activity"));
        assert!(summary.contains("Prior hospitalization"));
        assert!(summary.contains("yes"));
        assert!(summary.contains("z = -0.910"));
        assert!(summary.contains("28.70%"));
    }
}
