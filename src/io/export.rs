//! Write assessment JSON files.
//!
//! Assessment JSON is the portable representation of one calculation:
//! - the validated inputs
//! - the linear predictor and probability
//! - the probability as the shells render it (two-decimal percentage)
//!
//! The schema is defined by `domain::AssessmentFile`.

use std::fs::File;
use std::path::Path;

use chrono::Local;

use crate::domain::{AssessmentFile, RiskAssessment, ValidatedInput};
use crate::error::AppError;
use crate::report::format_percent;

/// Write an assessment JSON file.
pub fn write_assessment_json(
    path: &Path,
    inputs: &ValidatedInput,
    assessment: &RiskAssessment,
) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::usage(format!(
            "Failed to create assessment JSON '{}': {e}",
            path.display()
        ))
    })?;

    let doc = assessment_file(inputs, assessment, Local::now().to_rfc3339());
    serde_json::to_writer_pretty(file, &doc)
        .map_err(|e| AppError::usage(format!("Failed to write assessment JSON: {e}")))?;

    Ok(())
}

/// Build the export document.
///
/// Split from the writer so the schema can be tested without touching the
/// filesystem; the caller supplies the timestamp.
pub fn assessment_file(
    inputs: &ValidatedInput,
    assessment: &RiskAssessment,
    generated: String,
) -> AssessmentFile {
    AssessmentFile {
        tool: "cvr".to_string(),
        generated,
        inputs: *inputs,
        assessment: *assessment,
        probability_pct: format_percent(assessment.probability),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assessment_file_roundtrips_through_json() {
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

        let doc = assessment_file(&inputs, &assessment, "2025-06-01T12:00:00+00:00".to_string());
        let json = serde_json::to_string(&doc).expect("serialize");
        let back: AssessmentFile = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(back.tool, "cvr");
        assert_eq!(back.inputs, inputs);
        assert_eq!(back.assessment, assessment);
        assert_eq!(back.probability_pct, "28.70%");
    }
}
