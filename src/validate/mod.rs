//! Input normalization and per-field validation.
//!
//! This module turns the raw form strings into validated model inputs:
//!
//! - **Strict per-field contracts** (fixed, human-readable message set)
//! - **Total validation**: all five fields are checked independently on every
//!   pass, so each slot in `FieldErrors` is always refreshed
//! - **Deterministic behavior** (no hidden state)
//! - **Separation of concerns**: no scoring logic here

use crate::domain::{FieldErrors, FieldId, FieldKind, RawInput, ValidatedInput};

/// Trim and replace a comma decimal separator with a period.
///
/// `"5,5"` and `"5.5"` must parse identically.
pub fn normalize_decimal(value: &str) -> String {
    value.trim().replace(',', ".")
}

/// Shape free text into something that can only be a decimal number:
/// keep digits, map separators to `.`, and let only the first separator
/// survive. Shells apply this per keystroke on numeric fields.
pub fn shape_numeric_input(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut seen_separator = false;
    for ch in value.chars() {
        match ch {
            '0'..='9' => out.push(ch),
            '.' | ',' if !seen_separator => {
                out.push('.');
                seen_separator = true;
            }
            _ => {}
        }
    }
    out
}

/// Parse a numeric field value.
///
/// `None` covers empty input, parse failures, and non-finite parses (Rust's
/// `f64::from_str` accepts `NaN`/`inf`, which are not valid clinical inputs).
fn parse_numeric(value: &str) -> Option<f64> {
    let normalized = normalize_decimal(value);
    if normalized.is_empty() {
        return None;
    }
    match normalized.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => None,
    }
}

/// Parse a binary selection code.
///
/// Only `0` and `1` are valid codes; anything else (including empty input)
/// is treated as "nothing selected".
fn parse_binary(value: &str) -> Option<u8> {
    match value.trim().parse::<i64>() {
        Ok(0) => Some(0),
        Ok(1) => Some(1),
        _ => None,
    }
}

/// Validate one field. `None` means the field passed.
pub fn validate_field(id: FieldId, raw: &str) -> Option<String> {
    match id.spec().kind {
        FieldKind::Numeric { min, max } => validate_numeric(id, raw, min, max),
        FieldKind::Binary => validate_binary(id, raw),
    }
}

fn validate_numeric(id: FieldId, raw: &str, min: f64, max: f64) -> Option<String> {
    let Some(value) = parse_numeric(raw) else {
        return Some(format!(
            "Please enter a numeric value for {}.",
            id.display_name()
        ));
    };
    if value < min || value > max {
        return Some(format!(
            "Please enter a value between {min} and {max} for {}.",
            id.display_name()
        ));
    }
    None
}

fn validate_binary(id: FieldId, raw: &str) -> Option<String> {
    if parse_binary(raw).is_some() {
        return None;
    }
    Some(format!("Please select a value for {}.", id.display_name()))
}

/// Validate all five fields independently and, when every field passes,
/// assemble the validated values.
///
/// The returned `FieldErrors` always has all five slots refreshed; the
/// `ValidatedInput` is `Some` exactly when no slot holds a message.
pub fn validate_all(raw: &RawInput) -> (FieldErrors, Option<ValidatedInput>) {
    let mut errors = FieldErrors::default();
    for id in FieldId::ALL {
        errors.set(id, validate_field(id, raw.get(id)));
    }

    if errors.is_clean() {
        let input = assemble(raw);
        (errors, input)
    } else {
        (errors, None)
    }
}

/// Re-parse every field after a clean validation pass.
///
/// Each `?` is unreachable once `validate_all` found no errors.
fn assemble(raw: &RawInput) -> Option<ValidatedInput> {
    Some(ValidatedInput {
        alpha_gal: parse_numeric(raw.get(FieldId::AlphaGal))?,
        h2fpef: parse_numeric(raw.get(FieldId::H2fpef))?,
        hospitalization: parse_binary(raw.get(FieldId::Hospitalization))?,
        smoking: parse_binary(raw.get(FieldId::Smoking))?,
        e_eprime: parse_numeric(raw.get(FieldId::EEprime))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn comma_and_period_parse_identically() {
        assert_eq!(parse_numeric("5,5"), parse_numeric("5.5"));
        assert_eq!(parse_numeric(" 5,5 "), Some(5.5));
    }

    #[test]
    fn numeric_message_on_empty_and_garbage() {
        for raw in ["", "   ", "abc", "1.2.3", "NaN", "inf"] {
            let err = validate_field(FieldId::H2fpef, raw);
            assert_eq!(
                err.as_deref(),
                Some("Please enter a numeric value for the H2FPEF score."),
                "input {raw:?}"
            );
        }
    }

    #[test]
    fn range_message_outside_bounds() {
        assert_eq!(
            validate_field(FieldId::AlphaGal, "1000.5").as_deref(),
            Some("Please enter a value between 0 and 1000 for alpha-galactosidase A activity.")
        );
        assert_eq!(
            validate_field(FieldId::H2fpef, "-0.1").as_deref(),
            Some("Please enter a value between 0 and 9 for the H2FPEF score.")
        );
        assert_eq!(
            validate_field(FieldId::EEprime, "100.01").as_deref(),
            Some("Please enter a value between 0 and 100 for the E/e' ratio.")
        );
    }

    #[test]
    fn exact_boundaries_accepted() {
        assert_eq!(validate_field(FieldId::AlphaGal, "0"), None);
        assert_eq!(validate_field(FieldId::AlphaGal, "1000"), None);
        assert_eq!(validate_field(FieldId::H2fpef, "9"), None);
        assert_eq!(validate_field(FieldId::EEprime, "100"), None);
    }

    #[test]
    fn select_message_on_missing_or_unknown_code() {
        for raw in ["", "2", "-1", "yes"] {
            let err = validate_field(FieldId::Hospitalization, raw);
            assert_eq!(
                err.as_deref(),
                Some("Please select a value for hospitalization history."),
                "input {raw:?}"
            );
        }
        assert_eq!(validate_field(FieldId::Smoking, "0"), None);
        assert_eq!(validate_field(FieldId::Smoking, "1"), None);
    }

    #[test]
    fn validate_all_is_total() {
        let mut raw = valid_raw();
        raw.alpha_gal = "abc".to_string();
        raw.smoking = String::new();

        let (errors, input) = validate_all(&raw);
        assert!(input.is_none());
        // Both failures reported at once, and passing fields stay clear.
        assert!(errors.get(FieldId::AlphaGal).is_some());
        assert!(errors.get(FieldId::Smoking).is_some());
        assert!(errors.get(FieldId::H2fpef).is_none());
        assert!(errors.get(FieldId::Hospitalization).is_none());
        assert!(errors.get(FieldId::EEprime).is_none());
    }

    #[test]
    fn validate_all_assembles_clean_input() {
        let (errors, input) = validate_all(&valid_raw());
        assert!(errors.is_clean());
        let input = input.expect("all fields valid");
        assert_eq!(input.alpha_gal, 20.0);
        assert_eq!(input.h2fpef, 5.0);
        assert_eq!(input.hospitalization, 1);
        assert_eq!(input.smoking, 0);
        assert_eq!(input.e_eprime, 10.0);
    }

    #[test]
    fn reselecting_empty_retriggers_select_error() {
        // The pipeline is stateless: a previously valid selection that is
        // cleared errs again on the next pass.
        let (errors, _) = validate_all(&valid_raw());
        assert!(errors.is_clean());

        let mut raw = valid_raw();
        raw.hospitalization = String::new();
        let (errors, input) = validate_all(&raw);
        assert!(input.is_none());
        assert_eq!(
            errors.get(FieldId::Hospitalization),
            Some("Please select a value for hospitalization history.")
        );
    }

    #[test]
    fn shape_numeric_input_filters_keystrokes() {
        assert_eq!(shape_numeric_input("12a,5x"), "12.5");
        assert_eq!(shape_numeric_input("1.2.3"), "1.23");
        assert_eq!(shape_numeric_input("--"), "");
        assert_eq!(shape_numeric_input("7"), "7");
    }
}
