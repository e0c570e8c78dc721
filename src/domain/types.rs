//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during validation and scoring
//! - exported to JSON
//! - reloaded later for comparisons across calculations

use serde::{Deserialize, Serialize};

/// The five inputs of the hospitalization risk model.
///
/// Order matters: it is the on-screen form order, and `RawInput`/`FieldErrors`
/// index their slots by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    /// Alpha-galactosidase A enzyme activity.
    AlphaGal,
    /// H2FPEF score (heart failure with preserved ejection fraction).
    H2fpef,
    /// Prior cardiovascular hospitalization (binary).
    Hospitalization,
    /// Active smoking (binary).
    Smoking,
    /// E/e' ratio (left ventricular filling pressure estimate).
    EEprime,
}

impl FieldId {
    /// All fields, in form order.
    pub const ALL: [FieldId; 5] = [
        FieldId::AlphaGal,
        FieldId::H2fpef,
        FieldId::Hospitalization,
        FieldId::Smoking,
        FieldId::EEprime,
    ];

    /// Name used inside validation messages ("Please enter ... for {name}.").
    pub fn display_name(self) -> &'static str {
        match self {
            FieldId::AlphaGal => "alpha-galactosidase A activity",
            FieldId::H2fpef => "the H2FPEF score",
            FieldId::Hospitalization => "hospitalization history",
            FieldId::Smoking => "smoking status",
            FieldId::EEprime => "the E/e' ratio",
        }
    }

    /// Short label for form rows and report lines.
    pub fn label(self) -> &'static str {
        match self {
            FieldId::AlphaGal => "Alpha-Gal A activity",
            FieldId::H2fpef => "H2FPEF score",
            FieldId::Hospitalization => "Prior hospitalization",
            FieldId::Smoking => "Active smoking",
            FieldId::EEprime => "E/e' ratio",
        }
    }

    /// Validation spec for this field.
    pub fn spec(self) -> FieldSpec {
        let kind = match self {
            FieldId::AlphaGal => FieldKind::Numeric {
                min: 0.0,
                max: 1000.0,
            },
            FieldId::H2fpef => FieldKind::Numeric { min: 0.0, max: 9.0 },
            FieldId::Hospitalization => FieldKind::Binary,
            FieldId::Smoking => FieldKind::Binary,
            FieldId::EEprime => FieldKind::Numeric {
                min: 0.0,
                max: 100.0,
            },
        };
        FieldSpec { id: self, kind }
    }

    fn index(self) -> usize {
        match self {
            FieldId::AlphaGal => 0,
            FieldId::H2fpef => 1,
            FieldId::Hospitalization => 2,
            FieldId::Smoking => 3,
            FieldId::EEprime => 4,
        }
    }
}

/// How a field is entered and validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// Free-entry decimal with inclusive bounds.
    Numeric { min: f64, max: f64 },
    /// Binary selection coded 0/1; only presence is validated.
    Binary,
}

/// Validation spec for a single field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub id: FieldId,
    pub kind: FieldKind,
}

impl FieldSpec {
    /// Range hint for numeric fields (e.g. `0-1000`), `None` for binary ones.
    pub fn range_label(&self) -> Option<String> {
        match self.kind {
            FieldKind::Numeric { min, max } => Some(format!("{min}-{max}")),
            FieldKind::Binary => None,
        }
    }
}

/// Raw form values as supplied by a shell (TUI form or CLI flags).
///
/// Numeric fields hold free text (possibly using a comma decimal separator);
/// binary fields hold `""` (unset), `"0"`, or `"1"`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawInput {
    pub alpha_gal: String,
    pub h2fpef: String,
    pub hospitalization: String,
    pub smoking: String,
    pub e_eprime: String,
}

impl RawInput {
    pub fn get(&self, id: FieldId) -> &str {
        match id {
            FieldId::AlphaGal => &self.alpha_gal,
            FieldId::H2fpef => &self.h2fpef,
            FieldId::Hospitalization => &self.hospitalization,
            FieldId::Smoking => &self.smoking,
            FieldId::EEprime => &self.e_eprime,
        }
    }

    pub fn get_mut(&mut self, id: FieldId) -> &mut String {
        match id {
            FieldId::AlphaGal => &mut self.alpha_gal,
            FieldId::H2fpef => &mut self.h2fpef,
            FieldId::Hospitalization => &mut self.hospitalization,
            FieldId::Smoking => &mut self.smoking,
            FieldId::EEprime => &mut self.e_eprime,
        }
    }

    /// True when every field is empty after trimming.
    pub fn is_all_empty(&self) -> bool {
        FieldId::ALL.iter().all(|&id| self.get(id).trim().is_empty())
    }

    /// Reset all fields to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Per-field validation outcome.
///
/// A validation pass always fills every slot (`Some(message)` for a failing
/// field, `None` for a clean one), so shells can redisplay all five slots and
/// thereby clear stale messages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    slots: [Option<String>; 5],
}

impl FieldErrors {
    pub fn set(&mut self, id: FieldId, error: Option<String>) {
        self.slots[id.index()] = error;
    }

    pub fn get(&self, id: FieldId) -> Option<&str> {
        self.slots[id.index()].as_deref()
    }

    /// Drop the message for one field (shells call this on edit).
    pub fn clear(&mut self, id: FieldId) {
        self.slots[id.index()] = None;
    }

    /// True when no field has an error.
    pub fn is_clean(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Failing fields only, in form order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str)> {
        FieldId::ALL
            .into_iter()
            .filter_map(|id| self.get(id).map(|msg| (id, msg)))
    }
}

/// Validated field values. Constructed only when every field passed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidatedInput {
    /// Alpha-galactosidase A activity, in [0, 1000].
    pub alpha_gal: f64,
    /// H2FPEF score, in [0, 9].
    pub h2fpef: f64,
    /// 1 = hospitalized for a cardiovascular cause, 0 = not.
    pub hospitalization: u8,
    /// 1 = active smoker, 0 = not.
    pub smoking: u8,
    /// E/e' ratio, in [0, 100].
    pub e_eprime: f64,
}

/// Scored output of the model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Linear predictor `z`.
    pub linear_predictor: f64,
    /// `logistic(z)`, strictly inside (0, 1).
    pub probability: f64,
}

/// A saved assessment file (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentFile {
    pub tool: String,
    /// RFC 3339 generation timestamp.
    pub generated: String,
    pub inputs: ValidatedInput,
    pub assessment: RiskAssessment,
    /// Probability formatted the way the shells render it (`"28.70%"`).
    pub probability_pct: String,
}
