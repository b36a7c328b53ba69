//! Shared domain types.
//!
//! Two lifetimes live here:
//!
//! - startup configuration (`DiseaseId`, `FieldSpec`, `Bounds`) which is built once
//!   and only ever read afterwards
//! - per-submission values (`RawInput`, `CoercedInput`, `ValidationResult`, `Outcome`)
//!   which belong to exactly one pipeline run

use std::collections::HashMap;
use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which screening profile to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DiseaseId {
    Diabetes,
    HeartDisease,
}

impl DiseaseId {
    pub const ALL: [DiseaseId; 2] = [DiseaseId::Diabetes, DiseaseId::HeartDisease];

    /// Profile identifier used in reports and logs.
    pub fn display_name(self) -> &'static str {
        match self {
            DiseaseId::Diabetes => "Diabetes",
            DiseaseId::HeartDisease => "HeartDisease",
        }
    }

    /// File name of the classifier artifact inside the models directory.
    pub fn model_file(self) -> &'static str {
        match self {
            DiseaseId::Diabetes => "diabetes.json",
            DiseaseId::HeartDisease => "heart.json",
        }
    }
}

impl fmt::Display for DiseaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Inclusive numeric range `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Bounds that accept every finite value.
    pub const UNBOUNDED: Bounds = Bounds {
        min: f64::NEG_INFINITY,
        max: f64::INFINITY,
    };

    /// Both ends are inclusive.
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// A named input field together with its acceptable range.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: String,
    pub min: f64,
    pub max: f64,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, bounds: Bounds) -> Self {
        Self {
            name: name.into(),
            min: bounds.min,
            max: bounds.max,
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.min, self.max)
    }
}

/// Untouched user-supplied tokens, keyed by field name.
#[derive(Debug, Clone, Default)]
pub struct RawInput {
    values: HashMap<String, String>,
}

impl RawInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, raw: impl Into<String>) {
        self.values.insert(field.into(), raw.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawInput {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut raw = RawInput::new();
        for (k, v) in iter {
            raw.insert(k, v);
        }
        raw
    }
}

/// Parsed numeric values in profile field order.
///
/// Only constructed once every token of a profile parsed successfully.
#[derive(Debug, Clone, PartialEq)]
pub struct CoercedInput {
    values: Vec<(String, f64)>,
}

impl CoercedInput {
    pub(crate) fn from_ordered(values: Vec<(String, f64)>) -> Self {
        Self { values }
    }

    pub fn get(&self, field: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(name, v)| (name.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A coerced value that fell outside its declared range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid input for {}: {}. Must be between {} and {}.",
            self.field, self.value, self.min, self.max
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    Valid(CoercedInput),
    /// Every violating field, in profile order.
    Invalid(Vec<FieldViolation>),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }
}

/// Binary classifier verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Positive,
    Negative,
}

impl Label {
    /// Raw classifier output (`1` positive, `0` negative).
    pub fn from_raw(raw: u8) -> Option<Label> {
        match raw {
            1 => Some(Label::Positive),
            0 => Some(Label::Negative),
            _ => None,
        }
    }

    pub fn as_raw(self) -> u8 {
        match self {
            Label::Positive => 1,
            Label::Negative => 0,
        }
    }
}

/// Terminal artifact of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub disease: DiseaseId,
    pub label: Label,
    /// Key of the long-form guidance shown for positive results.
    pub narration_key: Option<&'static str>,
}
