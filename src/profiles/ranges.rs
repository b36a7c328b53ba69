//! Per-profile acceptable ranges.
//!
//! Each disease owns its own table. The heart profile's `age` (25–90) and the
//! diabetes profile's `Age` (0–200) must never be looked up in each other's table,
//! so there is no flat, process-wide namespace.

use crate::domain::{Bounds, DiseaseId, FieldSpec};
use crate::error::ContractViolation;

/// Static row: `(field, prompt, min, max)`.
pub(crate) type FieldRow = (&'static str, &'static str, f64, f64);

/// Diabetes fields, in the order the classifier was trained on.
pub(crate) static DIABETES: [FieldRow; 8] = [
    ("Pregnancies", "Number of Pregnancies (enter 0 if male)", 0.0, 20.0),
    ("Glucose", "Glucose Level", 50.0, 250.0),
    ("BloodPressure", "Blood Pressure value", 40.0, 180.0),
    ("SkinThickness", "Skin Thickness value", 7.0, 99.0),
    ("Insulin", "Insulin Level", 10.0, 846.0),
    ("BMI", "BMI value", 10.0, 67.0),
    ("DiabetesPedigreeFunction", "Diabetes Pedigree Function value", 0.0, 3.0),
    ("Age", "Age of the Person", 0.0, 200.0),
];

/// Heart disease fields, in the order the classifier was trained on.
pub(crate) static HEART_DISEASE: [FieldRow; 13] = [
    ("age", "Age", 25.0, 90.0),
    ("sex", "Sex", 0.0, 1.0),
    ("cp", "Chest Pain types", 0.0, 3.0),
    ("trestbps", "Resting Blood Pressure", 80.0, 200.0),
    ("chol", "Serum Cholestoral in mg/dl", 100.0, 600.0),
    ("fbs", "Fasting Blood Sugar > 120 mg/dl", 0.0, 1.0),
    ("restecg", "Resting Electrocardiographic results", 0.0, 2.0),
    ("thalach", "Maximum Heart Rate achieved", 60.0, 220.0),
    ("exang", "Exercise Induced Angina", 0.0, 1.0),
    ("oldpeak", "ST depression induced by exercise", 0.0, 6.2),
    ("slope", "Slope of the peak exercise ST segment", 0.0, 2.0),
    ("ca", "Major vessels colored by flourosopy", 0.0, 3.0),
    ("thal", "Thal (0=normal; 1=fixed; 2=reversible)", 0.0, 2.0),
];

pub(crate) fn rows_for(disease: DiseaseId) -> &'static [FieldRow] {
    match disease {
        DiseaseId::Diabetes => &DIABETES,
        DiseaseId::HeartDisease => &HEART_DISEASE,
    }
}

/// Mapping from field name to inclusive bounds.
///
/// Fields absent from the table are unbounded: validation for them always passes.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeTable {
    entries: Vec<(String, Bounds)>,
}

impl RangeTable {
    /// Build a table, rejecting inverted/non-numeric bounds and duplicate names.
    pub fn new<S: Into<String>>(entries: impl IntoIterator<Item = (S, Bounds)>) -> Result<Self, ContractViolation> {
        let mut out: Vec<(String, Bounds)> = Vec::new();
        for (name, bounds) in entries {
            let name = name.into();
            if bounds.min.is_nan() || bounds.max.is_nan() || bounds.min > bounds.max {
                return Err(ContractViolation(format!(
                    "bounds for `{name}` must satisfy min <= max (got {} > {})",
                    bounds.min, bounds.max
                )));
            }
            if out.iter().any(|(existing, _)| *existing == name) {
                return Err(ContractViolation(format!("duplicate range entry for `{name}`")));
            }
            out.push((name, bounds));
        }
        Ok(Self { entries: out })
    }

    /// The fixed table for a built-in profile.
    pub fn for_disease(disease: DiseaseId) -> Self {
        let entries = rows_for(disease)
            .iter()
            .map(|&(name, _, min, max)| (name.to_string(), Bounds::new(min, max)))
            .collect();
        Self { entries }
    }

    pub fn bounds_for(&self, field: &str) -> Option<Bounds> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, b)| *b)
    }

    /// Resolve a field into a `FieldSpec`, unbounded when the table has no entry.
    pub fn field_spec(&self, field: &str) -> FieldSpec {
        FieldSpec::new(field, self.bounds_for(field).unwrap_or(Bounds::UNBOUNDED))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
