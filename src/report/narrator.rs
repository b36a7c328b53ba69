//! Label → verdict text and guidance key.

use serde::Serialize;

use crate::domain::{DiseaseId, Label, Outcome};

/// Short verdict plus the key of the long-form guidance (positive results only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Narration {
    pub verdict: &'static str,
    pub narration_key: Option<&'static str>,
}

pub fn narration_key(disease: DiseaseId) -> &'static str {
    match disease {
        DiseaseId::Diabetes => "diabetes.untreated-risks",
        DiseaseId::HeartDisease => "heart-disease.untreated-risks",
    }
}

/// Attach the narration key a label calls for.
pub fn outcome_for(disease: DiseaseId, label: Label) -> Outcome {
    let narration_key = match label {
        Label::Positive => Some(narration_key(disease)),
        Label::Negative => None,
    };
    Outcome {
        disease,
        label,
        narration_key,
    }
}

pub fn narrate(outcome: &Outcome) -> Narration {
    let verdict = match (outcome.disease, outcome.label) {
        (DiseaseId::Diabetes, Label::Positive) => "The person is diabetic",
        (DiseaseId::Diabetes, Label::Negative) => "The person is not diabetic",
        (DiseaseId::HeartDisease, Label::Positive) => "The person has heart disease",
        (DiseaseId::HeartDisease, Label::Negative) => "The person does not have heart disease",
    };
    Narration {
        verdict,
        narration_key: outcome.narration_key,
    }
}
