//! Shared prediction pipeline used by every front-end command.
//!
//! Keeping this in one place avoids a copy of the workflow per disease:
//! coerce all fields -> validate all fields -> predict -> narrate
//!
//! Each stage runs to completion before the next starts, and a run that fails a
//! stage never reaches the model. Nothing is clamped or defaulted.

use rayon::prelude::*;

use crate::domain::{Outcome, RawInput, ValidationResult};
use crate::error::PipelineError;
use crate::profiles::DiseaseProfile;
use crate::report::narrator::outcome_for;
use crate::validate::{coerce_all, validate};

/// Run one submission through `profile`.
pub fn run_prediction(profile: &DiseaseProfile, raw: &RawInput) -> Result<Outcome, PipelineError> {
    let disease = profile.id();

    // 1) Coerce every field; the first unparseable token aborts the run.
    let coerced = coerce_all(raw, profile.fields()).inspect_err(|e| {
        tracing::info!(disease = %disease, field = %e.field, "rejected: unparseable value");
    })?;

    // 2) Validate the full set and collect every violation.
    let coerced = match validate(coerced, profile.fields())? {
        ValidationResult::Valid(coerced) => coerced,
        ValidationResult::Invalid(violations) => {
            let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
            tracing::info!(disease = %disease, fields = ?fields, "rejected: out of range");
            return Err(PipelineError::OutOfRange { violations });
        }
    };

    // 3) Build the ordered feature vector and classify.
    let features: Vec<f64> = coerced.iter().map(|(_, v)| v).collect();
    let label = profile
        .model()
        .predict(profile.fields(), &features)
        .inspect_err(|e| tracing::error!(disease = %disease, "{e}"))?;
    tracing::debug!(disease = %disease, ?label, "prediction complete");

    // 4) Narrate.
    Ok(outcome_for(disease, label))
}

/// Result of one batch row.
#[derive(Debug, Clone)]
pub struct BatchRow {
    /// 1-based line number in the source file.
    pub line: usize,
    pub result: Result<Outcome, PipelineError>,
}

/// Evaluate independent submissions in parallel; output keeps input order.
///
/// Rows only share the read-only profile. Every row owns its own input and result.
pub fn run_batch(profile: &DiseaseProfile, rows: Vec<(usize, RawInput)>) -> Vec<BatchRow> {
    rows.into_par_iter()
        .map(|(line, raw)| BatchRow {
            line,
            result: run_prediction(profile, &raw),
        })
        .collect()
}
