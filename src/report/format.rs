//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the pipeline stays free of presentation concerns
//! - output changes are localized

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::app::pipeline::BatchRow;
use crate::domain::{DiseaseId, Label, Outcome};
use crate::error::PipelineError;
use crate::profiles::{DiseaseProfile, prompt_for};
use crate::report::guidance::{self, Guidance};
use crate::report::narrator::narrate;

/// Machine-readable record of one outcome (`--json`).
#[derive(Debug, Clone, Serialize)]
pub struct OutcomeReport {
    pub disease: DiseaseId,
    pub label: Label,
    pub verdict: &'static str,
    pub narration_key: Option<&'static str>,
    pub evaluated_at: DateTime<Utc>,
}

impl OutcomeReport {
    pub fn new(outcome: &Outcome, evaluated_at: DateTime<Utc>) -> Self {
        let narration = narrate(outcome);
        Self {
            disease: outcome.disease,
            label: outcome.label,
            verdict: narration.verdict,
            narration_key: narration.narration_key,
            evaluated_at,
        }
    }
}

/// Verdict line, plus the short risk list for positive results.
///
/// With `explain`, the long-form guidance for the narration key follows.
pub fn format_outcome(outcome: &Outcome, explain: bool) -> String {
    let narration = narrate(outcome);
    let mut out = String::new();
    out.push_str(&format!("{}\n", narration.verdict));

    let Some(guidance) = narration.narration_key.and_then(guidance::lookup) else {
        return out;
    };

    out.push_str(&format!("\n{}\n", guidance.warning));
    for risk in guidance.risks {
        out.push_str(&format!("- {risk}\n"));
    }
    if explain {
        out.push('\n');
        out.push_str(&format_guidance(guidance));
    }
    out
}

fn format_guidance(guidance: &Guidance) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== {} ===\n", guidance.title));
    out.push_str(&format!("{}\n", guidance.intro));
    for section in guidance.sections {
        out.push_str(&format!("\n{}\n", section.heading));
        for point in section.points {
            out.push_str(&format!("  - {point}\n"));
        }
    }
    out
}

/// One line per offending field.
pub fn format_rejection(err: &PipelineError) -> String {
    let mut out = String::new();
    for line in err.detail_lines() {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Field order, form label, and bounds of a profile.
pub fn format_fields(profile: &DiseaseProfile) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== {} fields (model input order) ===\n", profile.id()));
    out.push_str(&format!("{:>3}  {:<26} {:>8} {:>8}  {}\n", "#", "field", "min", "max", "prompt"));
    for (idx, spec) in profile.fields().iter().enumerate() {
        let prompt = prompt_for(profile.id(), &spec.name).unwrap_or("");
        out.push_str(&format!(
            "{:>3}  {:<26} {:>8} {:>8}  {}\n",
            idx + 1,
            spec.name,
            spec.min,
            spec.max,
            prompt
        ));
    }
    out
}

/// Per-status counts for a batch run.
pub fn format_batch_summary(disease: DiseaseId, rows: &[BatchRow]) -> String {
    let mut positive = 0usize;
    let mut negative = 0usize;
    let mut rejected = 0usize;
    for row in rows {
        match &row.result {
            Ok(o) if o.label == Label::Positive => positive += 1,
            Ok(_) => negative += 1,
            Err(_) => rejected += 1,
        }
    }

    let mut out = String::new();
    out.push_str(&format!("=== {disease} batch: {} row(s) ===\n", rows.len()));
    out.push_str(&format!("positive={positive} negative={negative} rejected={rejected}\n"));
    for row in rows {
        if let Err(err) = &row.result {
            for line in err.detail_lines() {
                out.push_str(&format!("  line {}: {line}\n", row.line));
            }
        }
    }
    out
}
