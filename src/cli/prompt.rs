//! Interactive form.
//!
//! Asks for each field of a profile in model input order. Answers are kept as
//! raw text; coercion and range checks run afterwards in the pipeline so the
//! user sees every problem at once.

use std::io::{BufRead, Write};

use crate::domain::RawInput;
use crate::error::AppError;
use crate::profiles::{DiseaseProfile, prompt_for};

/// Collect one submission from `input`, writing prompts to `output`.
pub fn prompt_for_input(profile: &DiseaseProfile, mut input: impl BufRead, mut output: impl Write) -> Result<RawInput, AppError> {
    let mut raw = RawInput::new();

    for spec in profile.fields() {
        let label = prompt_for(profile.id(), &spec.name).unwrap_or(spec.name.as_str());
        write!(output, "{label} [{} to {}]: ", spec.min, spec.max)
            .and_then(|()| output.flush())
            .map_err(|e| AppError::new(2, format!("Failed to write prompt: {e}")))?;

        let mut line = String::new();
        let bytes = input
            .read_line(&mut line)
            .map_err(|e| AppError::new(2, format!("Failed to read input: {e}")))?;
        if bytes == 0 {
            return Err(AppError::new(
                2,
                format!("No input received for {}. Use `hs predict` to pass values as flags.", spec.name),
            ));
        }

        raw.insert(spec.name.clone(), line.trim_end_matches(['\r', '\n']));
    }

    Ok(raw)
}
