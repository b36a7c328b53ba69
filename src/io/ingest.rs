//! CSV ingest for batch screening.
//!
//! Each data row is one independent submission. The header names the fields;
//! names are matched exactly (the diabetes `Age` and the heart `age` differ only
//! by case). Cells are kept as raw text so coercion errors surface per row
//! through the normal pipeline.

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use csv::StringRecord;

use crate::domain::RawInput;
use crate::error::AppError;
use crate::profiles::DiseaseProfile;

/// Parsed batch file: `(line, submission)` pairs in file order.
#[derive(Debug, Clone)]
pub struct BatchInput {
    pub rows: Vec<(usize, RawInput)>,
    /// Header columns the profile does not use.
    pub ignored_columns: Vec<String>,
}

/// Read a batch CSV whose header must cover every field of `profile`.
pub fn load_batch_csv(path: &Path, profile: &DiseaseProfile) -> Result<BatchInput, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open CSV '{}': {e}", path.display())))?;

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| AppError::new(2, format!("Failed to read CSV headers: {e}")))?
        .clone();
    let header_map = build_header_map(&headers);

    let missing: Vec<&str> = profile
        .fields()
        .iter()
        .map(|f| f.name.as_str())
        .filter(|name| !header_map.contains_key(*name))
        .collect();
    if !missing.is_empty() {
        return Err(AppError::new(
            2,
            format!(
                "CSV is missing required column(s) for {}: {}",
                profile.id(),
                missing.join(", ")
            ),
        ));
    }

    let mut ignored_columns: Vec<String> = header_map
        .keys()
        .filter(|name| profile.fields().iter().all(|f| f.name != **name))
        .cloned()
        .collect();
    ignored_columns.sort();
    if !ignored_columns.is_empty() {
        tracing::warn!(columns = ?ignored_columns, "ignoring CSV columns not used by the profile");
    }

    let mut rows = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        // +2: records start after the header and lines are 1-based.
        let line = idx + 2;
        let record = result.map_err(|e| AppError::new(2, format!("CSV parse error on line {line}: {e}")))?;
        rows.push((line, raw_input_from_record(&record, &header_map, profile)));
    }

    Ok(BatchInput { rows, ignored_columns })
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports sometimes prefix the first header with a UTF-8 BOM.
    name.trim_start_matches('\u{feff}').trim().to_string()
}

fn raw_input_from_record(record: &StringRecord, header_map: &HashMap<String, usize>, profile: &DiseaseProfile) -> RawInput {
    profile
        .fields()
        .iter()
        .filter_map(|f| {
            let idx = header_map.get(&f.name)?;
            // Short rows leave the cell absent, which coerces like an empty token.
            record.get(*idx).map(|cell| (f.name.clone(), cell.to_string()))
        })
        .collect()
}
