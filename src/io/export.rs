//! Export per-row batch results to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.

use std::path::Path;

use crate::app::pipeline::BatchRow;
use crate::error::AppError;
use crate::report::narrate;

/// Write one row per submission: `line,status,label,narration_key,detail`.
///
/// `status` is `ok` or `rejected`; `detail` holds the verdict or the rejection
/// reasons joined with `; `.
pub fn write_results_csv(path: &Path, rows: &[BatchRow]) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display())))?;

    writer
        .write_record(["line", "status", "label", "narration_key", "detail"])
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV header: {e}")))?;

    for row in rows {
        let line = row.line.to_string();
        let record = match &row.result {
            Ok(outcome) => {
                let narration = narrate(outcome);
                [
                    line,
                    "ok".to_string(),
                    outcome.label.as_raw().to_string(),
                    narration.narration_key.unwrap_or_default().to_string(),
                    narration.verdict.to_string(),
                ]
            }
            Err(err) => [
                line,
                "rejected".to_string(),
                String::new(),
                String::new(),
                err.detail_lines().join("; "),
            ],
        };
        writer
            .write_record(&record)
            .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::new(2, format!("Failed to flush export CSV: {e}")))?;
    Ok(())
}
