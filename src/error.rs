//! Error types.
//!
//! `AppError` is what the binary sees: a message plus a process exit code.
//! The pipeline itself reports typed errors so callers can tell a user mistake
//! (`ParseError`, `OutOfRange`) apart from a broken deployment (`ModelUnavailable`)
//! or a programming error (`ContractViolation`).
//!
//! Exit codes:
//! - `2` rejected input, unreadable files, bad arguments
//! - `3` a classifier could not be loaded
//! - `4` internal contract violation

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::{DiseaseId, FieldViolation};

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

/// A token that is not a plain decimal number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid number for {field}: {raw:?}. Enter a plain decimal value.")]
pub struct ParseError {
    pub field: String,
    pub raw: String,
}

/// A caller broke an invariant the pipeline relies on (feature count, order, labels).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("contract violation: {0}")]
pub struct ContractViolation(pub String);

/// A classifier artifact is missing, corrupted, or trained on a different field order.
#[derive(Debug, Clone, Error)]
#[error("Model for {disease} unavailable ({}): {reason}", .path.display())]
pub struct ModelUnavailable {
    pub disease: DiseaseId,
    pub path: PathBuf,
    pub reason: String,
}

/// Why a single pipeline run produced no outcome.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    #[error("{0}")]
    InvalidFormat(ParseError),

    #[error("{} field(s) out of range", .violations.len())]
    OutOfRange { violations: Vec<FieldViolation> },

    #[error(transparent)]
    ContractViolation(#[from] ContractViolation),
}

impl From<ParseError> for PipelineError {
    fn from(err: ParseError) -> Self {
        PipelineError::InvalidFormat(err)
    }
}

impl PipelineError {
    /// Rejections the user can fix by editing the form.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, PipelineError::ContractViolation(_))
    }

    /// One line per offending field.
    pub fn detail_lines(&self) -> Vec<String> {
        match self {
            PipelineError::InvalidFormat(err) => vec![err.to_string()],
            PipelineError::OutOfRange { violations } => {
                violations.iter().map(ToString::to_string).collect()
            }
            PipelineError::ContractViolation(err) => vec![err.to_string()],
        }
    }
}

impl From<PipelineError> for AppError {
    fn from(err: PipelineError) -> Self {
        let code = if err.is_user_error() { 2 } else { 4 };
        AppError::new(code, err.detail_lines().join("\n"))
    }
}

impl From<ModelUnavailable> for AppError {
    fn from(err: ModelUnavailable) -> Self {
        AppError::new(3, err.to_string())
    }
}

impl From<ContractViolation> for AppError {
    fn from(err: ContractViolation) -> Self {
        AppError::new(4, err.to_string())
    }
}
