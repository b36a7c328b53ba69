//! Runtime configuration and logging setup.
//!
//! Settings come from the environment (a `.env` file is loaded first if present),
//! then CLI flags override them.
//!
//! - `HS_MODELS_DIR`: directory holding `diabetes.json` / `heart.json` (default `models`)
//! - `HS_LOG`: tracing filter directive, falling back to `RUST_LOG`, then `warn`

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

pub const DEFAULT_MODELS_DIR: &str = "models";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub models_dir: PathBuf,
    pub log_filter: String,
}

impl Settings {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve settings through an arbitrary variable lookup.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| get(key).filter(|v| !v.trim().is_empty());
        Self {
            models_dir: non_empty("HS_MODELS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_MODELS_DIR)),
            log_filter: non_empty("HS_LOG")
                .or_else(|| non_empty("RUST_LOG"))
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }

    /// Apply a `--models-dir` flag, if given.
    pub fn with_models_dir(mut self, models_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = models_dir {
            self.models_dir = dir;
        }
        self
    }
}

/// Install the global stderr subscriber. Later calls are no-ops.
pub fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
