//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and resolves settings
//! - initializes logging
//! - loads every classifier (a missing model stops the process here)
//! - dispatches to the command handlers

use std::collections::HashSet;
use std::io;

use chrono::Utc;
use clap::Parser;

use crate::cli::{BatchArgs, Cli, Command, FieldsArgs, PredictArgs, PromptArgs};
use crate::config::{Settings, init_logging};
use crate::domain::{DiseaseId, Outcome, RawInput};
use crate::error::AppError;
use crate::profiles::{DiseaseProfile, ProfileRegistry};
use crate::report::{OutcomeReport, format_batch_summary, format_fields, format_outcome};

pub mod pipeline;

/// Entry point for the `hs` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let settings = Settings::from_env().with_models_dir(cli.models_dir.clone());
    init_logging(&settings.log_filter);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        models_dir = %settings.models_dir.display(),
        "starting"
    );

    // Serving without a valid model is unsafe, so any load failure ends the run.
    let registry = ProfileRegistry::load(&settings.models_dir).inspect_err(|e| tracing::error!("{e}"))?;

    match cli.command {
        Command::Fields(args) => handle_fields(&registry, args),
        Command::Predict(args) => handle_predict(&registry, args),
        Command::Prompt(args) => handle_prompt(&registry, args),
        Command::Batch(args) => handle_batch(&registry, args),
        Command::Check => handle_check(&registry),
    }
}

fn profile(registry: &ProfileRegistry, disease: DiseaseId) -> Result<&DiseaseProfile, AppError> {
    registry
        .get(disease)
        .ok_or_else(|| AppError::new(4, format!("No profile registered for {disease}.")))
}

fn handle_fields(registry: &ProfileRegistry, args: FieldsArgs) -> Result<(), AppError> {
    print!("{}", format_fields(profile(registry, args.disease)?));
    Ok(())
}

fn handle_predict(registry: &ProfileRegistry, args: PredictArgs) -> Result<(), AppError> {
    let profile = profile(registry, args.disease)?;
    let raw = raw_input_from_pairs(args.values)?;
    let outcome = pipeline::run_prediction(profile, &raw)?;

    if args.json {
        let report = OutcomeReport::new(&outcome, Utc::now());
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| AppError::new(4, format!("Failed to serialize report: {e}")))?;
        println!("{json}");
    } else {
        print_outcome(&outcome, args.explain);
    }
    Ok(())
}

fn handle_prompt(registry: &ProfileRegistry, args: PromptArgs) -> Result<(), AppError> {
    let profile = profile(registry, args.disease)?;
    println!("=== {} screening ===", profile.id());
    let raw = crate::cli::prompt::prompt_for_input(profile, io::stdin().lock(), io::stdout())?;
    println!();

    let outcome = pipeline::run_prediction(profile, &raw)?;
    print_outcome(&outcome, args.explain);
    Ok(())
}

fn handle_batch(registry: &ProfileRegistry, args: BatchArgs) -> Result<(), AppError> {
    let profile = profile(registry, args.disease)?;
    let batch = crate::io::ingest::load_batch_csv(&args.input, profile)?;
    tracing::info!(rows = batch.rows.len(), path = %args.input.display(), "batch loaded");

    let results = pipeline::run_batch(profile, batch.rows);
    print!("{}", format_batch_summary(profile.id(), &results));

    if let Some(path) = &args.export {
        crate::io::export::write_results_csv(path, &results)?;
        println!("Results written to {}", path.display());
    }
    Ok(())
}

fn handle_check(registry: &ProfileRegistry) -> Result<(), AppError> {
    for profile in registry.profiles() {
        println!(
            "{}: model OK ({} features)",
            profile.id(),
            profile.model().n_features()
        );
    }
    Ok(())
}

fn print_outcome(outcome: &Outcome, explain: bool) {
    print!("{}", format_outcome(outcome, explain));
}

/// Build a submission from `NAME=VALUE` pairs, refusing repeated names.
fn raw_input_from_pairs(pairs: Vec<(String, String)>) -> Result<RawInput, AppError> {
    let mut seen = HashSet::new();
    let mut raw = RawInput::new();
    for (name, value) in pairs {
        if !seen.insert(name.clone()) {
            return Err(AppError::new(2, format!("Field {name} was given more than once.")));
        }
        raw.insert(name, value);
    }
    Ok(raw)
}
