//! Command-line parsing for the `hs` screening tool.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! pipeline code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::DiseaseId;

pub mod prompt;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "hs", version, about = "Validated diabetes / heart disease risk screening")]
pub struct Cli {
    /// Directory holding the classifier artifacts (overrides HS_MODELS_DIR).
    #[arg(long, global = true, value_name = "DIR")]
    pub models_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List a profile's fields in model input order, with their accepted ranges.
    Fields(FieldsArgs),
    /// Screen a single submission given as NAME=VALUE pairs.
    Predict(PredictArgs),
    /// Ask for each field interactively, then screen the submission.
    Prompt(PromptArgs),
    /// Screen every row of a CSV file (one submission per row).
    Batch(BatchArgs),
    /// Load every model and report whether the deployment is usable.
    Check,
}

#[derive(Debug, Parser)]
pub struct FieldsArgs {
    #[arg(value_enum)]
    pub disease: DiseaseId,
}

#[derive(Debug, Parser)]
pub struct PredictArgs {
    #[arg(value_enum)]
    pub disease: DiseaseId,

    /// Field value, repeatable (e.g. `-v Glucose=120`).
    #[arg(short = 'v', long = "value", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    pub values: Vec<(String, String)>,

    /// Print a JSON report instead of text.
    #[arg(long)]
    pub json: bool,

    /// Include the long-form guidance for positive results.
    #[arg(long)]
    pub explain: bool,
}

#[derive(Debug, Parser)]
pub struct PromptArgs {
    #[arg(value_enum)]
    pub disease: DiseaseId,

    /// Include the long-form guidance for positive results.
    #[arg(long)]
    pub explain: bool,
}

#[derive(Debug, Parser)]
pub struct BatchArgs {
    #[arg(value_enum)]
    pub disease: DiseaseId,

    /// CSV file whose header names the profile's fields.
    #[arg(short = 'i', long, value_name = "CSV")]
    pub input: PathBuf,

    /// Write per-row results to CSV.
    #[arg(long, value_name = "CSV")]
    pub export: Option<PathBuf>,
}

/// Parse `NAME=VALUE`. The value may be empty; coercion reports it later.
fn parse_assignment(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got `{s}`"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing field name in `{s}`"));
    }
    Ok((name.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_predict_values() {
        let cli = Cli::try_parse_from([
            "hs",
            "predict",
            "heart-disease",
            "-v",
            "age=54",
            "--value",
            "oldpeak=",
            "--json",
        ])
        .unwrap();
        let Command::Predict(args) = cli.command else {
            panic!("expected predict");
        };
        assert_eq!(args.disease, DiseaseId::HeartDisease);
        assert_eq!(
            args.values,
            vec![
                ("age".to_string(), "54".to_string()),
                ("oldpeak".to_string(), String::new())
            ]
        );
        assert!(args.json);
    }

    #[test]
    fn rejects_assignment_without_equals() {
        assert!(parse_assignment("Glucose").is_err());
        assert!(parse_assignment("=5").is_err());
        assert_eq!(
            parse_assignment("BMI=25.0=x").unwrap(),
            ("BMI".to_string(), "25.0=x".to_string())
        );
    }

    #[test]
    fn models_dir_is_global() {
        let cli = Cli::try_parse_from(["hs", "check", "--models-dir", "/tmp/m"]).unwrap();
        assert_eq!(cli.models_dir, Some(PathBuf::from("/tmp/m")));
    }
}
