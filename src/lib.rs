//! `health-screen` library crate.
//!
//! The binary (`hs`) is a thin wrapper around this library so that:
//!
//! - the validated pipeline is testable without spawning processes
//! - other front-ends (a web form, a notebook) can reuse the same profiles and pipeline
//!
//! Flow for one submission: raw text → coercion → range validation → classifier → narration.

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod io;
pub mod models;
pub mod profiles;
pub mod report;
pub mod validate;
