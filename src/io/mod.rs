//! Input/output helpers.
//!
//! - batch CSV ingest (`ingest`)
//! - batch result export (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
