//! Screening profiles.
//!
//! - `ranges`: per-profile inclusive bounds
//! - `profile`: field order + ranges + bound model
//! - `registry`: every built-in profile, loaded once at startup

pub mod profile;
pub mod ranges;
pub mod registry;

pub use profile::*;
pub use ranges::RangeTable;
pub use registry::*;
