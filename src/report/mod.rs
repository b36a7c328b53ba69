//! Reporting: outcome narration, static guidance content, terminal formatting.

pub mod format;
pub mod guidance;
pub mod narrator;

pub use format::*;
pub use narrator::{Narration, narrate};
