//! Input checking ahead of inference.
//!
//! - `coerce`: raw text → numbers (format errors)
//! - `validator`: numbers → inclusive range checks (range errors)

pub mod coerce;
pub mod validator;

pub use coerce::*;
pub use validator::*;
