//! Classifier loading and invocation.
//!
//! - `gateway`: the `Classifier` trait and the contract-checking `ModelGateway`
//! - `linear`: logistic / linear-SVM models read from JSON artifacts

pub mod gateway;
pub mod linear;

#[cfg(test)]
pub(crate) mod testing;

pub use gateway::*;
pub use linear::*;
