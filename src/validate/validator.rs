//! Range validation over a fully coerced input.

use crate::domain::{CoercedInput, FieldSpec, FieldViolation, ValidationResult};
use crate::error::ContractViolation;

/// Check one value against its inclusive range.
pub fn check_field(spec: &FieldSpec, value: f64) -> Option<FieldViolation> {
    if spec.bounds().contains(value) {
        return None;
    }
    Some(FieldViolation {
        field: spec.name.clone(),
        value,
        min: spec.min,
        max: spec.max,
    })
}

/// Validate every field; never stops at the first violation.
///
/// `coerced` must hold a value for every spec in `fields`. A missing value means
/// the caller skipped coercion and is reported as a `ContractViolation`.
pub fn validate(coerced: CoercedInput, fields: &[FieldSpec]) -> Result<ValidationResult, ContractViolation> {
    let mut violations = Vec::new();
    for spec in fields {
        let value = coerced
            .get(&spec.name)
            .ok_or_else(|| ContractViolation(format!("no coerced value for `{}`", spec.name)))?;
        if let Some(v) = check_field(spec, value) {
            violations.push(v);
        }
    }

    if violations.is_empty() {
        Ok(ValidationResult::Valid(coerced))
    } else {
        Ok(ValidationResult::Invalid(violations))
    }
}
