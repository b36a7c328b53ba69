//! Disease profiles: an ordered field list, its range table, and the bound model.

use std::collections::HashSet;

use crate::domain::{DiseaseId, FieldSpec};
use crate::error::ContractViolation;
use crate::models::ModelGateway;
use crate::profiles::ranges::{RangeTable, rows_for};

/// One screening profile.
///
/// `fields` order is the feature-vector order handed to the model and must match
/// the order the model was trained on.
#[derive(Debug, Clone)]
pub struct DiseaseProfile {
    id: DiseaseId,
    fields: Vec<FieldSpec>,
    ranges: RangeTable,
    model: ModelGateway,
}

impl DiseaseProfile {
    /// Assemble a profile from explicit parts.
    ///
    /// Fails if `field_names` is empty or repeats a name, if the model expects a
    /// different number of features, or if the model's recorded training order
    /// differs from `field_names`.
    pub fn new(
        id: DiseaseId,
        field_names: &[&str],
        ranges: RangeTable,
        model: ModelGateway,
    ) -> Result<Self, ContractViolation> {
        if field_names.is_empty() {
            return Err(ContractViolation(format!("profile {id} declares no fields")));
        }
        let mut seen = HashSet::new();
        for name in field_names {
            if !seen.insert(*name) {
                return Err(ContractViolation(format!("profile {id} lists `{name}` twice")));
            }
        }
        if model.n_features() != field_names.len() {
            return Err(ContractViolation(format!(
                "profile {id} has {} fields but its model expects {}",
                field_names.len(),
                model.n_features()
            )));
        }
        if let Some(trained) = model.feature_names() {
            if trained.iter().map(String::as_str).ne(field_names.iter().copied()) {
                return Err(ContractViolation(format!(
                    "profile {id} field order differs from the model's training order"
                )));
            }
        }

        let fields = field_names.iter().map(|name| ranges.field_spec(name)).collect();
        Ok(Self {
            id,
            fields,
            ranges,
            model,
        })
    }

    /// Built-in profile with its fixed field order and range table.
    pub fn builtin(id: DiseaseId, model: ModelGateway) -> Result<Self, ContractViolation> {
        Self::new(id, &builtin_field_names(id), RangeTable::for_disease(id), model)
    }

    pub fn id(&self) -> DiseaseId {
        self.id
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn ranges(&self) -> &RangeTable {
        &self.ranges
    }

    pub fn model(&self) -> &ModelGateway {
        &self.model
    }
}

/// Field names of a built-in profile, in training order.
pub fn builtin_field_names(id: DiseaseId) -> Vec<&'static str> {
    rows_for(id).iter().map(|&(name, ..)| name).collect()
}

/// Human-readable form label for a built-in field.
pub fn prompt_for(id: DiseaseId, field: &str) -> Option<&'static str> {
    rows_for(id)
        .iter()
        .find(|(name, ..)| *name == field)
        .map(|&(_, prompt, ..)| prompt)
}
