//! Process-wide profile registry.
//!
//! Built once at startup and only read afterwards, so it can be shared across
//! threads (batch mode) without locking.

use std::path::Path;

use crate::domain::DiseaseId;
use crate::error::ModelUnavailable;
use crate::models::ModelGateway;
use crate::profiles::profile::{DiseaseProfile, builtin_field_names};

#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    profiles: Vec<DiseaseProfile>,
}

impl ProfileRegistry {
    /// Load every built-in profile's model from `models_dir`.
    ///
    /// Stops at the first model that cannot be loaded; there is no partially
    /// working registry.
    pub fn load(models_dir: &Path) -> Result<Self, ModelUnavailable> {
        let mut profiles = Vec::with_capacity(DiseaseId::ALL.len());
        for disease in DiseaseId::ALL {
            let path = models_dir.join(disease.model_file());
            let fields = builtin_field_names(disease);
            let gateway = ModelGateway::load(disease, &path, &fields)?;
            let profile = DiseaseProfile::builtin(disease, gateway).map_err(|e| ModelUnavailable {
                disease,
                path: path.clone(),
                reason: e.to_string(),
            })?;
            profiles.push(profile);
        }
        Ok(Self { profiles })
    }

    /// Registry over already-built profiles.
    pub fn from_profiles(profiles: Vec<DiseaseProfile>) -> Self {
        Self { profiles }
    }

    pub fn get(&self, disease: DiseaseId) -> Option<&DiseaseProfile> {
        self.profiles.iter().find(|p| p.id() == disease)
    }

    pub fn profiles(&self) -> &[DiseaseProfile] {
        &self.profiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_artifact(dir: &Path, disease: DiseaseId) {
        let features = builtin_field_names(disease);
        let artifact = serde_json::json!({
            "kind": "logistic",
            "features": features,
            "coefficients": vec![0.0; features.len()],
            "intercept": -1.0,
        });
        fs::write(dir.join(disease.model_file()), artifact.to_string()).unwrap();
    }

    #[test]
    fn loads_every_builtin_profile() {
        let dir = tempfile::tempdir().unwrap();
        for disease in DiseaseId::ALL {
            write_artifact(dir.path(), disease);
        }
        let registry = ProfileRegistry::load(dir.path()).unwrap();
        assert_eq!(registry.profiles().len(), 2);
        assert_eq!(registry.get(DiseaseId::HeartDisease).unwrap().fields().len(), 13);
    }

    #[test]
    fn one_missing_model_fails_the_whole_load() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), DiseaseId::Diabetes);
        let err = ProfileRegistry::load(dir.path()).unwrap_err();
        assert_eq!(err.disease, DiseaseId::HeartDisease);
        assert!(err.path.ends_with("heart.json"));
    }
}
