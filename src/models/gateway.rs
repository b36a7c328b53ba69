//! The seam between the pipeline and a trained classifier.
//!
//! The pipeline never talks to a model directly. It goes through `ModelGateway`,
//! which owns a loaded `Classifier` and enforces the feature-vector contract:
//! the vector must have exactly one value per profile field, in training order.
//! Range checks are not repeated here; the validator has already run.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::domain::{DiseaseId, FieldSpec, Label};
use crate::error::{ContractViolation, ModelUnavailable};
use crate::models::linear::{LinearClassifier, read_artifact};

/// A loaded binary classifier.
///
/// Implementations must be deterministic and must not mutate shared state on
/// `classify`, since one instance serves every request.
pub trait Classifier: Send + Sync + fmt::Debug {
    /// Length of the feature vector the model was trained on.
    fn n_features(&self) -> usize;

    /// Feature names in training order, if the artifact records them.
    fn feature_names(&self) -> Option<&[String]> {
        None
    }

    /// Returns `0` or `1`.
    fn classify(&self, features: &[f64]) -> u8;
}

#[derive(Debug, Clone)]
pub struct ModelGateway {
    classifier: Arc<dyn Classifier>,
}

impl ModelGateway {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self { classifier }
    }

    /// Load a classifier artifact for `disease` and check it was trained on `fields`.
    ///
    /// Any failure here is fatal: a profile without a usable model must not serve.
    pub fn load(disease: DiseaseId, path: &Path, fields: &[&str]) -> Result<Self, ModelUnavailable> {
        let unavailable = |reason: String| ModelUnavailable {
            disease,
            path: path.to_path_buf(),
            reason,
        };

        let artifact = read_artifact(path).map_err(unavailable)?;

        if artifact.features.len() != fields.len()
            || artifact.features.iter().zip(fields).any(|(a, b)| a != b)
        {
            return Err(unavailable(format!(
                "trained on [{}] but the profile expects [{}]",
                artifact.features.join(", "),
                fields.join(", ")
            )));
        }

        let classifier = LinearClassifier::from_artifact(artifact).map_err(unavailable)?;
        tracing::info!(
            disease = %disease,
            path = %path.display(),
            kind = ?classifier.kind(),
            "loaded classifier"
        );
        Ok(Self::new(Arc::new(classifier)))
    }

    pub fn n_features(&self) -> usize {
        self.classifier.n_features()
    }

    pub fn feature_names(&self) -> Option<&[String]> {
        self.classifier.feature_names()
    }

    /// Classify one ordered feature vector.
    ///
    /// A length mismatch (against the profile or the model) or a label outside
    /// `{0, 1}` is a caller/model bug and is returned as a `ContractViolation`
    /// instead of a prediction.
    pub fn predict(&self, fields: &[FieldSpec], features: &[f64]) -> Result<Label, ContractViolation> {
        if features.len() != fields.len() {
            return Err(ContractViolation(format!(
                "expected {} features, got {}",
                fields.len(),
                features.len()
            )));
        }
        if features.len() != self.n_features() {
            return Err(ContractViolation(format!(
                "model expects {} features, profile supplied {}",
                self.n_features(),
                features.len()
            )));
        }
        if let Some(names) = self.feature_names() {
            if let Some((trained, given)) = names
                .iter()
                .zip(fields)
                .find(|(trained, spec)| **trained != spec.name)
            {
                return Err(ContractViolation(format!(
                    "feature order mismatch: model expects `{trained}` where `{}` was supplied",
                    given.name
                )));
            }
        }

        let raw = self.classifier.classify(features);
        Label::from_raw(raw)
            .ok_or_else(|| ContractViolation(format!("classifier returned label {raw}, expected 0 or 1")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Bounds;
    use crate::models::testing::RecordingClassifier;
    use std::io::Write;

    fn specs(names: &[&str]) -> Vec<FieldSpec> {
        names.iter().map(|n| FieldSpec::new(*n, Bounds::UNBOUNDED)).collect()
    }

    #[test]
    fn wrong_length_is_a_contract_violation() {
        let fake = Arc::new(RecordingClassifier::new(2, 1));
        let gateway = ModelGateway::new(fake.clone());
        let err = gateway.predict(&specs(&["a", "b"]), &[1.0]).unwrap_err();
        assert!(err.0.contains("expected 2"));
        assert_eq!(fake.calls(), 0);
    }

    #[test]
    fn model_size_mismatch_is_a_contract_violation() {
        let gateway = ModelGateway::new(Arc::new(RecordingClassifier::new(3, 1)));
        assert!(gateway.predict(&specs(&["a", "b"]), &[1.0, 2.0]).is_err());
    }

    #[test]
    fn out_of_domain_label_is_rejected() {
        let gateway = ModelGateway::new(Arc::new(RecordingClassifier::new(1, 7)));
        let err = gateway.predict(&specs(&["a"]), &[0.0]).unwrap_err();
        assert!(err.0.contains("label 7"));
    }

    #[test]
    fn maps_raw_labels() {
        let pos = ModelGateway::new(Arc::new(RecordingClassifier::new(1, 1)));
        let neg = ModelGateway::new(Arc::new(RecordingClassifier::new(1, 0)));
        assert_eq!(pos.predict(&specs(&["a"]), &[0.0]), Ok(Label::Positive));
        assert_eq!(neg.predict(&specs(&["a"]), &[0.0]), Ok(Label::Negative));
    }

    #[test]
    fn load_fails_for_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        let err = ModelGateway::load(DiseaseId::Diabetes, &path, &["a"]).unwrap_err();
        assert_eq!(err.disease, DiseaseId::Diabetes);
        assert!(err.reason.contains("failed to open"));
    }

    #[test]
    fn load_fails_for_corrupted_artifact() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = ModelGateway::load(DiseaseId::HeartDisease, file.path(), &["a"]).unwrap_err();
        assert!(err.reason.contains("invalid artifact JSON"));
    }

    #[test]
    fn load_rejects_reordered_training_features() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"kind":"logistic","features":["b","a"],"coefficients":[1.0,1.0],"intercept":0.0}}"#
        )
        .unwrap();
        let err = ModelGateway::load(DiseaseId::Diabetes, file.path(), &["a", "b"]).unwrap_err();
        assert!(err.reason.contains("trained on [b, a]"));
    }

    #[test]
    fn load_accepts_matching_artifact() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"kind":"linear","features":["a","b"],"coefficients":[1.0,-1.0],"intercept":0.0}}"#
        )
        .unwrap();
        let gateway = ModelGateway::load(DiseaseId::Diabetes, file.path(), &["a", "b"]).unwrap();
        assert_eq!(gateway.n_features(), 2);
        assert_eq!(gateway.predict(&specs(&["a", "b"]), &[3.0, 1.0]), Ok(Label::Positive));

        let swapped = gateway.predict(&specs(&["b", "a"]), &[3.0, 1.0]).unwrap_err();
        assert!(swapped.0.contains("feature order mismatch"));
    }
}
