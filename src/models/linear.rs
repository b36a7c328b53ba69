//! Linear classifiers loaded from JSON artifacts.
//!
//! An artifact records the feature order the model was trained on, its
//! coefficients, and an optional standardization step:
//!
//! ```json
//! {
//!   "kind": "logistic",
//!   "features": ["age", "sex", "..."],
//!   "coefficients": [0.01, -1.2, "..."],
//!   "intercept": 0.3,
//!   "threshold": 0.5,
//!   "scaler": { "mean": ["..."], "scale": ["..."] }
//! }
//! ```
//!
//! Decision rule:
//! - `logistic`: positive iff `sigmoid(z) >= threshold`
//! - `linear`  : positive iff `z > 0` (linear SVM decision function)
//!
//! where `z = w · x' + b` and `x' = (x - mean) / scale` when a scaler is present.

use std::fs::File;
use std::path::Path;

use nalgebra::DVector;
use serde::{Deserialize, Serialize};

use crate::models::gateway::Classifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinearKind {
    Logistic,
    Linear,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

/// On-disk representation of a trained linear model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub kind: LinearKind,
    pub features: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    #[serde(default)]
    pub threshold: Option<f64>,
    #[serde(default)]
    pub scaler: Option<Scaler>,
}

/// Read an artifact file. Errors are plain strings; the gateway attaches context.
pub fn read_artifact(path: &Path) -> Result<ModelArtifact, String> {
    let file = File::open(path).map_err(|e| format!("failed to open artifact: {e}"))?;
    serde_json::from_reader(file).map_err(|e| format!("invalid artifact JSON: {e}"))
}

#[derive(Debug, Clone)]
pub struct LinearClassifier {
    kind: LinearKind,
    features: Vec<String>,
    weights: DVector<f64>,
    intercept: f64,
    threshold: f64,
    mean: Option<DVector<f64>>,
    scale: Option<DVector<f64>>,
}

impl LinearClassifier {
    /// Check an artifact for internal consistency and build the classifier.
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self, String> {
        let n = artifact.features.len();
        if n == 0 {
            return Err("artifact declares no features".to_string());
        }
        if artifact.coefficients.len() != n {
            return Err(format!(
                "{} coefficients for {n} features",
                artifact.coefficients.len()
            ));
        }
        if !artifact.coefficients.iter().all(|c| c.is_finite()) || !artifact.intercept.is_finite() {
            return Err("non-finite coefficient or intercept".to_string());
        }

        let threshold = match (artifact.kind, artifact.threshold) {
            (LinearKind::Logistic, Some(t)) if t.is_finite() && t > 0.0 && t < 1.0 => t,
            (LinearKind::Logistic, Some(t)) => {
                return Err(format!("logistic threshold must lie in (0, 1), got {t}"));
            }
            (LinearKind::Logistic, None) => 0.5,
            (LinearKind::Linear, Some(_)) => {
                return Err("`threshold` only applies to logistic models".to_string());
            }
            (LinearKind::Linear, None) => 0.0,
        };

        let (mean, scale) = match artifact.scaler {
            Some(scaler) => {
                if scaler.mean.len() != n || scaler.scale.len() != n {
                    return Err(format!(
                        "scaler has {} means and {} scales for {n} features",
                        scaler.mean.len(),
                        scaler.scale.len()
                    ));
                }
                if !scaler.mean.iter().all(|m| m.is_finite()) {
                    return Err("non-finite scaler mean".to_string());
                }
                if !scaler.scale.iter().all(|s| s.is_finite() && *s != 0.0) {
                    return Err("scaler scale entries must be finite and non-zero".to_string());
                }
                (
                    Some(DVector::from_vec(scaler.mean)),
                    Some(DVector::from_vec(scaler.scale)),
                )
            }
            None => (None, None),
        };

        Ok(Self {
            kind: artifact.kind,
            features: artifact.features,
            weights: DVector::from_vec(artifact.coefficients),
            intercept: artifact.intercept,
            threshold,
            mean,
            scale,
        })
    }

    pub fn kind(&self) -> LinearKind {
        self.kind
    }

    /// Raw decision value `z`.
    pub fn decision(&self, features: &[f64]) -> f64 {
        let mut x = DVector::from_column_slice(features);
        if let (Some(mean), Some(scale)) = (&self.mean, &self.scale) {
            x -= mean;
            x.component_div_assign(scale);
        }
        self.weights.dot(&x) + self.intercept
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

impl Classifier for LinearClassifier {
    fn n_features(&self) -> usize {
        self.features.len()
    }

    fn feature_names(&self) -> Option<&[String]> {
        Some(&self.features)
    }

    fn classify(&self, features: &[f64]) -> u8 {
        let z = self.decision(features);
        let positive = match self.kind {
            LinearKind::Logistic => sigmoid(z) >= self.threshold,
            LinearKind::Linear => z > self.threshold,
        };
        u8::from(positive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact(kind: LinearKind) -> ModelArtifact {
        ModelArtifact {
            kind,
            features: vec!["a".to_string(), "b".to_string()],
            coefficients: vec![1.0, -1.0],
            intercept: 0.0,
            threshold: None,
            scaler: None,
        }
    }

    #[test]
    fn logistic_threshold_defaults_to_half() {
        let model = LinearClassifier::from_artifact(artifact(LinearKind::Logistic)).unwrap();
        assert_eq!(model.classify(&[2.0, 1.0]), 1);
        assert_eq!(model.classify(&[1.0, 2.0]), 0);
        // sigmoid(0) == 0.5 sits on the threshold and counts as positive.
        assert_eq!(model.classify(&[1.0, 1.0]), 1);
    }

    #[test]
    fn linear_boundary_is_negative() {
        let model = LinearClassifier::from_artifact(artifact(LinearKind::Linear)).unwrap();
        assert_eq!(model.classify(&[1.0, 1.0]), 0);
        assert_eq!(model.classify(&[1.5, 1.0]), 1);
    }

    #[test]
    fn scaler_is_applied_before_weights() {
        let mut a = artifact(LinearKind::Linear);
        a.scaler = Some(Scaler {
            mean: vec![10.0, 0.0],
            scale: vec![2.0, 1.0],
        });
        let model = LinearClassifier::from_artifact(a).unwrap();
        // (14 - 10) / 2 - 1 = 1
        assert!((model.decision(&[14.0, 1.0]) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_inconsistent_artifacts() {
        let mut short = artifact(LinearKind::Logistic);
        short.coefficients.pop();
        assert!(LinearClassifier::from_artifact(short).is_err());

        let mut zero_scale = artifact(LinearKind::Logistic);
        zero_scale.scaler = Some(Scaler {
            mean: vec![0.0, 0.0],
            scale: vec![1.0, 0.0],
        });
        assert!(LinearClassifier::from_artifact(zero_scale).is_err());

        let mut bad_threshold = artifact(LinearKind::Logistic);
        bad_threshold.threshold = Some(1.5);
        assert!(LinearClassifier::from_artifact(bad_threshold).is_err());

        let mut nan = artifact(LinearKind::Linear);
        nan.intercept = f64::NAN;
        assert!(LinearClassifier::from_artifact(nan).is_err());
    }

    #[test]
    fn parses_json_artifact() {
        let json = r#"{
            "kind": "logistic",
            "features": ["x"],
            "coefficients": [2.0],
            "intercept": -1.0
        }"#;
        let a: ModelArtifact = serde_json::from_str(json).unwrap();
        let model = LinearClassifier::from_artifact(a).unwrap();
        assert_eq!(model.kind(), LinearKind::Logistic);
        assert_eq!(model.feature_names().unwrap(), ["x".to_string()]);
    }
}
