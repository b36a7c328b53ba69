//! Test doubles for the classifier seam.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::models::gateway::Classifier;

/// Returns a fixed label and records every vector it was asked to classify.
#[derive(Debug)]
pub struct RecordingClassifier {
    n_features: usize,
    label: u8,
    calls: AtomicUsize,
    seen: Mutex<Vec<Vec<f64>>>,
}

impl RecordingClassifier {
    pub fn new(n_features: usize, label: u8) -> Self {
        Self {
            n_features,
            label,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<Vec<f64>> {
        self.seen.lock().map(|v| v.clone()).unwrap_or_default()
    }
}

impl Classifier for RecordingClassifier {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn classify(&self, features: &[f64]) -> u8 {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(features.to_vec());
        }
        self.label
    }
}
