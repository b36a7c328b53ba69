//! End-to-end runs against the artifacts shipped under `models/`.

use std::path::PathBuf;

use health_screen::app::pipeline::{run_batch, run_prediction};
use health_screen::domain::{DiseaseId, Label, RawInput};
use health_screen::error::PipelineError;
use health_screen::io::ingest::load_batch_csv;
use health_screen::profiles::ProfileRegistry;

fn manifest_path(rel: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(rel)
}

fn registry() -> ProfileRegistry {
    ProfileRegistry::load(&manifest_path("models")).expect("shipped models load")
}

fn raw(pairs: &[(&str, &str)]) -> RawInput {
    pairs.iter().copied().collect()
}

#[test]
fn shipped_models_bind_to_builtin_profiles() {
    let registry = registry();
    let diabetes = registry.get(DiseaseId::Diabetes).unwrap();
    let heart = registry.get(DiseaseId::HeartDisease).unwrap();
    assert_eq!(diabetes.model().n_features(), 8);
    assert_eq!(heart.model().n_features(), 13);
}

#[test]
fn diabetes_scenarios() {
    let registry = registry();
    let profile = registry.get(DiseaseId::Diabetes).unwrap();

    let typical = raw(&[
        ("Pregnancies", "2"),
        ("Glucose", "120"),
        ("BloodPressure", "70"),
        ("SkinThickness", "20"),
        ("Insulin", "80"),
        ("BMI", "25.0"),
        ("DiabetesPedigreeFunction", "0.5"),
        ("Age", "30"),
    ]);
    let first = run_prediction(profile, &typical).unwrap();
    let second = run_prediction(profile, &typical).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.label, Label::Negative);
    assert_eq!(first.narration_key, None);

    let high_risk = raw(&[
        ("Pregnancies", "8"),
        ("Glucose", "190"),
        ("BloodPressure", "80"),
        ("SkinThickness", "35"),
        ("Insulin", "200"),
        ("BMI", "42"),
        ("DiabetesPedigreeFunction", "1.2"),
        ("Age", "55"),
    ]);
    let outcome = run_prediction(profile, &high_risk).unwrap();
    assert_eq!(outcome.label, Label::Positive);
    assert_eq!(outcome.narration_key, Some("diabetes.untreated-risks"));
}

#[test]
fn heart_scenarios() {
    let registry = registry();
    let profile = registry.get(DiseaseId::HeartDisease).unwrap();

    let values = [
        ("age", "41"),
        ("sex", "0"),
        ("cp", "2"),
        ("trestbps", "130"),
        ("chol", "204"),
        ("fbs", "0"),
        ("restecg", "0"),
        ("thalach", "172"),
        ("exang", "0"),
        ("oldpeak", "1.4"),
        ("slope", "2"),
        ("ca", "0"),
        ("thal", "2"),
    ];
    let outcome = run_prediction(profile, &raw(&values)).unwrap();
    assert_eq!(outcome.label, Label::Positive);

    let mut malformed = raw(&values);
    malformed.insert("age", "");
    match run_prediction(profile, &malformed) {
        Err(PipelineError::InvalidFormat(err)) => assert_eq!(err.field, "age"),
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn demo_batch_files_evaluate() {
    let registry = registry();

    let profile = registry.get(DiseaseId::Diabetes).unwrap();
    let batch = load_batch_csv(&manifest_path("demos/diabetes_batch.csv"), profile).unwrap();
    let rows = run_batch(profile, batch.rows);
    let statuses: Vec<_> = rows
        .iter()
        .map(|r| match &r.result {
            Ok(o) => o.label.as_raw().to_string(),
            Err(PipelineError::OutOfRange { .. }) => "range".to_string(),
            Err(PipelineError::InvalidFormat(_)) => "format".to_string(),
            Err(PipelineError::ContractViolation(_)) => "contract".to_string(),
        })
        .collect();
    assert_eq!(statuses, ["0", "1", "range", "format"]);

    let profile = registry.get(DiseaseId::HeartDisease).unwrap();
    let batch = load_batch_csv(&manifest_path("demos/heart_batch.csv"), profile).unwrap();
    let rows = run_batch(profile, batch.rows);
    match &rows[3].result {
        Err(PipelineError::OutOfRange { violations }) => {
            let fields: Vec<_> = violations.iter().map(|v| v.field.as_str()).collect();
            assert_eq!(fields, ["age", "chol", "thal"]);
        }
        other => panic!("expected violations, got {other:?}"),
    }
}
