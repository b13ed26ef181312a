use super::common::*;

use crate::scoring::domain::{Confidence, DecisionStatus, LoanApplication};
use crate::scoring::model::{ArtifactMetadata, ClassifierArtifact, ModelContext, ScalerArtifact};
use crate::scoring::service::{DecisionError, DecisionService, ModelAvailability};
use std::sync::Arc;

#[test]
fn unavailable_model_fails_fast() {
    let service = unavailable_service();
    let error = service
        .decide(&sample_application())
        .expect_err("degraded service rejects predictions");
    assert!(matches!(error, DecisionError::Unavailable(_)));
    assert!(error.to_string().contains("classifier.json missing"));
}

#[test]
fn missing_training_schema_is_structural() {
    let classifier = ClassifierArtifact {
        feature_names: None,
        ..forest_classifier()
    };
    let service = ready_service(classifier);
    let error = service
        .decide(&sample_application())
        .expect_err("alignment is impossible without the schema");
    assert_eq!(error, DecisionError::MissingSchema);
}

#[test]
fn strong_applicant_is_approved_with_confidence() {
    let service = ready_service(forest_classifier());
    let decision = service
        .decide(&sample_application())
        .expect("pipeline completes");

    assert_eq!(decision.status, DecisionStatus::Approved);
    match decision.confidence {
        Confidence::Score(probability) => assert!((probability - 0.85).abs() < 1e-9),
        Confidence::NotAvailable => panic!("forest estimates probabilities"),
    }
    assert_eq!(decision.reasons.len(), 3);
}

#[test]
fn weak_applicant_is_rejected() {
    let application = LoanApplication {
        credit_score: 540,
        ..sample_application()
    };
    let decision = ready_service(forest_classifier())
        .decide(&application)
        .expect("pipeline completes");
    assert_eq!(decision.status, DecisionStatus::Rejected);
}

#[test]
fn margin_model_reports_confidence_not_available() {
    let service = ready_service(margin_classifier());
    let decision = service
        .decide(&sample_application())
        .expect("pipeline completes");

    assert_eq!(decision.status, DecisionStatus::Approved);
    assert_eq!(decision.confidence, Confidence::NotAvailable);
}

#[test]
fn unknown_categoricals_degrade_instead_of_failing() {
    let application = LoanApplication {
        marital_status: "It's complicated".to_string(),
        employment_status: "Gig".to_string(),
        loan_purpose: "Submarine".to_string(),
        ..sample_application()
    };
    let decision = ready_service(forest_classifier())
        .decide(&application)
        .expect("unknown categories never raise");
    assert_eq!(decision.status, DecisionStatus::Approved);
}

#[test]
fn zero_income_record_completes() {
    let application = LoanApplication {
        annual_income: 0,
        ..sample_application()
    };
    ready_service(forest_classifier())
        .decide(&application)
        .expect("clamped denominator keeps the pipeline alive");
}

#[test]
fn scaler_mismatch_is_a_processing_error() {
    let context = ModelContext::new(
        forest_classifier(),
        ScalerArtifact {
            mean: vec![0.0; 3],
            scale: vec![1.0; 3],
        },
    );
    let service = DecisionService::new(ModelAvailability::Ready(Arc::new(context)));
    let error = service
        .decide(&sample_application())
        .expect_err("length mismatch is caught at the boundary");
    assert!(matches!(error, DecisionError::Processing(_)));
}

#[test]
fn same_record_decides_identically() {
    let service = ready_service(forest_classifier());
    let application = sample_application();
    let first = service.decide(&application).expect("first run");
    let second = service.decide(&application).expect("second run");
    assert_eq!(first, second);
}

#[test]
fn metadata_is_carried_for_startup_logging() {
    let classifier = ClassifierArtifact {
        metadata: ArtifactMetadata {
            trained_at: None,
            pipeline_version: Some("2026.03".to_string()),
        },
        ..forest_classifier()
    };
    let width = expected_columns().len();
    let context = ModelContext::new(classifier, identity_scaler(width));
    assert_eq!(
        context.metadata().pipeline_version.as_deref(),
        Some("2026.03")
    );
}
