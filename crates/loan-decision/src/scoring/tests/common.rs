use std::sync::Arc;

use serde_json::Value;

use crate::scoring::domain::LoanApplication;
use crate::scoring::model::{
    ArtifactMetadata, ClassifierArtifact, DecisionTree, EstimatorParams, ModelContext,
    ScalerArtifact, TreeNode,
};
use crate::scoring::service::{DecisionService, ModelAvailability};

/// Training columns used by the test model. Deliberately a subset of what
/// the transform emits so alignment has columns to drop, plus one indicator
/// the sample application never produces so alignment has a column to fill.
pub(super) fn expected_columns() -> Vec<String> {
    [
        "Annual_Income",
        "Monthly_Expenses",
        "Credit_Score",
        "DTI_Ratio",
        "Gender",
        "Marital_Status",
        "Education",
        "Loan_Type",
        "Co-Applicant",
        "Employment_Status_Salaried",
        "Employment_Status_Unemployed",
        "Loan_Purpose_Home",
    ]
    .iter()
    .map(|column| column.to_string())
    .collect()
}

/// Identity scaler so scaled vectors equal aligned vectors in assertions.
pub(super) fn identity_scaler(width: usize) -> ScalerArtifact {
    ScalerArtifact {
        mean: vec![0.0; width],
        scale: vec![1.0; width],
    }
}

fn stump(feature: usize, threshold: f64, left: [f64; 2], right: [f64; 2]) -> DecisionTree {
    DecisionTree {
        nodes: vec![
            TreeNode::Split {
                feature,
                threshold,
                left: 1,
                right: 2,
            },
            TreeNode::Leaf {
                votes: left.to_vec(),
            },
            TreeNode::Leaf {
                votes: right.to_vec(),
            },
        ],
    }
}

/// Two-stump forest over the `Credit_Score` column (index 2): scores above
/// 650 approve with high confidence.
pub(super) fn forest_classifier() -> ClassifierArtifact {
    ClassifierArtifact {
        classes: vec!["0".to_string(), "1".to_string()],
        feature_names: Some(expected_columns()),
        model: EstimatorParams::Forest {
            trees: vec![
                stump(2, 650.0, [9.0, 1.0], [1.0, 9.0]),
                stump(2, 650.0, [8.0, 2.0], [2.0, 8.0]),
            ],
        },
        metadata: ArtifactMetadata::default(),
    }
}

/// Margin classifier over `Credit_Score` alone; no probability support.
pub(super) fn margin_classifier() -> ClassifierArtifact {
    let mut weights = vec![0.0; expected_columns().len()];
    weights[2] = 1.0;
    ClassifierArtifact {
        classes: vec!["0".to_string(), "1".to_string()],
        feature_names: Some(expected_columns()),
        model: EstimatorParams::LinearMargin {
            weights,
            bias: -650.0,
        },
        metadata: ArtifactMetadata::default(),
    }
}

pub(super) fn ready_service(classifier: ClassifierArtifact) -> DecisionService {
    let width = classifier
        .feature_names
        .as_ref()
        .map(Vec::len)
        .unwrap_or_else(|| expected_columns().len());
    let context = ModelContext::new(classifier, identity_scaler(width));
    DecisionService::new(ModelAvailability::Ready(Arc::new(context)))
}

pub(super) fn unavailable_service() -> DecisionService {
    DecisionService::new(ModelAvailability::Unavailable {
        reason: "classifier.json missing".to_string(),
    })
}

pub(super) fn sample_application() -> LoanApplication {
    LoanApplication {
        applicant_id: "APP-000042".to_string(),
        gender: "Male".to_string(),
        age: 41,
        marital_status: "Married".to_string(),
        dependents: 2,
        education: "Graduate".to_string(),
        city_town: "Mumbai".to_string(),
        residential_status: "Owned".to_string(),
        employment_status: "Salaried".to_string(),
        occupation_type: "Engineer".to_string(),
        annual_income: 600000,
        monthly_expenses: 20000,
        credit_score: 742,
        existing_loans: 1,
        total_existing_loan_amount: 180000,
        outstanding_debt: 60000,
        loan_history: "Good".to_string(),
        loan_amount_requested: 300000,
        loan_term: 48,
        loan_purpose: "Home".to_string(),
        interest_rate: 8.9,
        loan_type: "Secured".to_string(),
        co_applicant: "No".to_string(),
        bank_account_history: "Stable".to_string(),
        transaction_frequency: "Medium".to_string(),
        default_risk: "Low".to_string(),
    }
}

pub(super) async fn read_json_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body is readable");
    serde_json::from_slice(&bytes).expect("body is json")
}
