use loan_decision::config::ArtifactConfig;
use loan_decision::scoring::{
    ArtifactMetadata, ClassifierArtifact, DecisionTree, EstimatorParams, LoanApplication,
    ModelAvailability, ModelContext, ScalerArtifact, TreeNode,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Load the artifact pair, degrading to an unavailable model (with the
/// retained reason) instead of refusing to start.
pub(crate) fn load_model_availability(config: &ArtifactConfig) -> ModelAvailability {
    match ModelContext::load(&config.classifier_path, &config.scaler_path) {
        Ok(context) => {
            let trained_at = context
                .metadata()
                .trained_at
                .map(|stamp| stamp.to_rfc3339());
            info!(
                trained_at = trained_at.as_deref(),
                pipeline_version = context.metadata().pipeline_version.as_deref(),
                "model artifacts loaded"
            );
            ModelAvailability::Ready(Arc::new(context))
        }
        Err(err) => {
            warn!(
                error = %err,
                classifier = %config.classifier_path.display(),
                scaler = %config.scaler_path.display(),
                "model artifacts unavailable; predictions will be rejected"
            );
            ModelAvailability::Unavailable {
                reason: err.to_string(),
            }
        }
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

/// Columns of the bundled demo model, a plausible slice of the training
/// schema the real export carries.
fn demo_columns() -> Vec<String> {
    [
        "Age",
        "Dependents",
        "Annual_Income",
        "Monthly_Expenses",
        "Credit_Score",
        "Existing_Loans",
        "Outstanding_Debt",
        "Loan_Amount_Requested",
        "Loan_Term",
        "Interest_Rate",
        "DTI_Ratio",
        "Gender",
        "Marital_Status",
        "Education",
        "Loan_Type",
        "Co-Applicant",
        "Employment_Status_Salaried",
        "Employment_Status_Self-Employed",
        "Occupation_Type_Engineer",
        "Residential_Status_Owned",
        "City/Town_Mumbai",
        "Loan_Purpose_Home",
    ]
    .iter()
    .map(|column| column.to_string())
    .collect()
}

/// In-code artifact pair for the `demo` subcommand, so the walkthrough
/// never touches the filesystem.
pub(crate) fn bundled_model_context() -> ModelContext {
    let columns = demo_columns();
    let mut mean = vec![0.0; columns.len()];
    let mut scale = vec![1.0; columns.len()];
    // Credit_Score (index 4), DTI_Ratio (index 10), Annual_Income (index 2)
    // carry realistic centers; indicators stay unscaled.
    mean[4] = 650.0;
    scale[4] = 100.0;
    mean[10] = 0.35;
    scale[10] = 0.2;
    mean[2] = 600000.0;
    scale[2] = 300000.0;

    let classifier = ClassifierArtifact {
        classes: vec!["0".to_string(), "1".to_string()],
        feature_names: Some(columns),
        model: EstimatorParams::Forest {
            trees: vec![
                // Scaled credit score at the 650 center, then scaled DTI.
                DecisionTree {
                    nodes: vec![
                        TreeNode::Split {
                            feature: 4,
                            threshold: 0.0,
                            left: 1,
                            right: 2,
                        },
                        TreeNode::Leaf {
                            votes: vec![7.0, 3.0],
                        },
                        TreeNode::Split {
                            feature: 10,
                            threshold: 0.25,
                            left: 3,
                            right: 4,
                        },
                        TreeNode::Leaf {
                            votes: vec![1.0, 9.0],
                        },
                        TreeNode::Leaf {
                            votes: vec![6.0, 4.0],
                        },
                    ],
                },
                stump(2, 0.0, [5.5, 4.5], [2.0, 8.0]),
            ],
        },
        metadata: ArtifactMetadata {
            trained_at: None,
            pipeline_version: Some("bundled-demo".to_string()),
        },
    };

    ModelContext::new(classifier, ScalerArtifact { mean, scale })
}

pub(crate) fn sample_application() -> LoanApplication {
    LoanApplication {
        applicant_id: "DEMO-0001".to_string(),
        gender: "Female".to_string(),
        age: 37,
        marital_status: "Married".to_string(),
        dependents: 1,
        education: "Graduate".to_string(),
        city_town: "Mumbai".to_string(),
        residential_status: "Owned".to_string(),
        employment_status: "Salaried".to_string(),
        occupation_type: "Engineer".to_string(),
        annual_income: 960000,
        monthly_expenses: 20000,
        credit_score: 742,
        existing_loans: 1,
        total_existing_loan_amount: 220000,
        outstanding_debt: 90000,
        loan_history: "Good".to_string(),
        loan_amount_requested: 450000,
        loan_term: 60,
        loan_purpose: "Home".to_string(),
        interest_rate: 8.4,
        loan_type: "Secured".to_string(),
        co_applicant: "Yes".to_string(),
        bank_account_history: "Stable".to_string(),
        transaction_frequency: "High".to_string(),
        default_risk: "Low".to_string(),
    }
}
