//! Loan application scoring: feature engineering, model artifacts, and the
//! decision service orchestrating one prediction end-to-end.

pub mod domain;
pub mod features;
pub mod model;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{Confidence, DecisionStatus, LoanApplication, LoanDecision};
pub use features::{feature_frame, FeatureFrame};
pub use model::{
    ArtifactError, ArtifactMetadata, ClassifierArtifact, DecisionTree, EstimatorParams,
    ModelContext, PredictionError, ScalerArtifact, TreeNode,
};
pub use router::decision_router;
pub use service::{DecisionError, DecisionService, ModelAvailability};
