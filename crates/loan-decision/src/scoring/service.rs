use std::sync::Arc;

use tracing::debug;

use super::domain::{Confidence, LoanApplication, LoanDecision};
use super::features;
use super::model::{normalize_label, ModelContext, PredictionError};

/// Outcome of the startup artifact load. The service stays reachable either
/// way; an unavailable model fails every prediction fast with the retained
/// reason.
#[derive(Debug, Clone)]
pub enum ModelAvailability {
    Ready(Arc<ModelContext>),
    Unavailable { reason: String },
}

/// Orchestrates one prediction end-to-end and acts as the error boundary
/// for the whole transform/classify pipeline.
pub struct DecisionService {
    model: ModelAvailability,
}

/// Static rationale shown with every decision. Explanatory boilerplate, not
/// derived from feature importances.
const RATIONALE_NOTES: [&str; 3] = [
    "Debt-to-income ratio computed from declared income and expenses.",
    "Applicant profile evaluated against the trained credit model.",
    "Decision derived from training-time approval thresholds.",
];

impl DecisionService {
    pub fn new(model: ModelAvailability) -> Self {
        Self { model }
    }

    pub fn ready(&self) -> bool {
        matches!(self.model, ModelAvailability::Ready(_))
    }

    /// Score one application.
    ///
    /// Every pipeline failure is caught here and wrapped into a
    /// [`DecisionError`]; nothing below this boundary reaches the transport
    /// layer as an unhandled fault.
    pub fn decide(&self, application: &LoanApplication) -> Result<LoanDecision, DecisionError> {
        let context = match &self.model {
            ModelAvailability::Ready(context) => context,
            ModelAvailability::Unavailable { reason } => {
                return Err(DecisionError::Unavailable(reason.clone()))
            }
        };

        let frame = features::feature_frame(application);
        let expected = context.expected_columns().map_err(DecisionError::wrap)?;
        let aligned = frame.align(expected);
        let scaled = context.scale(&aligned).map_err(DecisionError::wrap)?;

        let raw_label = context.classify(&scaled).map_err(DecisionError::wrap)?;
        let status = normalize_label(raw_label);
        let confidence = match context.confidence(&scaled).map_err(DecisionError::wrap)? {
            Some(probability) => Confidence::Score(probability),
            None => Confidence::NotAvailable,
        };

        debug!(
            raw_label,
            status = status.label(),
            columns = aligned.len(),
            "application scored"
        );

        Ok(LoanDecision {
            status,
            confidence,
            reasons: RATIONALE_NOTES.iter().map(|note| note.to_string()).collect(),
        })
    }
}

/// Error raised by the decision service.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DecisionError {
    /// Model artifacts failed to load at startup; not a request defect.
    #[error("prediction models are not loaded: {0}")]
    Unavailable(String),
    /// The classifier artifact carries no training schema; alignment is
    /// impossible and retrying cannot help.
    #[error("classifier artifact does not record its training feature schema")]
    MissingSchema,
    /// Anything else that failed while transforming or classifying.
    #[error("error processing prediction: {0}")]
    Processing(String),
}

impl DecisionError {
    fn wrap(err: PredictionError) -> Self {
        match err {
            PredictionError::MissingFeatureNames => Self::MissingSchema,
            other => Self::Processing(other.to_string()),
        }
    }
}
