use crate::scoring::domain::DecisionStatus;

/// Raw labels that normalize to an approval, as the training target was
/// encoded. Tied to that encoding: a model exported under a different
/// positive-class convention flips decisions here without any load-time
/// signal.
const APPROVED_LABELS: [&str; 4] = ["1", "Y", "Yes", "Approved"];

/// Total mapping from any raw classifier label to a canonical outcome.
pub fn normalize_label(raw: &str) -> DecisionStatus {
    if APPROVED_LABELS.contains(&raw.trim()) {
        DecisionStatus::Approved
    } else {
        DecisionStatus::Rejected
    }
}
