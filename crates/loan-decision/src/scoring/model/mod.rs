//! The model adapter: a read-only pairing of the fitted classifier and its
//! companion scaler, loaded once at startup and shared across requests.

mod artifact;
mod label;

pub use artifact::{
    ArtifactError, ArtifactMetadata, ClassifierArtifact, DecisionTree, EstimatorParams,
    ScalerArtifact, TreeNode,
};
pub use label::normalize_label;

use std::path::Path;

/// Immutable prediction unit. Nothing mutates the artifacts after load, so
/// concurrent requests share a context without coordination.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelContext {
    classifier: ClassifierArtifact,
    scaler: ScalerArtifact,
}

impl ModelContext {
    pub fn new(classifier: ClassifierArtifact, scaler: ScalerArtifact) -> Self {
        Self { classifier, scaler }
    }

    pub fn load<P: AsRef<Path>>(classifier_path: P, scaler_path: P) -> Result<Self, ArtifactError> {
        let classifier = ClassifierArtifact::from_path(classifier_path)?;
        let scaler = ScalerArtifact::from_path(scaler_path)?;
        Ok(Self::new(classifier, scaler))
    }

    pub fn metadata(&self) -> &ArtifactMetadata {
        &self.classifier.metadata
    }

    /// The ordered training columns the aligned vector must match. Absence
    /// is a structural defect of the artifact, not a data problem.
    pub fn expected_columns(&self) -> Result<&[String], PredictionError> {
        self.classifier
            .feature_names
            .as_deref()
            .ok_or(PredictionError::MissingFeatureNames)
    }

    /// Standard-scale an aligned vector: `(x - mean) / scale` per column.
    pub fn scale(&self, aligned: &[f64]) -> Result<Vec<f64>, PredictionError> {
        if self.scaler.mean.len() != self.scaler.scale.len() {
            return Err(PredictionError::MalformedEstimator(
                "scaler mean and scale lengths differ",
            ));
        }
        if aligned.len() != self.scaler.mean.len() {
            return Err(PredictionError::ScalerShape {
                expected: self.scaler.mean.len(),
                actual: aligned.len(),
            });
        }

        Ok(aligned
            .iter()
            .zip(self.scaler.mean.iter().zip(&self.scaler.scale))
            .map(|(value, (mean, scale))| {
                // Zero-variance columns are exported with unit scale; guard anyway.
                let divisor = if *scale == 0.0 { 1.0 } else { *scale };
                (value - mean) / divisor
            })
            .collect())
    }

    /// Raw predicted label for a scaled vector, drawn from `classes`.
    pub fn classify(&self, scaled: &[f64]) -> Result<&str, PredictionError> {
        let index = match &self.classifier.model {
            EstimatorParams::Forest { trees } => {
                let probabilities = self.forest_probabilities(trees, scaled)?;
                argmax(&probabilities)
            }
            EstimatorParams::LinearMargin { weights, bias } => {
                if self.classifier.classes.len() < 2 {
                    return Err(PredictionError::MalformedEstimator(
                        "margin classifier needs two classes",
                    ));
                }
                if margin(weights, *bias, scaled)? >= 0.0 {
                    1
                } else {
                    0
                }
            }
        };

        self.classifier
            .classes
            .get(index)
            .map(String::as_str)
            .ok_or(PredictionError::MalformedEstimator(
                "predicted class index outside the class list",
            ))
    }

    /// Maximum class probability, for estimators that estimate one.
    /// `None` means the estimator has no probability support.
    pub fn confidence(&self, scaled: &[f64]) -> Result<Option<f64>, PredictionError> {
        match &self.classifier.model {
            EstimatorParams::Forest { trees } => {
                let probabilities = self.forest_probabilities(trees, scaled)?;
                Ok(probabilities.iter().copied().reduce(f64::max))
            }
            EstimatorParams::LinearMargin { .. } => Ok(None),
        }
    }

    /// Mean of per-tree class distributions, indexed like `classes`.
    fn forest_probabilities(
        &self,
        trees: &[DecisionTree],
        scaled: &[f64],
    ) -> Result<Vec<f64>, PredictionError> {
        if trees.is_empty() {
            return Err(PredictionError::MalformedEstimator("forest has no trees"));
        }

        let class_count = self.classifier.classes.len();
        let mut accumulated = vec![0.0; class_count];
        for tree in trees {
            let distribution = leaf_distribution(tree, scaled, class_count)?;
            for (slot, probability) in accumulated.iter_mut().zip(distribution) {
                *slot += probability;
            }
        }

        for slot in &mut accumulated {
            *slot /= trees.len() as f64;
        }
        Ok(accumulated)
    }
}

/// Walk one tree to its leaf and return the normalized vote distribution.
fn leaf_distribution(
    tree: &DecisionTree,
    scaled: &[f64],
    class_count: usize,
) -> Result<Vec<f64>, PredictionError> {
    let mut index = 0;
    // Any walk longer than the node count revisited a node.
    for _ in 0..=tree.nodes.len() {
        let node = tree
            .nodes
            .get(index)
            .ok_or(PredictionError::MalformedEstimator(
                "tree node index outside the arena",
            ))?;

        match node {
            TreeNode::Leaf { votes } => {
                if votes.len() != class_count {
                    return Err(PredictionError::MalformedEstimator(
                        "leaf vote count does not match the class list",
                    ));
                }
                let total: f64 = votes.iter().sum();
                if total <= 0.0 {
                    return Err(PredictionError::MalformedEstimator("leaf carries no votes"));
                }
                return Ok(votes.iter().map(|count| count / total).collect());
            }
            TreeNode::Split {
                feature,
                threshold,
                left,
                right,
            } => {
                let value =
                    scaled
                        .get(*feature)
                        .copied()
                        .ok_or(PredictionError::FeatureShape {
                            expected: *feature + 1,
                            actual: scaled.len(),
                        })?;
                index = if value <= *threshold { *left } else { *right };
            }
        }
    }

    Err(PredictionError::MalformedEstimator(
        "tree walk did not reach a leaf",
    ))
}

fn margin(weights: &[f64], bias: f64, scaled: &[f64]) -> Result<f64, PredictionError> {
    if weights.len() != scaled.len() {
        return Err(PredictionError::FeatureShape {
            expected: weights.len(),
            actual: scaled.len(),
        });
    }
    let dot: f64 = weights
        .iter()
        .zip(scaled)
        .map(|(weight, value)| weight * value)
        .sum();
    Ok(dot + bias)
}

fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (index, value) in values.iter().enumerate() {
        if *value > values[best] {
            best = index;
        }
    }
    best
}

/// Error raised while evaluating the estimator against a feature vector.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PredictionError {
    #[error("classifier artifact does not record its training feature schema")]
    MissingFeatureNames,
    #[error("aligned vector length {actual} does not match scaler length {expected}")]
    ScalerShape { expected: usize, actual: usize },
    #[error("feature vector length {actual} is short of the estimator's {expected}")]
    FeatureShape { expected: usize, actual: usize },
    #[error("malformed estimator data: {0}")]
    MalformedEstimator(&'static str),
}
