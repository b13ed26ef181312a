use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Read;
use std::path::Path;

/// Provenance block the training pipeline writes next to the fitted
/// estimator. Informational only; logged at load time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtifactMetadata {
    #[serde(default)]
    pub trained_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub pipeline_version: Option<String>,
}

/// Serialized classifier exported by the training pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierArtifact {
    /// Raw labels in the order the estimator indexes its classes.
    pub classes: Vec<String>,
    /// Ordered training columns. Absent when the export predates schema
    /// capture; schema alignment is impossible without it.
    #[serde(default)]
    pub feature_names: Option<Vec<String>>,
    pub model: EstimatorParams,
    #[serde(default)]
    pub metadata: ArtifactMetadata,
}

/// Supported estimator families.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EstimatorParams {
    /// Vote-averaging tree ensemble; supports class probabilities.
    Forest { trees: Vec<DecisionTree> },
    /// Sign-of-margin linear classifier; no probability estimates.
    LinearMargin { weights: Vec<f64>, bias: f64 },
}

/// One fitted tree, nodes stored in an arena indexed from the root at 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        /// Training sample counts per class, indexed like `classes`.
        votes: Vec<f64>,
    },
}

/// Serialized standard scaler companion to the classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalerArtifact {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl ClassifierArtifact {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ArtifactError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ArtifactError> {
        Ok(serde_json::from_reader(reader)?)
    }
}

impl ScalerArtifact {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ArtifactError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ArtifactError> {
        Ok(serde_json::from_reader(reader)?)
    }
}

#[derive(Debug)]
pub enum ArtifactError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for ArtifactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactError::Io(err) => write!(f, "failed to read model artifact: {}", err),
            ArtifactError::Json(err) => write!(f, "invalid model artifact data: {}", err),
        }
    }
}

impl std::error::Error for ArtifactError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArtifactError::Io(err) => Some(err),
            ArtifactError::Json(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ArtifactError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ArtifactError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}
