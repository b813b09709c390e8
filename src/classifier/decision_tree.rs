use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use snafu::ResultExt;

use super::Classifier;
use crate::errors::{AdvisorError, ModelIOSnafu, ModelParseSnafu};
use crate::readings::{FEATURE_COUNT, FeatureVector};

/// One node of a flattened binary decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeNode {
    /// Go to `left` when `features[feature] <= threshold`, otherwise `right`.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        class: i64,
    },
}

/// A decision tree classifier stored as a flat node array, root at index 0.
///
/// Children always sit at a higher index than their parent, which `validate`
/// enforces, so every traversal terminates in at most `nodes.len()` steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTreeModel {
    pub n_features: usize,
    pub nodes: Vec<TreeNode>,
}

impl DecisionTreeModel {
    pub fn new(nodes: Vec<TreeNode>) -> Result<Self, AdvisorError> {
        let model = Self {
            n_features: FEATURE_COUNT,
            nodes,
        };
        model.validate()?;
        Ok(model)
    }

    pub fn from_json(json: &str, origin: &str) -> Result<Self, AdvisorError> {
        let model: Self = serde_json::from_str(json).context(ModelParseSnafu { path: origin })?;
        model.validate()?;
        Ok(model)
    }

    pub fn from_path(path: &Path) -> Result<Self, AdvisorError> {
        let origin = path.display().to_string();
        let content = fs::read_to_string(path).context(ModelIOSnafu { path: origin.clone() })?;
        Self::from_json(&content, &origin)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn validate(&self) -> Result<(), AdvisorError> {
        if self.n_features != FEATURE_COUNT {
            return Err(AdvisorError::InvalidModel {
                reason: format!(
                    "model expects {} features, advisor provides {}",
                    self.n_features, FEATURE_COUNT
                ),
            });
        }
        if self.nodes.is_empty() {
            return Err(AdvisorError::InvalidModel {
                reason: "tree has no nodes".to_string(),
            });
        }

        for (idx, node) in self.nodes.iter().enumerate() {
            if let TreeNode::Split {
                feature,
                threshold,
                left,
                right,
            } = node
            {
                if *feature >= self.n_features {
                    return Err(AdvisorError::InvalidModel {
                        reason: format!("node {idx} splits on unknown feature {feature}"),
                    });
                }
                if threshold.is_nan() {
                    return Err(AdvisorError::InvalidModel {
                        reason: format!("node {idx} has a NaN threshold"),
                    });
                }
                for child in [*left, *right] {
                    if child <= idx || child >= self.nodes.len() {
                        return Err(AdvisorError::InvalidModel {
                            reason: format!("node {idx} points to invalid child {child}"),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

impl Classifier for DecisionTreeModel {
    fn predict(&self, features: &FeatureVector) -> Result<i64, AdvisorError> {
        let x = features.to_array();
        let mut idx = 0;
        // fields are public, so bound the walk even if nodes changed after validate()
        for _ in 0..self.nodes.len() {
            match self.nodes.get(idx) {
                Some(TreeNode::Leaf { class }) => return Ok(*class),
                Some(TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let value = x.get(*feature).ok_or_else(|| AdvisorError::ModelInvocation {
                        reason: format!("feature {feature} out of range"),
                    })?;
                    idx = if *value <= *threshold { *left } else { *right };
                }
                None => {
                    return Err(AdvisorError::ModelInvocation {
                        reason: format!("node {idx} does not exist"),
                    });
                }
            }
        }
        Err(AdvisorError::ModelInvocation {
            reason: "tree traversal did not reach a leaf".to_string(),
        })
    }
}
