//! Decision tree exported by the offline training script.
//!
//! The model file is JSON with a `features` list and a recursive `root` node.
//! Splits follow the CART convention: a sample goes left when its feature
//! value is `<=` the threshold.

use crate::error::{EcoRankError, Result};
use crate::types::product::EcoMetrics;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const FEATURE_NAMES: [&str; 4] = [
    "recyclability_pct",
    "carbon_kgco2",
    "biodegradability_pct",
    "lifespan_years",
];

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
    Leaf {
        label: String,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DecisionTree {
    #[serde(default = "default_features")]
    pub features: Vec<String>,
    pub root: TreeNode,
}

fn default_features() -> Vec<String> {
    FEATURE_NAMES.iter().map(|name| name.to_string()).collect()
}

impl DecisionTree {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let tree: DecisionTree = serde_json::from_str(content)?;
        tree.validate()?;
        Ok(tree)
    }

    pub fn validate(&self) -> Result<()> {
        if self.features != FEATURE_NAMES {
            return Err(EcoRankError::Model(format!(
                "features must be [{}] (found [{}])",
                FEATURE_NAMES.join(", "),
                self.features.join(", ")
            )));
        }

        let mut pending = vec![&self.root];
        while let Some(node) = pending.pop() {
            match node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if *feature >= FEATURE_NAMES.len() {
                        return Err(EcoRankError::Model(format!(
                            "split feature index {feature} out of range"
                        )));
                    }
                    if !threshold.is_finite() {
                        return Err(EcoRankError::Model(
                            "split threshold must be finite".to_string(),
                        ));
                    }
                    pending.push(left.as_ref());
                    pending.push(right.as_ref());
                }
                TreeNode::Leaf { label } => {
                    if label.trim().is_empty() {
                        return Err(EcoRankError::Model("leaf label cannot be empty".to_string()));
                    }
                }
            }
        }
        Ok(())
    }

    pub fn predict(&self, metrics: &EcoMetrics) -> &str {
        let features = metrics.as_features();
        let mut node = &self.root;
        loop {
            match node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if features[*feature] <= *threshold {
                        left.as_ref()
                    } else {
                        right.as_ref()
                    };
                }
                TreeNode::Leaf { label } => return label,
            }
        }
    }

    pub fn depth(&self) -> usize {
        fn depth_of(node: &TreeNode) -> usize {
            match node {
                TreeNode::Split { left, right, .. } => 1 + depth_of(left).max(depth_of(right)),
                TreeNode::Leaf { .. } => 0,
            }
        }
        depth_of(&self.root)
    }
}
