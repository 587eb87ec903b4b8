pub mod rules;
pub mod tree;

use crate::types::product::ScoredProduct;
use crate::types::scoring::{Score, Thresholds};
use rules::SustainabilityLabel;
use serde::Serialize;
use std::path::Path;
use tracing::{info, warn};
use tree::DecisionTree;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionSource {
    Model,
    Dataset,
    Rules,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub label: String,
    pub source: PredictionSource,
}

/// Rule thresholds plus the optional trained tree.
#[derive(Debug, Clone)]
pub struct Predictor {
    thresholds: Thresholds,
    tree: Option<DecisionTree>,
}

impl Predictor {
    pub fn rules(thresholds: Thresholds) -> Self {
        Self {
            thresholds,
            tree: None,
        }
    }

    pub fn with_tree(thresholds: Thresholds, tree: DecisionTree) -> Self {
        Self {
            thresholds,
            tree: Some(tree),
        }
    }

    /// Loads the tree at `model_path` when given. A missing or broken model is not fatal.
    pub fn load(thresholds: Thresholds, model_path: Option<&Path>) -> Self {
        let Some(path) = model_path else {
            return Self::rules(thresholds);
        };
        if !path.exists() {
            warn!(path = %path.display(), "classifier model not found, using fallback labels");
            return Self::rules(thresholds);
        }
        match DecisionTree::load(path) {
            Ok(tree) => {
                info!(path = %path.display(), depth = tree.depth(), "classifier model loaded");
                Self::with_tree(thresholds, tree)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "classifier model unusable, using fallback labels");
                Self::rules(thresholds)
            }
        }
    }

    pub fn has_model(&self) -> bool {
        self.tree.is_some()
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn classify_score(&self, score: Score) -> SustainabilityLabel {
        rules::classify(score, &self.thresholds)
    }

    /// Model prediction, else the row's dataset label, else the rule tier of its eco score.
    pub fn predict(&self, scored: &ScoredProduct) -> Prediction {
        if let Some(tree) = &self.tree {
            return Prediction {
                label: tree.predict(&scored.product.metrics()).to_string(),
                source: PredictionSource::Model,
            };
        }
        if let Some(label) = scored
            .product
            .label
            .as_ref()
            .filter(|label| !label.trim().is_empty())
        {
            return Prediction {
                label: label.clone(),
                source: PredictionSource::Dataset,
            };
        }
        Prediction {
            label: self.classify_score(scored.eco_score).to_string(),
            source: PredictionSource::Rules,
        }
    }
}
