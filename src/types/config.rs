use crate::error::EcoRankError;
use crate::types::scoring::{Thresholds, Weights};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EcoConfig {
    pub dataset: Option<DatasetConfig>,
    pub scoring: Option<ScoringConfig>,
    pub classify: Option<ClassifyConfig>,
    pub classifier: Option<ClassifierConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    pub path: Option<String>,
    #[serde(default)]
    pub on_invalid: InvalidRowPolicy,
}

/// What the loader does with rows whose metrics fall outside their documented range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidRowPolicy {
    #[default]
    Warn,
    Skip,
    Reject,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    pub weights: Option<HashMap<String, f64>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClassifyConfig {
    pub eco_friendly: Option<f64>,
    pub moderate: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierConfig {
    pub model_path: Option<String>,
}

impl EcoConfig {
    pub fn weights(&self) -> Weights {
        let defaults = Weights::default();
        match self
            .scoring
            .as_ref()
            .and_then(|scoring| scoring.weights.as_ref())
        {
            Some(weights) => Weights {
                recyclability: *weights
                    .get("recyclability")
                    .unwrap_or(&defaults.recyclability),
                biodegradability: *weights
                    .get("biodegradability")
                    .unwrap_or(&defaults.biodegradability),
                carbon: *weights.get("carbon").unwrap_or(&defaults.carbon),
                lifespan: *weights.get("lifespan").unwrap_or(&defaults.lifespan),
            },
            None => defaults,
        }
    }

    pub fn thresholds(&self) -> Thresholds {
        let defaults = Thresholds::default();
        match &self.classify {
            Some(classify) => Thresholds {
                eco_friendly: classify.eco_friendly.unwrap_or(defaults.eco_friendly),
                moderate: classify.moderate.unwrap_or(defaults.moderate),
            },
            None => defaults,
        }
    }

    pub fn invalid_row_policy(&self) -> InvalidRowPolicy {
        self.dataset
            .as_ref()
            .map(|dataset| dataset.on_invalid)
            .unwrap_or_default()
    }

    /// Dataset path from config, resolved against the directory the config was loaded from.
    pub fn dataset_path(&self, root: &Path) -> Option<PathBuf> {
        self.dataset
            .as_ref()
            .and_then(|dataset| dataset.path.as_ref())
            .map(|path| root.join(path))
    }

    pub fn model_path(&self, root: &Path) -> Option<PathBuf> {
        self.classifier
            .as_ref()
            .and_then(|classifier| classifier.model_path.as_ref())
            .map(|path| root.join(path))
    }

    pub fn validate(&self) -> Result<(), EcoRankError> {
        if let Some(weights) = self
            .scoring
            .as_ref()
            .and_then(|scoring| scoring.weights.as_ref())
        {
            let unknown = weights
                .keys()
                .filter(|key| !Weights::KEYS.contains(&key.as_str()))
                .cloned()
                .collect::<Vec<_>>();
            if !unknown.is_empty() {
                return Err(EcoRankError::ConfigParse(format!(
                    "scoring.weights contains unknown key(s): {}",
                    unknown.join(", ")
                )));
            }
        }

        let weights = self.weights();
        if weights
            .as_array()
            .iter()
            .any(|weight| !(0.0..=1.0).contains(weight))
        {
            return Err(EcoRankError::ConfigParse(
                "scoring.weights values must be between 0.0 and 1.0".to_string(),
            ));
        }
        let weight_sum = weights.sum();
        if (weight_sum - 1.0).abs() > 0.001 {
            return Err(EcoRankError::ConfigParse(format!(
                "scoring.weights must sum to 1.0 (found {:.3})",
                weight_sum
            )));
        }

        let thresholds = self.thresholds();
        for (name, value) in [
            ("eco_friendly", thresholds.eco_friendly),
            ("moderate", thresholds.moderate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(EcoRankError::ConfigParse(format!(
                    "classify.{name} must be between 0.0 and 1.0"
                )));
            }
        }
        if thresholds.moderate > thresholds.eco_friendly {
            return Err(EcoRankError::ConfigParse(
                "classify.moderate cannot exceed classify.eco_friendly".to_string(),
            ));
        }

        if let Some(path) = self
            .dataset
            .as_ref()
            .and_then(|dataset| dataset.path.as_ref())
        {
            if path.trim().is_empty() {
                return Err(EcoRankError::ConfigParse(
                    "dataset.path cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}
