use crate::types::scoring::{Score, Thresholds};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SustainabilityLabel {
    #[serde(rename = "Eco-Friendly")]
    EcoFriendly,
    #[serde(rename = "Moderately Sustainable")]
    ModeratelySustainable,
    #[serde(rename = "Not Sustainable")]
    NotSustainable,
}

impl SustainabilityLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EcoFriendly => "Eco-Friendly",
            Self::ModeratelySustainable => "Moderately Sustainable",
            Self::NotSustainable => "Not Sustainable",
        }
    }
}

impl fmt::Display for SustainabilityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn classify(score: Score, thresholds: &Thresholds) -> SustainabilityLabel {
    if score >= thresholds.eco_friendly {
        SustainabilityLabel::EcoFriendly
    } else if score >= thresholds.moderate {
        SustainabilityLabel::ModeratelySustainable
    } else {
        SustainabilityLabel::NotSustainable
    }
}
