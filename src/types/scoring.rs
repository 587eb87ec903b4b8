use serde::Serialize;

pub type Score = f64;

/// Per-metric weights of the eco score. Defaults sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Weights {
    pub recyclability: Score,
    pub biodegradability: Score,
    pub carbon: Score,
    pub lifespan: Score,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            recyclability: 0.35,
            biodegradability: 0.20,
            carbon: 0.30,
            lifespan: 0.15,
        }
    }
}

impl Weights {
    pub const KEYS: [&'static str; 4] = ["recyclability", "biodegradability", "carbon", "lifespan"];

    pub fn as_array(&self) -> [Score; 4] {
        [
            self.recyclability,
            self.biodegradability,
            self.carbon,
            self.lifespan,
        ]
    }

    pub fn sum(&self) -> Score {
        self.as_array().iter().sum()
    }
}

/// Lower bounds of the rule-based label tiers. Each bound belongs to the higher tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Thresholds {
    pub eco_friendly: Score,
    pub moderate: Score,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            eco_friendly: 0.65,
            moderate: 0.40,
        }
    }
}
