use crate::types::scoring::Score;
use serde::{Deserialize, Serialize};

/// One catalog row as stored in the dataset CSV.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Product {
    #[serde(rename(deserialize = "Category"))]
    pub category: String,
    #[serde(rename(deserialize = "Material"))]
    pub material: String,
    #[serde(rename(deserialize = "Recyclability_pct"))]
    pub recyclability_pct: f64,
    #[serde(rename(deserialize = "Carbon_kgCO2"))]
    pub carbon_kgco2: f64,
    #[serde(rename(deserialize = "Biodegradability"))]
    pub biodegradability_pct: f64,
    #[serde(rename(deserialize = "Lifespan_years"))]
    pub lifespan_years: f64,
    #[serde(rename(deserialize = "Label"), default)]
    pub label: Option<String>,
    #[serde(rename(deserialize = "Variant"), default)]
    pub variant: Option<String>,
    #[serde(rename(deserialize = "Image_URL"), default)]
    pub image_url: Option<String>,
    #[serde(rename(deserialize = "Product_Link"), default)]
    pub product_link: Option<String>,
}

impl Product {
    pub fn metrics(&self) -> EcoMetrics {
        EcoMetrics {
            recyclability_pct: self.recyclability_pct,
            carbon_kgco2: self.carbon_kgco2,
            biodegradability_pct: self.biodegradability_pct,
            lifespan_years: self.lifespan_years,
        }
    }
}

/// The four raw sustainability metrics, in classifier feature order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EcoMetrics {
    pub recyclability_pct: f64,
    pub carbon_kgco2: f64,
    pub biodegradability_pct: f64,
    pub lifespan_years: f64,
}

impl EcoMetrics {
    pub fn as_features(&self) -> [f64; 4] {
        [
            self.recyclability_pct,
            self.carbon_kgco2,
            self.biodegradability_pct,
            self.lifespan_years,
        ]
    }

    /// Describes the first value outside its documented range, if any.
    pub fn range_violation(&self) -> Option<String> {
        let checks = [
            ("recyclability_pct", self.recyclability_pct, 100.0),
            ("carbon_kgco2", self.carbon_kgco2, f64::INFINITY),
            ("biodegradability_pct", self.biodegradability_pct, 100.0),
            ("lifespan_years", self.lifespan_years, f64::INFINITY),
        ];
        checks.iter().find_map(|(name, value, max)| {
            if !value.is_finite() {
                Some(format!("{name} is not a finite number"))
            } else if *value < 0.0 || value > max {
                Some(format!("{name} = {value} is out of range"))
            } else {
                None
            }
        })
    }
}

/// A catalog row with its stable id and cached eco score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredProduct {
    pub id: usize,
    #[serde(flatten)]
    pub product: Product,
    pub eco_score: Score,
}
