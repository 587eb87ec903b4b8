use crate::catalog::ranking::MaterialRank;
use crate::classify::rules::SustainabilityLabel;
use crate::classify::Prediction;
use crate::types::product::{EcoMetrics, ScoredProduct};
use crate::types::scoring::{Score, Thresholds, Weights};
use serde::Serialize;

/// Everything the CLI can print, one variant per subcommand.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum Page {
    Categories(CategoryListPage),
    Ranking(RankingPage),
    Product(ProductPage),
    Comparison(ComparisonPage),
    Check(CheckPage),
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryListPage {
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankingPage {
    pub category: String,
    pub materials: Vec<MaterialRank>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductPage {
    pub product: ScoredProduct,
    pub prediction: Prediction,
    pub is_best: bool,
    /// 1-based rank of the product's material within its category.
    pub rank: usize,
    pub ranked_materials: usize,
    pub alternative: Option<ScoredProduct>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryBest {
    pub category: String,
    pub product: ScoredProduct,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonPage {
    pub first: CategoryBest,
    pub second: CategoryBest,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckPage {
    pub metrics: EcoMetrics,
    pub max_life: f64,
    pub weights: Weights,
    pub eco_score: Score,
    pub thresholds: Thresholds,
    pub label: SustainabilityLabel,
}
