pub mod loader;
pub mod ranking;

use crate::scoring::{compute_eco_score, max_life};
use crate::types::product::{EcoMetrics, Product, ScoredProduct};
use crate::types::scoring::{Score, Weights};
use std::collections::BTreeSet;

/// Immutable, fully scored product table. Built once at startup and shared by reference.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<ScoredProduct>,
    max_life: f64,
    weights: Weights,
    fingerprint: Option<String>,
}

impl Catalog {
    pub fn new(products: Vec<Product>, weights: Weights) -> Self {
        let max_life = max_life(products.iter().map(|product| product.lifespan_years));
        let products = products
            .into_iter()
            .enumerate()
            .map(|(id, product)| {
                let eco_score = compute_eco_score(&product.metrics(), max_life, &weights);
                ScoredProduct {
                    id,
                    product,
                    eco_score,
                }
            })
            .collect();

        Self {
            products,
            max_life,
            weights,
            fingerprint: None,
        }
    }

    pub fn with_fingerprint(mut self, fingerprint: String) -> Self {
        self.fingerprint = Some(fingerprint);
        self
    }

    pub fn fingerprint(&self) -> Option<&str> {
        self.fingerprint.as_deref()
    }

    pub fn max_life(&self) -> f64 {
        self.max_life
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    pub fn products(&self) -> &[ScoredProduct] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Scores metrics that are not part of the table against this catalog's `max_life`.
    pub fn score(&self, metrics: &EcoMetrics) -> Score {
        compute_eco_score(metrics, self.max_life, &self.weights)
    }

    /// Distinct category names as written in the data, sorted.
    pub fn categories(&self) -> Vec<String> {
        self.products
            .iter()
            .map(|scored| scored.product.category.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn product(&self, id: usize) -> Option<&ScoredProduct> {
        self.products.get(id)
    }

    /// First row of `material` within `category`. Category matches ignoring case, material exactly.
    pub fn find_product(&self, category: &str, material: &str) -> Option<&ScoredProduct> {
        self.products.iter().find(|scored| {
            same_category(&scored.product.category, category) && scored.product.material == material
        })
    }
}

pub(crate) fn same_category(left: &str, right: &str) -> bool {
    left.to_lowercase() == right.to_lowercase()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::types::product::Product;

    pub fn product(category: &str, material: &str, metrics: [f64; 4]) -> Product {
        Product {
            category: category.to_string(),
            material: material.to_string(),
            recyclability_pct: metrics[0],
            carbon_kgco2: metrics[1],
            biodegradability_pct: metrics[2],
            lifespan_years: metrics[3],
            label: None,
            variant: None,
            image_url: None,
            product_link: None,
        }
    }

    /// Small table shaped like the production dataset.
    pub fn sample_products() -> Vec<Product> {
        vec![
            product("Water Bottle", "Plastic", [20.0, 150.0, 5.0, 3.0]),
            product("Water Bottle", "Bamboo", [98.0, 10.0, 90.0, 5.0]),
            product("Water Bottle", "Glass", [95.0, 15.0, 20.0, 7.0]),
            product("Water Bottle", "Bamboo", [96.0, 12.0, 88.0, 5.5]),
            product("Toothbrush", "Plastic", [10.0, 80.0, 2.0, 1.0]),
            product("Toothbrush", "Bamboo", [95.0, 10.0, 95.0, 1.0]),
            product("Kitchen Item", "Steel", [90.0, 25.0, 20.0, 20.0]),
        ]
    }
}
