use super::{same_category, Catalog};
use crate::types::scoring::Score;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialRank {
    pub material: String,
    pub mean_score: Score,
    pub products: usize,
}

/// Where a material sits in its category's ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialWalk {
    pub best: String,
    /// 0-based position of the current material.
    pub position: usize,
    pub total: usize,
    pub next_worse: Option<String>,
}

impl MaterialWalk {
    pub fn is_best(&self) -> bool {
        self.position == 0
    }
}

impl Catalog {
    /// Materials of `category` by descending mean eco score; ties in alphabetical order.
    pub fn ranking(&self, category: &str) -> Vec<MaterialRank> {
        let mut groups: BTreeMap<&str, MeanAccumulator> = BTreeMap::new();
        for scored in self
            .products()
            .iter()
            .filter(|scored| same_category(&scored.product.category, category))
        {
            groups
                .entry(scored.product.material.as_str())
                .or_default()
                .push(scored.eco_score);
        }

        let mut ranked = groups
            .into_iter()
            .map(|(material, acc)| MaterialRank {
                material: material.to_string(),
                mean_score: acc.mean(),
                products: acc.rows,
            })
            .collect::<Vec<_>>();
        // Stable sort keeps the alphabetical BTreeMap order for equal means.
        ranked.sort_by(|left, right| descending_nan_last(left.mean_score, right.mean_score));
        ranked
    }

    pub fn rank_materials(&self, category: &str) -> Vec<String> {
        self.ranking(category)
            .into_iter()
            .map(|rank| rank.material)
            .collect()
    }

    /// Best material of `category` and the next-worse alternative to `current`.
    ///
    /// `None` when the category has no rows or `current` is not one of its materials.
    pub fn best_and_next(&self, category: &str, current: &str) -> Option<MaterialWalk> {
        let materials = self.rank_materials(category);
        let position = materials.iter().position(|material| material == current)?;
        Some(MaterialWalk {
            best: materials[0].clone(),
            position,
            total: materials.len(),
            next_worse: materials.get(position + 1).cloned(),
        })
    }
}

/// Per-material mean that skips NaN scores; NaN only when no row scored.
#[derive(Debug, Default)]
struct MeanAccumulator {
    rows: usize,
    scored: usize,
    total: Score,
}

impl MeanAccumulator {
    fn push(&mut self, score: Score) {
        self.rows += 1;
        if !score.is_nan() {
            self.scored += 1;
            self.total += score;
        }
    }

    fn mean(&self) -> Score {
        if self.scored == 0 {
            return Score::NAN;
        }
        self.total / self.scored as Score
    }
}

fn descending_nan_last(left: Score, right: Score) -> Ordering {
    right
        .partial_cmp(&left)
        .unwrap_or_else(|| left.is_nan().cmp(&right.is_nan()))
}
