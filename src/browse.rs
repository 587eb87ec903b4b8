use crate::catalog::Catalog;
use crate::classify::Predictor;
use crate::error::{EcoRankError, Result};
use crate::types::product::EcoMetrics;
use crate::types::report::{
    CategoryBest, CategoryListPage, CheckPage, ComparisonPage, ProductPage, RankingPage,
};
use tracing::debug;

pub fn category_list(catalog: &Catalog) -> CategoryListPage {
    CategoryListPage {
        categories: catalog.categories(),
    }
}

pub fn ranking(catalog: &Catalog, category: &str) -> Result<RankingPage> {
    let materials = catalog.ranking(category);
    if materials.is_empty() {
        return Err(EcoRankError::CategoryNotFound(category.to_string()));
    }
    Ok(RankingPage {
        category: category.to_string(),
        materials,
    })
}

/// Product page for the best material of `category`.
pub fn search(catalog: &Catalog, predictor: &Predictor, category: &str) -> Result<ProductPage> {
    let category = category.trim();
    let best = best_in_category(catalog, category)?;
    product_page(catalog, predictor, best.product.id)
}

pub fn product_page(catalog: &Catalog, predictor: &Predictor, id: usize) -> Result<ProductPage> {
    let scored = catalog
        .product(id)
        .ok_or(EcoRankError::ProductNotFound(id))?;
    let category = &scored.product.category;
    let walk = catalog
        .best_and_next(category, &scored.product.material)
        .ok_or_else(|| EcoRankError::CategoryNotFound(category.clone()))?;
    debug!(
        id,
        position = walk.position,
        total = walk.total,
        "resolved material position"
    );

    let alternative = walk
        .next_worse
        .as_deref()
        .and_then(|material| catalog.find_product(category, material))
        .cloned();

    Ok(ProductPage {
        product: scored.clone(),
        prediction: predictor.predict(scored),
        is_best: walk.is_best(),
        rank: walk.position + 1,
        ranked_materials: walk.total,
        alternative,
    })
}

pub fn compare(catalog: &Catalog, first: &str, second: &str) -> Result<ComparisonPage> {
    if first.to_lowercase() == second.to_lowercase() {
        return Err(EcoRankError::SameCategory(first.to_string()));
    }
    Ok(ComparisonPage {
        first: best_in_category(catalog, first)?,
        second: best_in_category(catalog, second)?,
    })
}

pub fn check(catalog: &Catalog, predictor: &Predictor, metrics: EcoMetrics) -> CheckPage {
    let eco_score = catalog.score(&metrics);
    CheckPage {
        metrics,
        max_life: catalog.max_life(),
        weights: *catalog.weights(),
        eco_score,
        thresholds: *predictor.thresholds(),
        label: predictor.classify_score(eco_score),
    }
}

fn best_in_category(catalog: &Catalog, category: &str) -> Result<CategoryBest> {
    let best = catalog
        .rank_materials(category)
        .into_iter()
        .next()
        .and_then(|material| catalog.find_product(category, &material))
        .ok_or_else(|| EcoRankError::CategoryNotFound(category.to_string()))?;
    Ok(CategoryBest {
        category: best.product.category.clone(),
        product: best.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::sample_products;
    use crate::classify::rules::SustainabilityLabel;
    use crate::classify::PredictionSource;
    use crate::types::scoring::{Thresholds, Weights};

    fn setup() -> (Catalog, Predictor) {
        (
            Catalog::new(sample_products(), Weights::default()),
            Predictor::rules(Thresholds::default()),
        )
    }

    #[test]
    fn search_lands_on_first_row_of_best_material() {
        let (catalog, predictor) = setup();
        let page = search(&catalog, &predictor, "  water bottle ").expect("category exists");
        assert_eq!(page.product.id, 1);
        assert!(page.is_best);
        assert_eq!(page.rank, 1);
        assert_eq!(page.ranked_materials, 3);
        assert_eq!(
            page.alternative
                .as_ref()
                .map(|alternative| alternative.product.material.as_str()),
            Some("Glass")
        );
        assert_eq!(page.prediction.source, PredictionSource::Rules);
    }

    #[test]
    fn search_unknown_category_is_not_found() {
        let (catalog, predictor) = setup();
        let err = search(&catalog, &predictor, "Spaceship").expect_err("unknown category");
        assert!(matches!(err, EcoRankError::CategoryNotFound(_)));
    }

    #[test]
    fn product_page_for_worst_material_has_no_alternative() {
        let (catalog, predictor) = setup();
        let page = product_page(&catalog, &predictor, 0).expect("product 0 exists");
        assert_eq!(page.product.product.material, "Plastic");
        assert!(!page.is_best);
        assert_eq!(page.rank, 3);
        assert!(page.alternative.is_none());
    }

    #[test]
    fn product_page_walks_to_next_worse() {
        let (catalog, predictor) = setup();
        let page = product_page(&catalog, &predictor, 2).expect("product 2 exists");
        assert_eq!(page.product.product.material, "Glass");
        assert_eq!(page.rank, 2);
        assert_eq!(
            page.alternative.map(|alternative| alternative.id),
            Some(0)
        );
    }

    #[test]
    fn product_page_unknown_id_is_not_found() {
        let (catalog, predictor) = setup();
        let err = product_page(&catalog, &predictor, 42).expect_err("unknown id");
        assert!(matches!(err, EcoRankError::ProductNotFound(42)));
    }

    #[test]
    fn ranking_page_requires_known_category() {
        let (catalog, _) = setup();
        let page = ranking(&catalog, "toothbrush").expect("category exists");
        assert_eq!(page.materials[0].material, "Bamboo");
        assert!(ranking(&catalog, "nonexistent").is_err());
    }

    #[test]
    fn compare_returns_best_of_each_category() {
        let (catalog, _) = setup();
        let page = compare(&catalog, "Water Bottle", "toothbrush").expect("both exist");
        assert_eq!(page.first.product.product.material, "Bamboo");
        assert_eq!(page.second.category, "Toothbrush");
        assert_eq!(page.second.product.id, 5);
    }

    #[test]
    fn compare_rejects_same_category() {
        let (catalog, _) = setup();
        let err = compare(&catalog, "Toothbrush", "TOOTHBRUSH").expect_err("same category");
        assert!(matches!(err, EcoRankError::SameCategory(_)));
    }

    #[test]
    fn compare_rejects_unknown_category() {
        let (catalog, _) = setup();
        let err = compare(&catalog, "Toothbrush", "Bags").expect_err("unknown category");
        assert!(matches!(err, EcoRankError::CategoryNotFound(name) if name == "Bags"));
    }

    #[test]
    fn check_scores_against_catalog_max_life() {
        let (catalog, predictor) = setup();
        let page = check(
            &catalog,
            &predictor,
            EcoMetrics {
                recyclability_pct: 100.0,
                carbon_kgco2: 0.0,
                biodegradability_pct: 100.0,
                lifespan_years: 20.0,
            },
        );
        assert_eq!(page.max_life, 20.0);
        assert!((page.eco_score - 1.0).abs() < 1e-12);
        assert_eq!(page.label, SustainabilityLabel::EcoFriendly);
    }
}
