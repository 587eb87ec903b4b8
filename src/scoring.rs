use crate::types::product::EcoMetrics;
use crate::types::scoring::{Score, Weights};

/// Weighted eco score of one set of metrics.
///
/// `max_life` normalises the lifespan term and must be the catalog-wide value
/// from [`max_life`]; the other terms are bounded by construction.
pub fn compute_eco_score(metrics: &EcoMetrics, max_life: f64, weights: &Weights) -> Score {
    weights.recyclability * (metrics.recyclability_pct / 100.0)
        + weights.biodegradability * (metrics.biodegradability_pct / 100.0)
        + weights.carbon * (1.0 / (1.0 + metrics.carbon_kgco2))
        + weights.lifespan * (metrics.lifespan_years / max_life)
}

/// Largest finite non-zero lifespan, or 1.0 when there is none.
pub fn max_life<I>(lifespans: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let max = lifespans
        .into_iter()
        .filter(|life| life.is_finite() && *life != 0.0)
        .fold(None, |acc: Option<f64>, life| match acc {
            Some(current) if current >= life => Some(current),
            _ => Some(life),
        });

    match max {
        Some(value) if value > 0.0 => value,
        _ => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(recyclability: f64, carbon: f64, bio: f64, life: f64) -> EcoMetrics {
        EcoMetrics {
            recyclability_pct: recyclability,
            carbon_kgco2: carbon,
            biodegradability_pct: bio,
            lifespan_years: life,
        }
    }

    #[test]
    fn perfect_product_scores_one() {
        let score = compute_eco_score(&metrics(100.0, 0.0, 100.0, 10.0), 10.0, &Weights::default());
        assert!((score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn worst_in_range_product_stays_positive() {
        let score = compute_eco_score(&metrics(0.0, 1000.0, 0.0, 0.0), 10.0, &Weights::default());
        assert!(score > 0.0);
        assert!(score < 0.001);
    }

    #[test]
    fn score_matches_weighted_formula() {
        // 0.35*0.9 + 0.20*0.15 + 0.30/21 + 0.15*0.5
        let score = compute_eco_score(&metrics(90.0, 20.0, 15.0, 5.0), 10.0, &Weights::default());
        let expected = 0.315 + 0.03 + 0.30 / 21.0 + 0.075;
        assert!((score - expected).abs() < 1e-12);
    }

    #[test]
    fn score_is_monotonic_in_each_metric() {
        let weights = Weights::default();
        let base = compute_eco_score(&metrics(50.0, 10.0, 50.0, 5.0), 10.0, &weights);
        assert!(compute_eco_score(&metrics(60.0, 10.0, 50.0, 5.0), 10.0, &weights) > base);
        assert!(compute_eco_score(&metrics(50.0, 10.0, 60.0, 5.0), 10.0, &weights) > base);
        assert!(compute_eco_score(&metrics(50.0, 10.0, 50.0, 6.0), 10.0, &weights) > base);
        assert!(compute_eco_score(&metrics(50.0, 20.0, 50.0, 5.0), 10.0, &weights) < base);
    }

    #[test]
    fn score_is_deterministic() {
        let input = metrics(72.5, 33.3, 41.0, 4.2);
        let weights = Weights::default();
        let first = compute_eco_score(&input, 9.5, &weights);
        let second = compute_eco_score(&input, 9.5, &weights);
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn score_stays_in_unit_interval_across_in_range_grid() {
        let weights = Weights::default();
        for recyclability in [0.0, 25.0, 100.0] {
            for carbon in [0.0, 1.0, 150.0] {
                for bio in [0.0, 50.0, 100.0] {
                    for life in [0.0, 3.0, 20.0] {
                        let score = compute_eco_score(
                            &metrics(recyclability, carbon, bio, life),
                            20.0,
                            &weights,
                        );
                        assert!(score > 0.0 && score <= 1.0, "score {score} out of range");
                    }
                }
            }
        }
    }

    #[test]
    fn max_life_ignores_zeros() {
        assert_eq!(max_life([0.0, 3.0, 12.5, 0.0, 7.0]), 12.5);
    }

    #[test]
    fn max_life_falls_back_to_one() {
        assert_eq!(max_life(Vec::<f64>::new()), 1.0);
        assert_eq!(max_life([0.0, 0.0]), 1.0);
        assert_eq!(max_life([f64::NAN]), 1.0);
    }

    #[test]
    fn max_life_skips_infinite_lifespans() {
        assert_eq!(max_life([4.0, f64::INFINITY, 9.0]), 9.0);
        assert_eq!(max_life([f64::INFINITY]), 1.0);
    }
}
