//! Shared scoring primitives for the dispatch and lead-intelligence
//! workflows.
//!
//! Every scored entity in the platform carries the same shape: a bounded
//! composite score in [0, 100] plus the per-factor contributions that
//! produced it, so rankings stay auditable. Weighted contexts blend
//! sub-scores through a validated [`WeightTable`]; additive contexts (lead
//! scoring) start from a configured base and accumulate point bonuses. Both
//! reduce to summing [`FactorScore`] contributions and clamping.

mod config;

pub use config::{FactorKind, ScoringError, WeightTable, WeightedFactor};

use serde::{Deserialize, Serialize};

/// Discrete contribution to a blended score, retained for audit trails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorScore {
    pub factor: FactorKind,
    /// Points this factor adds to the composite score. For weighted
    /// contexts this is already `subscore x weight`.
    pub points: f64,
    pub notes: String,
}

impl FactorScore {
    pub fn new(factor: FactorKind, points: f64, notes: impl Into<String>) -> Self {
        Self {
            factor,
            points,
            notes: notes.into(),
        }
    }

    /// Contribution of a sub-score in [0, 100] under a weight table.
    pub fn weighted(
        factor: FactorKind,
        subscore: f64,
        table: &WeightTable,
        notes: impl Into<String>,
    ) -> Self {
        let subscore = clamp_score(subscore);
        Self {
            factor,
            points: subscore * table.weight(factor),
            notes: notes.into(),
        }
    }
}

/// A record paired with the score the engine produced for it. Immutable once
/// built; rankings never rewrite scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredEntity<T> {
    pub entity: T,
    pub score: f64,
    pub components: Vec<FactorScore>,
}

impl<T> ScoredEntity<T> {
    /// Blend factor contributions into a composite score. The result is
    /// always within [0, 100]; an empty component list yields zero rather
    /// than propagating a NaN average.
    pub fn from_components(entity: T, components: Vec<FactorScore>) -> Self {
        let score = clamp_score(components.iter().map(|component| component.points).sum());
        Self {
            entity,
            score,
            components,
        }
    }
}

/// Clamp a raw score into the [0, 100] band. Non-finite inputs collapse to
/// zero so arithmetic on missing facts can never leak NaN into a ranking.
pub fn clamp_score(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_score_stays_within_band() {
        let scored = ScoredEntity::from_components(
            (),
            vec![
                FactorScore::new(FactorKind::Base, 60.0, "base"),
                FactorScore::new(FactorKind::RevenueScale, 70.0, "bonus"),
            ],
        );
        assert_eq!(scored.score, 100.0);

        let scored = ScoredEntity::from_components(
            (),
            vec![FactorScore::new(FactorKind::Base, -30.0, "negative")],
        );
        assert_eq!(scored.score, 0.0);
    }

    #[test]
    fn empty_components_yield_zero_not_nan() {
        let scored = ScoredEntity::from_components((), Vec::new());
        assert_eq!(scored.score, 0.0);
    }

    #[test]
    fn weighted_component_scales_subscore() {
        let table = WeightTable::new(vec![
            WeightedFactor::new(FactorKind::Performance, 0.4),
            WeightedFactor::new(FactorKind::RateAlignment, 0.6),
        ])
        .expect("valid table");

        let component = FactorScore::weighted(FactorKind::Performance, 90.0, &table, "perf");
        assert!((component.points - 36.0).abs() < 1e-9);
    }

    #[test]
    fn non_finite_values_collapse_to_zero() {
        assert_eq!(clamp_score(f64::NAN), 0.0);
        assert_eq!(clamp_score(f64::INFINITY), 0.0);
    }
}
