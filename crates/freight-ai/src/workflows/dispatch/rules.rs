use serde::{Deserialize, Serialize};

use super::domain::{CarrierCandidate, DemandLevel, LoadOpportunity, Place};
use crate::scoring::{clamp_score, FactorKind, FactorScore, ScoringError, WeightTable, WeightedFactor};

/// Weight tables for the two weighted dispatch contexts. Construct through
/// [`DispatchScoringConfig::standard`] or validate custom tables up front.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchScoringConfig {
    pub load: WeightTable,
    pub carrier: WeightTable,
}

impl DispatchScoringConfig {
    /// Production weights: margin 40% / confidence 30% / demand 30% for
    /// loads, performance 40% / location 30% / rate alignment 30% for
    /// carrier matches.
    pub fn standard() -> Result<Self, ScoringError> {
        Ok(Self {
            load: WeightTable::new(vec![
                WeightedFactor::new(FactorKind::MarginRatio, 0.4),
                WeightedFactor::new(FactorKind::Confidence, 0.3),
                WeightedFactor::new(FactorKind::MarketDemand, 0.3),
            ])?,
            carrier: WeightTable::new(vec![
                WeightedFactor::new(FactorKind::Performance, 0.4),
                WeightedFactor::new(FactorKind::LocationProximity, 0.3),
                WeightedFactor::new(FactorKind::RateAlignment, 0.3),
            ])?,
        })
    }
}

pub(crate) fn load_components(load: &LoadOpportunity, table: &WeightTable) -> Vec<FactorScore> {
    let margin_ratio = load.margin_ratio();
    let margin_subscore = margin_subscore(margin_ratio);
    let demand_subscore = demand_subscore(load.demand);

    vec![
        FactorScore::weighted(
            FactorKind::MarginRatio,
            margin_subscore,
            table,
            format!(
                "${:.0} margin is {:.1}% of the shipper rate",
                load.estimated_margin,
                margin_ratio * 100.0
            ),
        ),
        FactorScore::weighted(
            FactorKind::Confidence,
            load.confidence,
            table,
            format!("pricing model confidence {:.0}", load.confidence),
        ),
        FactorScore::weighted(
            FactorKind::MarketDemand,
            demand_subscore,
            table,
            format!("{} demand on lane", load.demand.label()),
        ),
    ]
}

pub(crate) fn carrier_components(
    candidate: &CarrierCandidate,
    load: &LoadOpportunity,
    table: &WeightTable,
) -> Vec<FactorScore> {
    let location_subscore = location_subscore(&candidate.home_base, &load.origin);
    let rate_subscore = rate_alignment_subscore(candidate.rate_expectation, load.estimated_carrier_rate);

    vec![
        FactorScore::weighted(
            FactorKind::Performance,
            candidate.performance_score,
            table,
            format!("performance composite {:.0}", candidate.performance_score),
        ),
        FactorScore::weighted(
            FactorKind::LocationProximity,
            location_subscore,
            table,
            format!(
                "domiciled in {}, {} against pickup in {}, {}",
                candidate.home_base.city,
                candidate.home_base.state,
                load.origin.city,
                load.origin.state
            ),
        ),
        FactorScore::weighted(
            FactorKind::RateAlignment,
            rate_subscore,
            table,
            format!(
                "expects ${:.0} against lane target ${:.0}",
                candidate.rate_expectation, load.estimated_carrier_rate
            ),
        ),
    ]
}

/// Margin share of the shipper rate in points: a 20% margin lane scores 20,
/// anything at or past a full-rate margin saturates at 100.
fn margin_subscore(margin_ratio: f64) -> f64 {
    clamp_score(margin_ratio * 100.0)
}

fn demand_subscore(demand: DemandLevel) -> f64 {
    match demand {
        DemandLevel::High => 100.0,
        DemandLevel::Medium => 70.0,
        DemandLevel::Low => 40.0,
    }
}

/// Expectations within 20% of the lane target scale linearly down from 100;
/// anything past that band scores zero.
fn rate_alignment_subscore(expectation: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    let max_difference = target * 0.2;
    clamp_score(100.0 - ((expectation - target).abs() / max_difference) * 100.0)
}

fn location_subscore(home_base: &Place, origin: &Place) -> f64 {
    if home_base.state.eq_ignore_ascii_case(&origin.state) {
        100.0
    } else if region_of(&home_base.state) == region_of(&origin.state)
        && region_of(&home_base.state).is_some()
    {
        75.0
    } else {
        50.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Region {
    Northeast,
    Southeast,
    Midwest,
    Southwest,
    West,
}

fn region_of(state: &str) -> Option<Region> {
    match state.to_ascii_uppercase().as_str() {
        "CT" | "MA" | "ME" | "NH" | "NJ" | "NY" | "PA" | "RI" | "VT" => Some(Region::Northeast),
        "AL" | "FL" | "GA" | "KY" | "MS" | "NC" | "SC" | "TN" | "VA" | "WV" => {
            Some(Region::Southeast)
        }
        "IA" | "IL" | "IN" | "KS" | "MI" | "MN" | "MO" | "ND" | "NE" | "OH" | "SD" | "WI" => {
            Some(Region::Midwest)
        }
        "AR" | "AZ" | "LA" | "NM" | "OK" | "TX" => Some(Region::Southwest),
        "CA" | "CO" | "ID" | "MT" | "NV" | "OR" | "UT" | "WA" | "WY" => Some(Region::West),
        _ => None,
    }
}
