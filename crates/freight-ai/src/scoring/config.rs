use serde::{Deserialize, Serialize};

/// Named sub-factor contributing to a blended score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorKind {
    Base,
    MarginRatio,
    Confidence,
    MarketDemand,
    Performance,
    LocationProximity,
    RateAlignment,
    IndustryRelevance,
    CompanyAge,
    ActiveStatus,
    HubLocation,
    RevenueScale,
}

impl FactorKind {
    pub fn label(&self) -> &'static str {
        match self {
            FactorKind::Base => "base",
            FactorKind::MarginRatio => "margin_ratio",
            FactorKind::Confidence => "confidence",
            FactorKind::MarketDemand => "market_demand",
            FactorKind::Performance => "performance",
            FactorKind::LocationProximity => "location_proximity",
            FactorKind::RateAlignment => "rate_alignment",
            FactorKind::IndustryRelevance => "industry_relevance",
            FactorKind::CompanyAge => "company_age",
            FactorKind::ActiveStatus => "active_status",
            FactorKind::HubLocation => "hub_location",
            FactorKind::RevenueScale => "revenue_scale",
        }
    }
}

/// A factor paired with its share of a weighted scoring context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedFactor {
    pub factor: FactorKind,
    pub weight: f64,
}

impl WeightedFactor {
    pub fn new(factor: FactorKind, weight: f64) -> Self {
        Self { factor, weight }
    }
}

// Allows 0.4 + 0.3 + 0.3 style tables to pass despite binary rounding.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Validated weight assignment for one scoring context. Weights must lie in
/// [0, 1] and sum to 1.0; violations surface at construction time so a bad
/// deployment fails before any entity is scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<WeightedFactor>", into = "Vec<WeightedFactor>")]
pub struct WeightTable {
    factors: Vec<WeightedFactor>,
}

impl WeightTable {
    pub fn new(factors: Vec<WeightedFactor>) -> Result<Self, ScoringError> {
        for entry in &factors {
            if !entry.weight.is_finite() || !(0.0..=1.0).contains(&entry.weight) {
                return Err(ScoringError::WeightOutOfRange {
                    factor: entry.factor,
                    weight: entry.weight,
                });
            }
        }

        let sum: f64 = factors.iter().map(|entry| entry.weight).sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ScoringError::InvalidWeightConfiguration { sum });
        }

        Ok(Self { factors })
    }

    pub fn factors(&self) -> &[WeightedFactor] {
        &self.factors
    }

    /// Weight assigned to a factor; absent factors contribute nothing.
    pub fn weight(&self, factor: FactorKind) -> f64 {
        self.factors
            .iter()
            .find(|entry| entry.factor == factor)
            .map(|entry| entry.weight)
            .unwrap_or(0.0)
    }
}

impl TryFrom<Vec<WeightedFactor>> for WeightTable {
    type Error = ScoringError;

    fn try_from(factors: Vec<WeightedFactor>) -> Result<Self, Self::Error> {
        Self::new(factors)
    }
}

impl From<WeightTable> for Vec<WeightedFactor> {
    fn from(table: WeightTable) -> Self {
        table.factors
    }
}

/// Raised when a scoring context is misconfigured.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    #[error("factor weights must sum to 1.0, got {sum:.4}")]
    InvalidWeightConfiguration { sum: f64 },
    #[error("weight for {} must lie within [0.0, 1.0], got {weight}", factor.label())]
    WeightOutOfRange { factor: FactorKind, weight: f64 },
}
