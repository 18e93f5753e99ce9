use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::domain::{CompanyRecord, CompanyStatus, LeadSource};

/// Filters forwarded to the upstream fact sources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProspectQuery {
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    /// Candidate count requested from each source.
    #[serde(default = "default_per_source")]
    pub per_source: usize,
}

fn default_per_source() -> usize {
    8
}

#[derive(Debug, thiserror::Error)]
pub enum FactError {
    // The failing source is display-only context, not a wrapped error.
    #[error("fact source {origin} unavailable: {reason}")]
    Unavailable { origin: &'static str, reason: String },
}

/// Seam for the external business-fact sources. Implementations resolve all
/// I/O before scoring happens, so the engines stay pure.
pub trait FactProvider {
    fn companies(
        &self,
        source: LeadSource,
        query: &ProspectQuery,
    ) -> Result<Vec<CompanyRecord>, FactError>;
}

const COMPANY_STEMS: &[&str] = &[
    "TechCorp Industries",
    "Global Manufacturing Inc",
    "Logistics Solutions LLC",
    "Distribution Partners",
    "Supply Chain Experts",
    "Lone Star Components",
    "Gulf Coast Packaging",
    "Midwest Steel Works",
    "Sunbelt Produce Co",
    "Atlantic Retail Group",
];

const INDUSTRY_POOL: &[&str] = &[
    "manufacturing",
    "automotive",
    "retail",
    "distribution",
    "agriculture",
    "construction",
    "consulting",
];

const STATE_POOL: &[&str] = &["TX", "GA", "CA", "IL", "FL", "OH", "MT", "PA"];

/// Deterministic stand-in for the external data sources, used by demos and
/// tests. The same seed and query always produce the same records.
#[derive(Debug, Clone)]
pub struct SimulatedFactProvider {
    seed: u64,
}

impl SimulatedFactProvider {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    fn rng_for(&self, source: LeadSource) -> StdRng {
        let salt = match source {
            LeadSource::BusinessRegistry => 0x5261,
            LeadSource::PublicFilings => 0x4649,
            LeadSource::TradeExports => 0x5452,
        };
        StdRng::seed_from_u64(self.seed.wrapping_mul(0x9e37_79b9).wrapping_add(salt))
    }
}

impl FactProvider for SimulatedFactProvider {
    fn companies(
        &self,
        source: LeadSource,
        query: &ProspectQuery,
    ) -> Result<Vec<CompanyRecord>, FactError> {
        let mut rng = self.rng_for(source);
        let count = query.per_source.max(1);
        let mut records = Vec::with_capacity(count);

        for index in 0..count {
            let stem = COMPANY_STEMS[rng.gen_range(0..COMPANY_STEMS.len())];
            let industry = query
                .industry
                .clone()
                .unwrap_or_else(|| INDUSTRY_POOL[rng.gen_range(0..INDUSTRY_POOL.len())].to_string());
            let state = query
                .state
                .clone()
                .unwrap_or_else(|| STATE_POOL[rng.gen_range(0..STATE_POOL.len())].to_string());

            let status = if rng.gen_bool(0.85) {
                CompanyStatus::Active
            } else {
                CompanyStatus::Inactive
            };

            let incorporated_on = if rng.gen_bool(0.9) {
                NaiveDate::from_ymd_opt(
                    rng.gen_range(1990..=2024),
                    rng.gen_range(1..=12),
                    rng.gen_range(1..=28),
                )
            } else {
                None
            };

            let annual_revenue = match source {
                LeadSource::PublicFilings => {
                    Some(rng.gen_range(50_000_000.0..5_000_000_000.0_f64))
                }
                _ => None,
            };

            records.push(CompanyRecord {
                name: format!("{stem} #{:02}", index + 1),
                industry,
                state,
                status,
                incorporated_on,
                annual_revenue,
                source,
            });
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_produces_identical_records() {
        let query = ProspectQuery {
            industry: Some("manufacturing".to_string()),
            state: None,
            per_source: 5,
        };

        let first = SimulatedFactProvider::new(42)
            .companies(LeadSource::BusinessRegistry, &query)
            .expect("simulated source never fails");
        let second = SimulatedFactProvider::new(42)
            .companies(LeadSource::BusinessRegistry, &query)
            .expect("simulated source never fails");

        assert_eq!(first, second);
        assert_eq!(first.len(), 5);
        assert!(first
            .iter()
            .all(|record| record.industry == "manufacturing"));
    }

    #[test]
    fn unavailable_error_carries_plain_context() {
        use std::error::Error;

        let err = FactError::Unavailable {
            origin: "public_filings",
            reason: "upstream timeout".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "fact source public_filings unavailable: upstream timeout"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn sources_draw_from_distinct_streams() {
        let provider = SimulatedFactProvider::new(7);
        let query = ProspectQuery::default();

        let registry = provider
            .companies(LeadSource::BusinessRegistry, &query)
            .expect("records");
        let filings = provider
            .companies(LeadSource::PublicFilings, &query)
            .expect("records");

        assert_ne!(registry, filings);
        assert!(filings
            .iter()
            .all(|record| record.annual_revenue.is_some()));
        assert!(registry
            .iter()
            .all(|record| record.annual_revenue.is_none()));
    }
}
