use chrono::NaiveDate;
use tracing::debug;

use super::domain::{CompanyRecord, Lead, LeadSource};
use super::facts::{FactError, FactProvider, ProspectQuery};
use super::rules::{estimate_potential_value, score_company, LeadScoringConfig};
use crate::ranking::{rank, rank_blended, RankedList};
use crate::scoring::ScoredEntity;

/// Stateless discovery pipeline: pull candidates per source, score them,
/// blend the sources evenly, and return the top prospects. All request
/// state lives with the caller.
pub struct LeadDiscoveryService {
    config: LeadScoringConfig,
}

impl LeadDiscoveryService {
    pub fn new(config: LeadScoringConfig) -> Self {
        Self { config }
    }

    pub fn standard() -> Self {
        Self::new(LeadScoringConfig::default())
    }

    /// Blended discovery across the given sources. Each source contributes
    /// an even share of the limit before the merged pool is re-ranked.
    pub fn discover<F: FactProvider>(
        &self,
        provider: &F,
        query: &ProspectQuery,
        sources: &[LeadSource],
        limit: usize,
        today: NaiveDate,
    ) -> Result<Vec<Lead>, FactError> {
        let mut groups = Vec::with_capacity(sources.len());
        for source in sources {
            let records = provider.companies(*source, query)?;
            debug!(
                source = source.label(),
                candidates = records.len(),
                "scored prospect batch"
            );
            groups.push(self.score_records(records, today).into_items());
        }

        Ok(self.into_leads(rank_blended(groups, limit)))
    }

    /// Score and rank an already-materialized batch, e.g. a registry CSV
    /// import.
    pub fn qualify(
        &self,
        records: Vec<CompanyRecord>,
        limit: Option<usize>,
        today: NaiveDate,
    ) -> Vec<Lead> {
        let ranked = rank(self.score_records(records, today).into_items(), limit);
        self.into_leads(ranked)
    }

    fn score_records(
        &self,
        records: Vec<CompanyRecord>,
        today: NaiveDate,
    ) -> RankedList<CompanyRecord> {
        let scored = records
            .into_iter()
            .map(|record| score_company(record, today, &self.config))
            .collect();
        rank(scored, None)
    }

    fn into_leads(&self, ranked: RankedList<CompanyRecord>) -> Vec<Lead> {
        ranked
            .into_items()
            .into_iter()
            .map(|entry: ScoredEntity<CompanyRecord>| {
                let potential_value =
                    estimate_potential_value(entry.score, &entry.entity.industry, &self.config);
                Lead {
                    company: entry.entity,
                    score: entry.score,
                    components: entry.components,
                    potential_value,
                }
            })
            .collect()
    }
}
