use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{CompanyRecord, CompanyStatus, LeadSource};
use crate::scoring::{FactorKind, FactorScore, ScoredEntity};

/// Industries with meaningful recurring freight volume.
const SHIPPING_INDUSTRIES: &[&str] = &[
    "manufacturing",
    "automotive",
    "retail",
    "distribution",
    "agriculture",
    "construction",
    "food processing",
    "chemicals",
];

/// States hosting the major logistics hubs we can serve same-day.
const HUB_STATES: &[&str] = &["CA", "TX", "FL", "NY", "GA", "IL", "NJ", "TN", "OH"];

/// Point table for additive lead scoring. Registry and trade records start
/// from the neutral base; public filings use the higher public-company base
/// with revenue bonuses instead of registry signals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadScoringConfig {
    pub registry_base: f64,
    pub public_company_base: f64,
    pub industry_bonus: f64,
    pub established_bonus: f64,
    pub tenured_bonus: f64,
    pub active_bonus: f64,
    pub hub_bonus: f64,
    pub large_revenue_bonus: f64,
    pub enterprise_revenue_bonus: f64,
    /// Annual freight spend baseline scaled by industry and score.
    pub base_potential_value: f64,
}

impl Default for LeadScoringConfig {
    fn default() -> Self {
        Self {
            registry_base: 50.0,
            public_company_base: 60.0,
            industry_bonus: 20.0,
            established_bonus: 10.0,
            tenured_bonus: 5.0,
            active_bonus: 15.0,
            hub_bonus: 10.0,
            large_revenue_bonus: 20.0,
            enterprise_revenue_bonus: 10.0,
            base_potential_value: 50_000.0,
        }
    }
}

/// Score one prospect record. Missing facts (age, revenue) contribute
/// nothing; the composite is clamped to [0, 100].
pub fn score_company(
    record: CompanyRecord,
    today: NaiveDate,
    config: &LeadScoringConfig,
) -> ScoredEntity<CompanyRecord> {
    let components = match record.source {
        LeadSource::PublicFilings => public_company_components(&record, config),
        LeadSource::BusinessRegistry | LeadSource::TradeExports => {
            registry_components(&record, today, config)
        }
    };
    ScoredEntity::from_components(record, components)
}

fn registry_components(
    record: &CompanyRecord,
    today: NaiveDate,
    config: &LeadScoringConfig,
) -> Vec<FactorScore> {
    let mut components = vec![FactorScore::new(
        FactorKind::Base,
        config.registry_base,
        "registry prospect baseline",
    )];

    if is_shipping_industry(&record.industry) {
        components.push(FactorScore::new(
            FactorKind::IndustryRelevance,
            config.industry_bonus,
            format!("{} ships recurring freight", record.industry),
        ));
    }

    match record.age_years(today) {
        Some(age) if age > 5 => {
            let mut points = config.established_bonus;
            let mut notes = format!("{age} years in business");
            if age > 10 {
                points += config.tenured_bonus;
                notes.push_str(", tenured operation");
            }
            components.push(FactorScore::new(FactorKind::CompanyAge, points, notes));
        }
        _ => {}
    }

    if record.status == CompanyStatus::Active {
        components.push(FactorScore::new(
            FactorKind::ActiveStatus,
            config.active_bonus,
            "active legal status",
        ));
    }

    if is_hub_state(&record.state) {
        components.push(FactorScore::new(
            FactorKind::HubLocation,
            config.hub_bonus,
            format!("located in logistics hub state {}", record.state),
        ));
    }

    components
}

fn public_company_components(
    record: &CompanyRecord,
    config: &LeadScoringConfig,
) -> Vec<FactorScore> {
    let mut components = vec![FactorScore::new(
        FactorKind::Base,
        config.public_company_base,
        "public company baseline",
    )];

    if let Some(revenue) = record.annual_revenue {
        if revenue > 100_000_000.0 {
            components.push(FactorScore::new(
                FactorKind::RevenueScale,
                config.large_revenue_bonus,
                "annual revenue above $100M",
            ));
        }
        if revenue > 1_000_000_000.0 {
            components.push(FactorScore::new(
                FactorKind::RevenueScale,
                config.enterprise_revenue_bonus,
                "annual revenue above $1B",
            ));
        }
    }

    components
}

/// Estimated annual freight spend: baseline scaled by industry multiplier
/// and the lead's score.
pub fn estimate_potential_value(score: f64, industry: &str, config: &LeadScoringConfig) -> f64 {
    (config.base_potential_value * industry_multiplier(industry) * (score / 100.0)).round()
}

fn industry_multiplier(industry: &str) -> f64 {
    match industry.trim().to_ascii_lowercase().as_str() {
        "manufacturing" => 3.0,
        "chemicals" => 2.8,
        "automotive" => 2.5,
        "retail" => 2.0,
        "distribution" => 2.0,
        "food processing" => 1.8,
        "construction" => 1.5,
        "agriculture" => 1.2,
        _ => 1.5,
    }
}

fn is_shipping_industry(industry: &str) -> bool {
    let normalized = industry.trim().to_ascii_lowercase();
    SHIPPING_INDUSTRIES.contains(&normalized.as_str())
}

fn is_hub_state(state: &str) -> bool {
    HUB_STATES
        .iter()
        .any(|hub| hub.eq_ignore_ascii_case(state.trim()))
}
