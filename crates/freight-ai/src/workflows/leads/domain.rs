use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::scoring::FactorScore;

/// Upstream source a prospect record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadSource {
    BusinessRegistry,
    PublicFilings,
    TradeExports,
}

impl LeadSource {
    pub fn label(&self) -> &'static str {
        match self {
            LeadSource::BusinessRegistry => "business_registry",
            LeadSource::PublicFilings => "public_filings",
            LeadSource::TradeExports => "trade_exports",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanyStatus {
    Active,
    Inactive,
    Dissolved,
    Unknown,
}

/// Raw prospect record as returned by a fact provider. Optional fields stay
/// neutral in scoring when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub name: String,
    pub industry: String,
    pub state: String,
    pub status: CompanyStatus,
    #[serde(default)]
    pub incorporated_on: Option<NaiveDate>,
    #[serde(default)]
    pub annual_revenue: Option<f64>,
    pub source: LeadSource,
}

impl CompanyRecord {
    /// Whole years since incorporation, when known.
    pub fn age_years(&self, today: NaiveDate) -> Option<i32> {
        let incorporated = self.incorporated_on?;
        let mut years = today.year() - incorporated.year();
        if (today.month(), today.day()) < (incorporated.month(), incorporated.day()) {
            years -= 1;
        }
        Some(years.max(0))
    }
}

/// A qualified prospect: the scored company plus its estimated annual
/// freight spend with the brokerage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub company: CompanyRecord,
    pub score: f64,
    pub components: Vec<FactorScore>,
    pub potential_value: f64,
}
