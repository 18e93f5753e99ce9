//! Ingest of registry CSV exports into prospect records.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use std::io::Read;

use super::domain::{CompanyRecord, CompanyStatus, LeadSource};

#[derive(Debug, thiserror::Error)]
pub enum LeadImportError {
    #[error("failed to parse registry csv: {0}")]
    Csv(#[from] csv::Error),
}

/// Parse a registry export. Rows with blank optional columns import with
/// those facts missing rather than failing the batch.
pub fn parse_registry_csv<R: Read>(reader: R) -> Result<Vec<CompanyRecord>, LeadImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for row in csv_reader.deserialize::<RegistryRow>() {
        let row = row?;
        // Derived fields first; the struct literal moves the strings out.
        let status = row.status();
        let incorporated_on = row.incorporated_on();
        let annual_revenue = row.annual_revenue();
        records.push(CompanyRecord {
            name: row.name,
            industry: row.industry.unwrap_or_default(),
            state: row.state.unwrap_or_default(),
            status,
            incorporated_on,
            annual_revenue,
            source: LeadSource::BusinessRegistry,
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct RegistryRow {
    #[serde(rename = "Company Name")]
    name: String,
    #[serde(rename = "Industry", default, deserialize_with = "empty_string_as_none")]
    industry: Option<String>,
    #[serde(rename = "State", default, deserialize_with = "empty_string_as_none")]
    state: Option<String>,
    #[serde(rename = "Status", default, deserialize_with = "empty_string_as_none")]
    raw_status: Option<String>,
    #[serde(
        rename = "Incorporation Date",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    incorporation_date: Option<String>,
    #[serde(
        rename = "Annual Revenue",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    raw_revenue: Option<String>,
}

impl RegistryRow {
    fn status(&self) -> CompanyStatus {
        match self
            .raw_status
            .as_deref()
            .map(|value| value.to_ascii_lowercase())
            .as_deref()
        {
            Some("active") => CompanyStatus::Active,
            Some("inactive") => CompanyStatus::Inactive,
            Some("dissolved") => CompanyStatus::Dissolved,
            _ => CompanyStatus::Unknown,
        }
    }

    fn incorporated_on(&self) -> Option<NaiveDate> {
        self.incorporation_date
            .as_deref()
            .and_then(|value| NaiveDate::parse_from_str(value, "%Y-%m-%d").ok())
    }

    fn annual_revenue(&self) -> Option<f64> {
        self.raw_revenue
            .as_deref()
            .and_then(|value| value.replace([',', '$'], "").parse::<f64>().ok())
            .filter(|revenue| revenue.is_finite() && *revenue >= 0.0)
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
