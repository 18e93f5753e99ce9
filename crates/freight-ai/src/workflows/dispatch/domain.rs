use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::scoring::FactorScore;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoadId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CarrierId(pub String);

/// City/state pair used for lane endpoints and carrier domiciles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    pub city: String,
    pub state: String,
}

impl Place {
    pub fn new(city: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            state: state.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentType {
    DryVan,
    Reefer,
    Flatbed,
    StepDeck,
    PowerOnly,
}

impl EquipmentType {
    pub fn label(&self) -> &'static str {
        match self {
            EquipmentType::DryVan => "dry van",
            EquipmentType::Reefer => "reefer",
            EquipmentType::Flatbed => "flatbed",
            EquipmentType::StepDeck => "step deck",
            EquipmentType::PowerOnly => "power only",
        }
    }
}

/// Market demand band for a lane, as reported by the fact provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DemandLevel {
    High,
    Medium,
    Low,
}

impl DemandLevel {
    pub fn label(&self) -> &'static str {
        match self {
            DemandLevel::High => "high",
            DemandLevel::Medium => "medium",
            DemandLevel::Low => "low",
        }
    }
}

/// A shipment opportunity on a single lane with its economics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadOpportunity {
    pub id: LoadId,
    pub shipper_name: String,
    pub origin: Place,
    pub destination: Place,
    pub equipment: EquipmentType,
    pub distance_miles: f64,
    pub pickup_date: NaiveDate,
    /// Rate the shipper pays the brokerage.
    pub shipper_rate: f64,
    /// Rate the brokerage expects to pay a carrier.
    pub estimated_carrier_rate: f64,
    pub estimated_margin: f64,
    /// Pricing-model confidence in [0, 100].
    pub confidence: f64,
    pub demand: DemandLevel,
}

impl LoadOpportunity {
    /// Margin as a share of the shipper rate; zero when the rate is
    /// missing or non-positive so downstream math never divides by zero.
    pub fn margin_ratio(&self) -> f64 {
        if self.shipper_rate > 0.0 {
            self.estimated_margin / self.shipper_rate
        } else {
            0.0
        }
    }
}

/// A carrier considered for a load, before match scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarrierCandidate {
    pub id: CarrierId,
    pub name: String,
    pub mc_number: String,
    pub equipment: EquipmentType,
    pub home_base: Place,
    /// On-time/claims composite in [0, 100].
    pub performance_score: f64,
    /// Rate the carrier has signalled it expects for the lane.
    pub rate_expectation: f64,
    pub available_on: NaiveDate,
}

/// Scored carrier candidate with the advisory text shown to dispatchers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarrierMatch {
    pub candidate: CarrierCandidate,
    pub match_score: f64,
    pub components: Vec<FactorScore>,
    pub recommendation: String,
    pub risks: Vec<String>,
    pub benefits: Vec<String>,
}
