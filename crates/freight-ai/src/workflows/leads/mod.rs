//! Lead intelligence workflow: prospect discovery across business fact
//! sources, additive lead scoring, and blended ranking.

pub mod discovery;
pub mod domain;
pub mod facts;
pub mod importer;
pub mod rules;

pub use discovery::LeadDiscoveryService;
pub use domain::{CompanyRecord, CompanyStatus, Lead, LeadSource};
pub use facts::{FactError, FactProvider, ProspectQuery, SimulatedFactProvider};
pub use importer::{parse_registry_csv, LeadImportError};
pub use rules::{estimate_potential_value, score_company, LeadScoringConfig};
