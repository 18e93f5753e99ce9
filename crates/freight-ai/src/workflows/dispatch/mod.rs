//! Freight dispatch workflow: load opportunity ranking, carrier matching,
//! and automated rate negotiation.

pub mod domain;
pub mod negotiation;
pub mod router;
pub(crate) mod rules;
pub mod service;

pub use domain::{
    CarrierCandidate, CarrierId, CarrierMatch, DemandLevel, EquipmentType, LoadId,
    LoadOpportunity, Place,
};
pub use negotiation::{
    negotiate, NegotiationError, NegotiationOutcome, NegotiationStep, NegotiationTerms, Party,
    MAX_ROUNDS,
};
pub use router::dispatch_router;
pub use rules::DispatchScoringConfig;
pub use service::DispatchService;
