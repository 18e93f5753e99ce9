use super::domain::{CarrierCandidate, CarrierMatch, LoadOpportunity};
use super::negotiation::{negotiate, NegotiationError, NegotiationOutcome, NegotiationTerms};
use super::rules::{carrier_components, load_components, DispatchScoringConfig};
use crate::ranking::{rank, RankedList};
use crate::scoring::{ScoredEntity, ScoringError};

/// Stateless facade over load scoring, carrier matching, and rate
/// negotiation. Callers own all request state; the service holds only its
/// validated weight tables.
pub struct DispatchService {
    config: DispatchScoringConfig,
}

impl DispatchService {
    pub fn new(config: DispatchScoringConfig) -> Self {
        Self { config }
    }

    pub fn standard() -> Result<Self, ScoringError> {
        Ok(Self::new(DispatchScoringConfig::standard()?))
    }

    pub fn score_load(&self, load: &LoadOpportunity) -> ScoredEntity<LoadOpportunity> {
        let components = load_components(load, &self.config.load);
        ScoredEntity::from_components(load.clone(), components)
    }

    /// Score and rank load opportunities, keeping the top `limit` (all when
    /// `None`).
    pub fn rank_loads(
        &self,
        loads: Vec<LoadOpportunity>,
        limit: Option<usize>,
    ) -> RankedList<LoadOpportunity> {
        let scored = loads
            .into_iter()
            .map(|load| {
                let components = load_components(&load, &self.config.load);
                ScoredEntity::from_components(load, components)
            })
            .collect();
        rank(scored, limit)
    }

    /// Score carrier candidates against a load and return ranked matches
    /// with dispatcher-facing advisory text.
    pub fn match_carriers(
        &self,
        load: &LoadOpportunity,
        candidates: Vec<CarrierCandidate>,
        limit: Option<usize>,
    ) -> Vec<CarrierMatch> {
        let scored = candidates
            .into_iter()
            .map(|candidate| {
                let components = carrier_components(&candidate, load, &self.config.carrier);
                ScoredEntity::from_components(candidate, components)
            })
            .collect();

        rank(scored, limit)
            .into_items()
            .into_iter()
            .map(|entry| {
                let recommendation = recommendation_for(entry.score);
                let (risks, benefits) = risk_profile(&entry.entity, load);
                CarrierMatch {
                    candidate: entry.entity,
                    match_score: entry.score,
                    components: entry.components,
                    recommendation,
                    risks,
                    benefits,
                }
            })
            .collect()
    }

    pub fn negotiate_rate(
        &self,
        terms: NegotiationTerms,
    ) -> Result<NegotiationOutcome, NegotiationError> {
        negotiate(terms)
    }
}

fn recommendation_for(match_score: f64) -> String {
    let band = if match_score > 90.0 {
        "Excellent match - Highly recommended"
    } else if match_score > 75.0 {
        "Good match - Recommended"
    } else if match_score > 60.0 {
        "Fair match - Consider with caution"
    } else {
        "Poor match - Look for alternatives"
    };
    band.to_string()
}

fn risk_profile(candidate: &CarrierCandidate, load: &LoadOpportunity) -> (Vec<String>, Vec<String>) {
    let mut risks = Vec::new();
    let mut benefits = Vec::new();

    if candidate.performance_score >= 90.0 {
        benefits.push("Consistent on-time performance".to_string());
    } else {
        risks.push("Performance variability on recent loads".to_string());
    }

    if candidate.rate_expectation > load.estimated_carrier_rate {
        risks.push("Asking above lane target rate".to_string());
    } else {
        benefits.push("Rate expectation at or below lane target".to_string());
    }

    if candidate
        .home_base
        .state
        .eq_ignore_ascii_case(&load.origin.state)
    {
        benefits.push("Domiciled in the pickup state".to_string());
    }

    if candidate.equipment != load.equipment {
        risks.push(format!(
            "Equipment mismatch: has {}, load needs {}",
            candidate.equipment.label(),
            load.equipment.label()
        ));
    }

    (risks, benefits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::dispatch::domain::{
        CarrierId, DemandLevel, EquipmentType, LoadId, Place,
    };
    use chrono::NaiveDate;

    fn load(id: &str, margin: f64, confidence: f64, demand: DemandLevel) -> LoadOpportunity {
        LoadOpportunity {
            id: LoadId(id.to_string()),
            shipper_name: "TechCorp Industries".to_string(),
            origin: Place::new("Atlanta", "GA"),
            destination: Place::new("Dallas", "TX"),
            equipment: EquipmentType::DryVan,
            distance_miles: 924.0,
            pickup_date: NaiveDate::from_ymd_opt(2026, 9, 14).expect("valid date"),
            shipper_rate: 3000.0,
            estimated_carrier_rate: 2400.0,
            estimated_margin: margin,
            confidence,
            demand,
        }
    }

    fn candidate(id: &str, state: &str, performance: f64, expectation: f64) -> CarrierCandidate {
        CarrierCandidate {
            id: CarrierId(id.to_string()),
            name: "Elite Transport LLC".to_string(),
            mc_number: "MC-100001".to_string(),
            equipment: EquipmentType::DryVan,
            home_base: Place::new("Savannah", state),
            performance_score: performance,
            rate_expectation: expectation,
            available_on: NaiveDate::from_ymd_opt(2026, 9, 13).expect("valid date"),
        }
    }

    fn service() -> DispatchService {
        DispatchService::standard().expect("standard weights are valid")
    }

    #[test]
    fn ranks_loads_by_blended_score() {
        let ranked = service().rank_loads(
            vec![
                load("LOAD-1", 150.0, 60.0, DemandLevel::Low),
                load("LOAD-2", 600.0, 90.0, DemandLevel::High),
                load("LOAD-3", 450.0, 75.0, DemandLevel::Medium),
            ],
            Some(2),
        );

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked.items()[0].entity.id.0, "LOAD-2");
        assert_eq!(ranked.items()[1].entity.id.0, "LOAD-3");
        for item in ranked.items() {
            assert!((0.0..=100.0).contains(&item.score));
            assert_eq!(item.components.len(), 3);
        }
    }

    #[test]
    fn carrier_matches_carry_recommendations() {
        let load = load("LOAD-9", 450.0, 80.0, DemandLevel::High);
        let matches = service().match_carriers(
            &load,
            vec![
                candidate("CARRIER-1", "GA", 96.0, 2420.0),
                candidate("CARRIER-2", "IL", 70.0, 3100.0),
            ],
            None,
        );

        assert_eq!(matches.len(), 2);
        assert!(matches[0].match_score > matches[1].match_score);
        assert_eq!(matches[0].candidate.id.0, "CARRIER-1");
        assert!(matches[0].recommendation.contains("recommended"));
        assert!(matches[0]
            .benefits
            .iter()
            .any(|benefit| benefit.contains("pickup state")));
        assert!(matches[1]
            .risks
            .iter()
            .any(|risk| risk.contains("above lane target")));
    }

    #[test]
    fn scores_are_pure_functions_of_inputs() {
        let service = service();
        let sample = load("LOAD-5", 450.0, 75.0, DemandLevel::Medium);
        let first = service.score_load(&sample);
        let second = service.score_load(&sample);
        assert_eq!(first, second);
    }

    #[test]
    fn margin_component_scales_with_the_shipper_rate_share() {
        // $600 on $3000 is a 20% margin: sub-score 20 under a 0.4 weight.
        let scored = service().score_load(&load("LOAD-7", 600.0, 90.0, DemandLevel::High));
        let margin = scored
            .components
            .iter()
            .find(|component| component.factor == crate::scoring::FactorKind::MarginRatio)
            .expect("margin component present");
        assert!((margin.points - 8.0).abs() < 1e-9);
    }
}
