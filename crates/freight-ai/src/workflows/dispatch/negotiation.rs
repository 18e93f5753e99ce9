//! Bounded-round rate negotiation between the automated broker and a
//! carrier with a fixed expectation.
//!
//! The exchange is deterministic: the broker concedes toward its target by a
//! shrinking fraction each round, the carrier accepts anything within 5% of
//! its expectation and otherwise counters at the midpoint. The simulation
//! always terminates within [`MAX_ROUNDS`] rounds and returns the full
//! transcript for audit.

use serde::{Deserialize, Serialize};
use tracing::debug;

pub const MAX_ROUNDS: u8 = 3;

/// Carrier accepts when an offer lands within this share of its expectation.
const ACCEPTANCE_TOLERANCE: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Party {
    Broker,
    Carrier,
}

/// One side of a single exchange, kept for the audit transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NegotiationStep {
    pub round: u8,
    pub actor: Party,
    pub rate: f64,
    pub message: String,
    pub reasoning: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NegotiationOutcome {
    pub final_rate: f64,
    pub success: bool,
    pub rounds_used: u8,
    pub log: Vec<NegotiationStep>,
}

/// Inputs for one negotiation. `rate_cap` is the hard ceiling the broker may
/// commit to (e.g. 85% of the shipper rate).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NegotiationTerms {
    pub initial_offer: f64,
    pub target_rate: f64,
    pub counterpart_expectation: f64,
    pub rate_cap: f64,
}

impl NegotiationTerms {
    fn validate(&self) -> Result<(), NegotiationError> {
        let rates = [
            self.initial_offer,
            self.target_rate,
            self.counterpart_expectation,
            self.rate_cap,
        ];
        if rates.iter().any(|rate| !rate.is_finite() || *rate <= 0.0) {
            return Err(NegotiationError::InvalidTerms);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NegotiationError {
    #[error("negotiation rates must be positive and finite")]
    InvalidTerms,
}

enum CounterpartResponse {
    Accepted,
    Counter(f64),
}

/// Run the negotiation to completion. Success means the carrier accepted an
/// offer; exhaustion after [`MAX_ROUNDS`] rounds reports the last exchanged
/// value with `success == false`.
pub fn negotiate(terms: NegotiationTerms) -> Result<NegotiationOutcome, NegotiationError> {
    terms.validate()?;

    let mut current = terms.initial_offer;
    let mut log = Vec::new();
    let mut success = false;
    let mut rounds_used = 0;

    // A standing offer already inside the carrier's tolerance needs no
    // concession round.
    if within_tolerance(current, terms.counterpart_expectation) {
        debug!(rate = current, "standing offer accepted without concession");
        log.push(carrier_acceptance(1, current));
        return Ok(NegotiationOutcome {
            final_rate: current,
            success: true,
            rounds_used: 1,
            log,
        });
    }

    for round in 1..=MAX_ROUNDS {
        rounds_used = round;

        // Proposing: concede toward the target by a fraction that shrinks
        // with each round, never crossing the target or the hard cap.
        let offer = next_offer(current, terms.target_rate, terms.rate_cap, round);
        log.push(NegotiationStep {
            round,
            actor: Party::Broker,
            rate: offer,
            message: format!(
                "Based on current market conditions and your performance history, we can offer ${offer:.2}"
            ),
            reasoning: format!(
                "Round {round} concession toward lane target ${:.2} within cap ${:.2}",
                terms.target_rate, terms.rate_cap
            ),
        });

        // Evaluating: carrier accepts within tolerance, otherwise counters
        // at the midpoint and the counter becomes the next standing offer.
        match counterpart_response(offer, terms.counterpart_expectation) {
            CounterpartResponse::Accepted => {
                log.push(carrier_acceptance(round, offer));
                current = offer;
                success = true;
                break;
            }
            CounterpartResponse::Counter(counter) => {
                log.push(NegotiationStep {
                    round,
                    actor: Party::Carrier,
                    rate: counter,
                    message: format!("Counter offer: ${counter:.2}"),
                    reasoning: "Market rate analysis and operational costs".to_string(),
                });
                current = counter;
            }
        }
    }

    debug!(success, rounds_used, final_rate = current, "negotiation settled");

    Ok(NegotiationOutcome {
        final_rate: current,
        success,
        rounds_used,
        log,
    })
}

fn next_offer(current: f64, target: f64, cap: f64, round: u8) -> f64 {
    let raw = current + (target - current) * (0.5 / f64::from(round));
    let toward_target = if target >= current {
        raw.min(target)
    } else {
        raw.max(target)
    };
    toward_target.min(cap)
}

fn within_tolerance(offer: f64, expectation: f64) -> bool {
    (offer - expectation).abs() <= ACCEPTANCE_TOLERANCE * expectation
}

fn counterpart_response(offer: f64, expectation: f64) -> CounterpartResponse {
    if within_tolerance(offer, expectation) {
        CounterpartResponse::Accepted
    } else {
        CounterpartResponse::Counter((offer + expectation) / 2.0)
    }
}

fn carrier_acceptance(round: u8, rate: f64) -> NegotiationStep {
    NegotiationStep {
        round,
        actor: Party::Carrier,
        rate,
        message: format!("Rate accepted: ${rate:.2}"),
        reasoning: "Offer within acceptable band of expectation".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(initial: f64, target: f64, expectation: f64, cap: f64) -> NegotiationTerms {
        NegotiationTerms {
            initial_offer: initial,
            target_rate: target,
            counterpart_expectation: expectation,
            rate_cap: cap,
        }
    }

    #[test]
    fn converges_in_two_rounds_on_reference_exchange() {
        let outcome = negotiate(terms(2000.0, 2500.0, 2450.0, 3000.0)).expect("valid terms");

        assert!(outcome.success);
        assert_eq!(outcome.rounds_used, 2);
        assert!((outcome.final_rate - 2387.5).abs() < 1e-9);

        // Round 1: broker offers 2250, carrier counters at the midpoint.
        assert_eq!(outcome.log[0].actor, Party::Broker);
        assert!((outcome.log[0].rate - 2250.0).abs() < 1e-9);
        assert_eq!(outcome.log[1].actor, Party::Carrier);
        assert!((outcome.log[1].rate - 2350.0).abs() < 1e-9);

        // Round 2: broker offer accepted.
        assert!((outcome.log[2].rate - 2387.5).abs() < 1e-9);
        assert_eq!(outcome.log.last().map(|step| step.actor), Some(Party::Carrier));
    }

    #[test]
    fn standing_offer_within_tolerance_succeeds_in_round_one() {
        let outcome = negotiate(terms(2400.0, 2800.0, 2450.0, 3000.0)).expect("valid terms");

        assert!(outcome.success);
        assert_eq!(outcome.rounds_used, 1);
        assert_eq!(outcome.final_rate, 2400.0);
    }

    #[test]
    fn always_terminates_within_three_rounds() {
        let outcome = negotiate(terms(1000.0, 3000.0, 9000.0, 2500.0)).expect("valid terms");

        assert!(!outcome.success);
        assert_eq!(outcome.rounds_used, MAX_ROUNDS);
        // Final rate is the carrier's last counter.
        assert_eq!(outcome.log.last().map(|step| step.actor), Some(Party::Carrier));
        assert_eq!(
            outcome.log.last().map(|step| step.rate),
            Some(outcome.final_rate)
        );
    }

    #[test]
    fn offers_never_exceed_rate_cap() {
        let cap = 2300.0;
        let outcome = negotiate(terms(2000.0, 2600.0, 2550.0, cap)).expect("valid terms");

        for step in outcome
            .log
            .iter()
            .filter(|step| step.actor == Party::Broker)
        {
            assert!(step.rate <= cap, "broker offered {} above cap", step.rate);
        }
    }

    #[test]
    fn downward_negotiation_floors_at_target() {
        // Carrier asks above what the brokerage wants to pay; broker walks
        // the rate down without ever undercutting its own target.
        let outcome = negotiate(terms(3200.0, 2600.0, 2700.0, 3400.0)).expect("valid terms");

        for step in outcome
            .log
            .iter()
            .filter(|step| step.actor == Party::Broker)
        {
            assert!(step.rate >= 2600.0);
        }
        assert!(outcome.success);
    }

    #[test]
    fn rejects_non_positive_rates() {
        assert_eq!(
            negotiate(terms(0.0, 2500.0, 2450.0, 3000.0)),
            Err(NegotiationError::InvalidTerms)
        );
        assert_eq!(
            negotiate(terms(2000.0, f64::NAN, 2450.0, 3000.0)),
            Err(NegotiationError::InvalidTerms)
        );
    }
}
