//! CLI demonstrations used for stakeholder walkthroughs: blended lead
//! discovery from the seeded simulator and a full dispatch cycle ending in
//! a negotiation transcript.

use chrono::{Local, NaiveDate};
use clap::Args;

use freight_ai::error::AppError;
use freight_ai::workflows::dispatch::{
    CarrierCandidate, CarrierId, DemandLevel, DispatchService, EquipmentType, LoadId,
    LoadOpportunity, NegotiationOutcome, NegotiationTerms, Party, Place,
};
use freight_ai::workflows::leads::{
    LeadDiscoveryService, LeadSource, ProspectQuery, SimulatedFactProvider,
};

#[derive(Args, Debug)]
pub(crate) struct NegotiateArgs {
    /// Carrier's opening ask (or the broker's standing offer)
    #[arg(long, default_value_t = 2000.0)]
    pub(crate) initial_offer: f64,
    /// Rate the brokerage is steering toward
    #[arg(long, default_value_t = 2500.0)]
    pub(crate) target_rate: f64,
    /// Rate the carrier is known to expect
    #[arg(long, default_value_t = 2450.0)]
    pub(crate) expectation: f64,
    /// Hard ceiling the brokerage may commit to
    #[arg(long, default_value_t = 3000.0)]
    pub(crate) rate_cap: f64,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Seed for the simulated fact provider
    #[arg(long, default_value_t = 2026)]
    pub(crate) seed: u64,
    /// Number of blended leads to surface
    #[arg(long, default_value_t = 9)]
    pub(crate) limit: usize,
}

pub(crate) fn run_negotiation(args: NegotiateArgs) -> Result<(), AppError> {
    let service = DispatchService::standard()?;
    let outcome = service.negotiate_rate(NegotiationTerms {
        initial_offer: args.initial_offer,
        target_rate: args.target_rate,
        counterpart_expectation: args.expectation,
        rate_cap: args.rate_cap,
    })?;

    print_transcript(&outcome);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let today = Local::now().date_naive();

    println!("== Blended lead discovery (seed {}) ==", args.seed);
    let discovery = LeadDiscoveryService::standard();
    let provider = SimulatedFactProvider::new(args.seed);
    let query = ProspectQuery {
        industry: None,
        state: None,
        per_source: 8,
    };
    let sources = [
        LeadSource::BusinessRegistry,
        LeadSource::PublicFilings,
        LeadSource::TradeExports,
    ];
    let leads = discovery.discover(&provider, &query, &sources, args.limit, today)?;

    for (position, lead) in leads.iter().enumerate() {
        println!(
            "{:>2}. [{:>5.1}] {:<28} {:<16} {}  est. ${:.0}/yr",
            position + 1,
            lead.score,
            lead.company.name,
            lead.company.industry,
            lead.company.source.label(),
            lead.potential_value,
        );
    }

    println!();
    println!("== Carrier matching ==");
    let dispatch = DispatchService::standard()?;
    let load = demo_load();
    let matches = dispatch.match_carriers(&load, demo_candidates(), Some(3));
    for entry in &matches {
        println!(
            "[{:>5.1}] {:<26} {}",
            entry.match_score, entry.candidate.name, entry.recommendation
        );
    }

    println!();
    println!("== Rate negotiation with top match ==");
    let expectation = matches
        .first()
        .map(|entry| entry.candidate.rate_expectation)
        .unwrap_or(load.estimated_carrier_rate);
    let outcome = dispatch.negotiate_rate(NegotiationTerms {
        initial_offer: load.estimated_carrier_rate * 0.9,
        target_rate: load.estimated_carrier_rate,
        counterpart_expectation: expectation,
        rate_cap: load.shipper_rate * 0.85,
    })?;
    print_transcript(&outcome);

    Ok(())
}

fn print_transcript(outcome: &NegotiationOutcome) {
    for step in &outcome.log {
        let actor = match step.actor {
            Party::Broker => "broker ",
            Party::Carrier => "carrier",
        };
        println!(
            "round {} {} ${:>9.2}  {}",
            step.round, actor, step.rate, step.message
        );
    }
    if outcome.success {
        println!(
            "agreed at ${:.2} after {} round(s)",
            outcome.final_rate, outcome.rounds_used
        );
    } else {
        println!(
            "no agreement after {} rounds; last exchanged rate ${:.2}",
            outcome.rounds_used, outcome.final_rate
        );
    }
}

fn demo_load() -> LoadOpportunity {
    LoadOpportunity {
        id: LoadId("LOAD-DEMO-1".to_string()),
        shipper_name: "Global Manufacturing Inc".to_string(),
        origin: Place::new("Atlanta", "GA"),
        destination: Place::new("Dallas", "TX"),
        equipment: EquipmentType::DryVan,
        distance_miles: 924.0,
        pickup_date: demo_pickup_date(),
        shipper_rate: 3000.0,
        estimated_carrier_rate: 2400.0,
        estimated_margin: 600.0,
        confidence: 88.0,
        demand: DemandLevel::High,
    }
}

fn demo_pickup_date() -> NaiveDate {
    Local::now()
        .date_naive()
        .checked_add_days(chrono::Days::new(3))
        .unwrap_or_else(|| Local::now().date_naive())
}

fn demo_candidates() -> Vec<CarrierCandidate> {
    let base = demo_pickup_date();
    [
        ("Elite Transport LLC", "GA", 96.0, 2420.0),
        ("Reliable Logistics Inc", "TN", 88.0, 2350.0),
        ("Prime Carriers Corp", "TX", 91.0, 2550.0),
        ("Regional Transport LLC", "IL", 74.0, 2250.0),
    ]
    .into_iter()
    .enumerate()
    .map(|(index, (name, state, performance, expectation))| CarrierCandidate {
        id: CarrierId(format!("CARRIER-{}", index + 1)),
        name: name.to_string(),
        mc_number: format!("MC-{}", 100_000 + index),
        equipment: EquipmentType::DryVan,
        home_base: Place::new("", state),
        performance_score: performance,
        rate_expectation: expectation,
        available_on: base,
    })
    .collect()
}
