use crate::infra::AppState;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;

use freight_ai::error::AppError;
use freight_ai::workflows::dispatch::{dispatch_router, DispatchService};
use freight_ai::workflows::leads::{
    parse_registry_csv, Lead, LeadDiscoveryService, LeadSource, ProspectQuery,
    SimulatedFactProvider,
};

const DEFAULT_LEAD_LIMIT: usize = 10;

const ALL_SOURCES: &[LeadSource] = &[
    LeadSource::BusinessRegistry,
    LeadSource::PublicFilings,
    LeadSource::TradeExports,
];

#[derive(Debug, Deserialize)]
pub(crate) struct LeadDiscoveryRequest {
    #[serde(default)]
    pub(crate) query: ProspectQuery,
    #[serde(default)]
    pub(crate) sources: Option<Vec<LeadSource>>,
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// Seed for the simulated fact provider; random when omitted.
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    /// When present, records come from this CSV instead of the provider.
    #[serde(default)]
    pub(crate) registry_csv: Option<String>,
    #[serde(default)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub(crate) struct LeadDiscoveryResponse {
    pub(crate) data_source: LeadDataSource,
    pub(crate) count: usize,
    pub(crate) leads: Vec<Lead>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum LeadDataSource {
    RegistryCsv,
    Simulated,
}

pub(crate) fn with_routes(
    dispatch: Arc<DispatchService>,
    leads: Arc<LeadDiscoveryService>,
) -> axum::Router {
    dispatch_router(dispatch)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/leads/discover",
            axum::routing::post(lead_discovery_endpoint).with_state(leads),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn lead_discovery_endpoint(
    State(service): State<Arc<LeadDiscoveryService>>,
    Json(payload): Json<LeadDiscoveryRequest>,
) -> Result<Json<LeadDiscoveryResponse>, AppError> {
    let LeadDiscoveryRequest {
        query,
        sources,
        limit,
        seed,
        registry_csv,
        today,
    } = payload;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let limit = limit.unwrap_or(DEFAULT_LEAD_LIMIT);

    let (leads, data_source) = if let Some(csv) = registry_csv {
        let records = parse_registry_csv(Cursor::new(csv.into_bytes()))?;
        let leads = service.qualify(records, Some(limit), today);
        (leads, LeadDataSource::RegistryCsv)
    } else {
        let provider = SimulatedFactProvider::new(seed.unwrap_or_else(rand::random));
        let sources = sources.unwrap_or_else(|| ALL_SOURCES.to_vec());
        let leads = service.discover(&provider, &query, &sources, limit, today)?;
        (leads, LeadDataSource::Simulated)
    };

    Ok(Json(LeadDiscoveryResponse {
        data_source,
        count: leads.len(),
        leads,
    }))
}
