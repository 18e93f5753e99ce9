use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{CarrierCandidate, CarrierMatch, LoadOpportunity};
use super::negotiation::{NegotiationOutcome, NegotiationTerms};
use super::service::DispatchService;
use crate::scoring::ScoredEntity;

/// Router builder exposing the dispatch operations over HTTP.
pub fn dispatch_router(service: Arc<DispatchService>) -> Router {
    Router::new()
        .route("/api/v1/dispatch/loads/rank", post(rank_loads_handler))
        .route(
            "/api/v1/dispatch/carriers/match",
            post(match_carriers_handler),
        )
        .route("/api/v1/dispatch/negotiations", post(negotiate_handler))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub struct RankLoadsRequest {
    pub loads: Vec<LoadOpportunity>,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RankLoadsResponse {
    pub count: usize,
    pub loads: Vec<ScoredEntity<LoadOpportunity>>,
}

pub(crate) async fn rank_loads_handler(
    State(service): State<Arc<DispatchService>>,
    axum::Json(request): axum::Json<RankLoadsRequest>,
) -> Response {
    let ranked = service.rank_loads(request.loads, request.limit);
    let loads = ranked.into_items();
    let body = RankLoadsResponse {
        count: loads.len(),
        loads,
    };
    (StatusCode::OK, axum::Json(body)).into_response()
}

#[derive(Debug, Deserialize)]
pub struct MatchCarriersRequest {
    pub load: LoadOpportunity,
    pub candidates: Vec<CarrierCandidate>,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct MatchCarriersResponse {
    pub count: usize,
    pub matches: Vec<CarrierMatch>,
}

pub(crate) async fn match_carriers_handler(
    State(service): State<Arc<DispatchService>>,
    axum::Json(request): axum::Json<MatchCarriersRequest>,
) -> Response {
    let matches = service.match_carriers(&request.load, request.candidates, request.limit);
    let body = MatchCarriersResponse {
        count: matches.len(),
        matches,
    };
    (StatusCode::OK, axum::Json(body)).into_response()
}

#[derive(Debug, Serialize)]
pub struct NegotiationResponse {
    #[serde(flatten)]
    pub outcome: NegotiationOutcome,
}

pub(crate) async fn negotiate_handler(
    State(service): State<Arc<DispatchService>>,
    axum::Json(terms): axum::Json<NegotiationTerms>,
) -> Response {
    match service.negotiate_rate(terms) {
        Ok(outcome) => {
            (StatusCode::OK, axum::Json(NegotiationResponse { outcome })).into_response()
        }
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}
