//! Contract endpoint handlers
//!
//! The list endpoint composes the cached collection with the pure query
//! pipeline: filter, sort, paginate. Detail and insight endpoints read
//! through the per-id cache.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::debug;

use crate::api::auth::RequireSession;
use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::contract::{Contract, ContractDraft, ContractStatus, ContractSummary, RiskLevel};
use crate::domain::insight::{insights_for, Insight};
use crate::domain::query::{paginate, sort_contracts, ContractStats, ListFilter, Page, SortKey, SortOrder};

pub fn create_contracts_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_contracts).post(create_contract))
        .route("/stats", get(contract_stats))
        .route("/expiring", get(expiring_contracts))
        .route("/refresh", post(refresh_contracts))
        .route("/{id}", get(get_contract))
        .route("/{id}/insights", get(contract_insights))
}

/// Query parameters for the list view
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    /// Case-insensitive substring over name OR parties
    pub q: Option<String>,
    pub status: Option<ContractStatus>,
    pub risk: Option<RiskLevel>,
    #[serde(default)]
    pub sort: SortKey,
    #[serde(default)]
    pub order: SortOrder,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct ExpiringParams {
    pub days: Option<i64>,
}

/// GET /contracts
pub async fn list_contracts(
    State(state): State<AppState>,
    _session: RequireSession,
    Query(params): Query<ListParams>,
) -> Result<Json<Page<ContractSummary>>, ApiError> {
    debug!(?params, "Listing contracts");

    let collection = state.store.collection().await.map_err(ApiError::from)?;

    let filter = ListFilter {
        search: params.q.filter(|q| !q.trim().is_empty()),
        status: params.status,
        risk: params.risk,
    };
    let mut filtered = filter.apply(&collection);
    sort_contracts(&mut filtered, params.sort, params.order);

    let page = paginate(
        &filtered,
        params.page.unwrap_or(1),
        params.per_page.unwrap_or(state.page_size),
    );

    Ok(Json(page))
}

/// GET /contracts/stats
pub async fn contract_stats(
    State(state): State<AppState>,
    _session: RequireSession,
) -> Result<Json<ContractStats>, ApiError> {
    let stats = state.store.stats().await.map_err(ApiError::from)?;
    Ok(Json(stats))
}

/// GET /contracts/expiring
pub async fn expiring_contracts(
    State(state): State<AppState>,
    _session: RequireSession,
    Query(params): Query<ExpiringParams>,
) -> Result<Json<Vec<ContractSummary>>, ApiError> {
    let days = params.days.unwrap_or(state.expiring_window_days);
    if days < 0 {
        return Err(ApiError::bad_request("'days' must not be negative"));
    }

    let contracts = state
        .store
        .service()
        .expiring_within(days)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(contracts))
}

/// POST /contracts/refresh
pub async fn refresh_contracts(
    State(state): State<AppState>,
    _session: RequireSession,
) -> Result<Json<Vec<ContractSummary>>, ApiError> {
    debug!("Forcing collection refresh");

    let collection = state
        .store
        .refresh_collection()
        .await
        .map_err(ApiError::from)?;

    Ok(Json(collection))
}

/// GET /contracts/{id}
pub async fn get_contract(
    State(state): State<AppState>,
    _session: RequireSession,
    Path(id): Path<String>,
) -> Result<Json<Contract>, ApiError> {
    debug!(contract_id = %id, "Getting contract detail");

    let contract = state.store.detail(&id).await.map_err(ApiError::from)?;
    Ok(Json(contract))
}

/// GET /contracts/{id}/insights
pub async fn contract_insights(
    State(state): State<AppState>,
    _session: RequireSession,
    Path(id): Path<String>,
) -> Result<Json<Vec<Insight>>, ApiError> {
    let contract = state.store.detail(&id).await.map_err(ApiError::from)?;
    let insights = insights_for(&contract, Utc::now().date_naive());

    Ok(Json(insights))
}

/// POST /contracts
pub async fn create_contract(
    State(state): State<AppState>,
    _session: RequireSession,
    Json(draft): Json<ContractDraft>,
) -> Result<(StatusCode, Json<ContractSummary>), ApiError> {
    let summary = state
        .store
        .add_contract(draft)
        .await
        .map_err(ApiError::from)?;

    Ok((StatusCode::CREATED, Json(summary)))
}
