use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{Method, Uri};
use axum::routing::{get, post};
use axum::{Json, Router};
use kpi_engine::{activity_limit, authenticate, summarize, validate_credentials, ActivityRecord, AnalyticsSummary, KpiSnapshot, SalesQuery, SalesRecord};
use serde_json::Value;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::envelope::{now_stamp, Envelope, HealthResponse, LoginResponse};
use crate::error::ApiError;
use crate::state::AppState;

type Params = Query<HashMap<String, String>>;

/// Full HTTP surface. Paths exist under `/api` only; anything else, including
/// a known path with the wrong method, answers 404 NOT_FOUND.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/login", post(login).fallback(not_found))
        .route("/api/kpis", get(kpis).fallback(not_found))
        .route("/api/sales", get(sales).fallback(not_found))
        .route("/api/activity", get(activity).fallback(not_found))
        .route("/api/analytics/summary", get(analytics_summary).fallback(not_found))
        .route("/api/health", get(health).fallback(not_found))
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn login(State(state): State<AppState>, body: Bytes) -> Result<Json<LoginResponse>, ApiError> {
    // a body that isn't JSON carries no fields
    let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let creds = validate_credentials(&body)?;
    let users = state.source.users().map_err(|e| ApiError::internal("LOGIN_ERROR", "Login failed", e))?;
    match authenticate(users, creds) {
        Ok(user) => {
            info!(target = "dashboard", username = %user.username, role = ?user.role, "login succeeded");
            Ok(Json(LoginResponse { success: true, user, timestamp: now_stamp() }))
        }
        Err(e) => {
            warn!(target = "dashboard", username = %creds.username, "login rejected");
            Err(e.into())
        }
    }
}

async fn kpis(State(state): State<AppState>) -> Result<Json<Envelope<KpiSnapshot>>, ApiError> {
    let (metrics, trends) = state.source.kpis().map_err(|e| ApiError::internal("KPIS_ERROR", "Failed to fetch KPI data", e))?;
    let snapshot = KpiSnapshot { metrics, trends, last_updated: now_stamp() };
    Ok(Json(Envelope::new(snapshot)))
}

async fn sales(State(state): State<AppState>, Query(params): Params) -> Result<Json<Envelope<Vec<SalesRecord>>>, ApiError> {
    let series = state.source.sales().map_err(|e| ApiError::internal("SALES_DATA_ERROR", "Failed to fetch sales data", e))?;
    let query = SalesQuery::from_params(
        params.get("startDate").map(String::as_str),
        params.get("endDate").map(String::as_str),
        params.get("limit").map(String::as_str),
    );
    debug!(target = "dashboard", ?query, "sales query");
    Ok(Json(Envelope::list(query.apply(&series))))
}

async fn activity(State(state): State<AppState>, Query(params): Params) -> Result<Json<Envelope<Vec<ActivityRecord>>>, ApiError> {
    let limit = activity_limit(params.get("limit").map(String::as_str))?;
    let feed = state.source.activity().map_err(|e| ApiError::internal("ACTIVITY_ERROR", "Failed to fetch activity data", e))?;
    Ok(Json(Envelope::list(feed.into_iter().take(limit).collect())))
}

async fn analytics_summary(State(state): State<AppState>) -> Result<Json<Envelope<AnalyticsSummary>>, ApiError> {
    let series = state.source.sales().map_err(|e| ApiError::internal("ANALYTICS_ERROR", "Failed to compute analytics summary", e))?;
    Ok(Json(Envelope::new(summarize(&series))))
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: now_stamp(),
        uptime: state.started.elapsed().as_secs_f64(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn not_found(method: Method, uri: Uri) -> ApiError {
    debug!(target = "dashboard", %method, %uri, "no route");
    ApiError::NotFound
}
