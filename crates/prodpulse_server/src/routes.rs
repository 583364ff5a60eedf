//! Product health HTTP routes.
//!
//! # Responsibility
//! - Decode request bodies, delegate to [`ProductHealthService`], encode
//!   responses.
//! - Map repository failures onto HTTP statuses.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use indexmap::IndexMap;
use log::{error, info};
use prodpulse_core::{
    PagedResult, ProductHealth, ProductHealthService, RepoError, SqliteProductHealthRepository,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;

// ==================
// Request/Response Types
// ==================

/// Search request body for `POST /product-health/search`.
///
/// `sort_by` is an ordered JSON object mapping field name to direction;
/// entry order is sort precedence, so the map must preserve it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub min_health_score: i64,
    pub page: i64,
    pub size: i64,
    #[serde(default)]
    pub sort_by: Option<IndexMap<String, String>>,
}

/// Error body shared by all endpoints.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

// ==================
// Router
// ==================

/// Builds the application router.
pub fn app_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route("/product-health", post(create_product_handler))
        .route("/product-health/search", post(search_products_handler))
        .layer(cors)
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn create_product_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ProductHealth>,
) -> Result<(StatusCode, Json<ProductHealth>), (StatusCode, Json<ErrorResponse>)> {
    let result = state.with_conn(|conn| {
        let service = ProductHealthService::new(SqliteProductHealthRepository::new(conn));
        service.save_product_health(&request)
    });

    match result {
        Ok(created) => {
            info!(
                "event=create_product module=http status=ok product={}",
                created.product_name
            );
            Ok((StatusCode::CREATED, Json(created)))
        }
        Err(err) => {
            error!(
                "event=create_product module=http status=error product={} error={err}",
                request.product_name
            );
            Err(error_response(&err))
        }
    }
}

async fn search_products_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<PagedResult<ProductHealth>>, (StatusCode, Json<ErrorResponse>)> {
    let sort_by: Vec<(String, String)> = request
        .sort_by
        .iter()
        .flatten()
        .map(|(field, direction)| (field.clone(), direction.clone()))
        .collect();

    let result = state.with_conn(|conn| {
        let service = ProductHealthService::new(SqliteProductHealthRepository::new(conn));
        service.find_by_min_health_score(
            request.min_health_score,
            request.page,
            request.size,
            &sort_by,
        )
    });

    match result {
        Ok(page) => {
            info!(
                "event=search_products module=http status=ok min_score={} page={} total_items={}",
                request.min_health_score, request.page, page.total_items
            );
            Ok(Json(page))
        }
        Err(err) => {
            error!(
                "event=search_products module=http status=error min_score={} page={} error={err}",
                request.min_health_score, request.page
            );
            Err(error_response(&err))
        }
    }
}

/// Maps repository failures onto HTTP statuses.
///
/// Plan errors are caller mistakes (400), duplicates conflict (409), and
/// store failures surface as 503 with no retry.
fn error_response(err: &RepoError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match err {
        RepoError::Query(_) => StatusCode::BAD_REQUEST,
        RepoError::Duplicate(_) => StatusCode::CONFLICT,
        RepoError::NotFound(_) => StatusCode::NOT_FOUND,
        RepoError::Db(_) => StatusCode::SERVICE_UNAVAILABLE,
    };

    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
            code: status.as_u16(),
        }),
    )
}
