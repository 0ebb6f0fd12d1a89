use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::app::dto;
use crate::app::services::AppServices;
use crate::context::OptionalPrincipal;

pub fn router() -> Router {
    Router::new().route("/", get(marketplace_stats))
}

pub async fn marketplace_stats(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<OptionalPrincipal>,
) -> axum::response::Response {
    if let Some(p) = &principal.0 {
        tracing::debug!(user_id = %p.user_id(), username = p.username(), "stats requested");
    }

    match services.stats.summary().await {
        Ok(stats) => (StatusCode::OK, Json(serde_json::json!({ "stats": dto::stats_to_json(stats) }))).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "error fetching stats");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
