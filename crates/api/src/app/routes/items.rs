use std::sync::Arc;

use axum::{
    extract::{Extension, Path, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use chrono::Utc;

use anythink_infra::queries::QueryError;

use crate::app::{dto, errors};
use crate::app::services::AppServices;
use crate::context::PrincipalContext;

pub fn router() -> Router {
    Router::new().route("/:item_id/comments", post(create_comment))
}

pub async fn create_comment(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(item_id): Path<String>,
    payload: Result<Json<dto::CreateCommentRequest>, JsonRejection>,
) -> axum::response::Response {
    // Unreadable payloads count as a blank body.
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "unreadable comment payload");
            dto::CreateCommentRequest::default()
        }
    };

    let created = services
        .comments
        .create(&item_id, principal.user_id(), &req.comment.body, Utc::now())
        .await;

    match created {
        Ok(comment) => (
            StatusCode::CREATED,
            Json(serde_json::json!({ "comment": dto::comment_to_json(comment) })),
        )
            .into_response(),
        Err(QueryError::InvalidId(_)) => {
            errors::field_error(StatusCode::BAD_REQUEST, "itemId", errors::INVALID_OBJECT_ID)
        }
        Err(QueryError::NotFound) => errors::message_error(StatusCode::NOT_FOUND, errors::ITEM_NOT_FOUND),
        Err(e) => errors::query_error_to_response(e),
    }
}
