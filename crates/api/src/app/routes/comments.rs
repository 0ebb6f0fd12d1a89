use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use anythink_infra::queries::QueryError;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_comments))
        // GET takes an item id, DELETE a comment id.
        .route("/:id", get(recent_item_comments).delete(delete_comment))
}

pub async fn list_comments(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    match services.comments.list().await {
        Ok(comments) => {
            let body = comments.into_iter().map(dto::comment_to_json).collect::<Vec<_>>();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => errors::query_error_to_response(e),
    }
}

pub async fn delete_comment(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match services.comments.delete(&id).await {
        Ok(deleted) => (StatusCode::OK, Json(dto::comment_to_json(deleted))).into_response(),
        Err(QueryError::InvalidId(_)) => {
            errors::message_error(StatusCode::BAD_REQUEST, errors::INVALID_COMMENT_ID)
        }
        Err(QueryError::NotFound) => errors::message_error(StatusCode::NOT_FOUND, errors::COMMENT_NOT_FOUND),
        Err(e) => errors::query_error_to_response(e),
    }
}

pub async fn recent_item_comments(
    Extension(services): Extension<Arc<AppServices>>,
    Path(item_id): Path<String>,
) -> axum::response::Response {
    match services.item_comments.recent_for_item(&item_id).await {
        Ok(comments) => {
            let comments = comments
                .into_iter()
                .map(dto::item_comment_to_json)
                .collect::<Vec<_>>();
            (StatusCode::OK, Json(serde_json::json!({ "comments": comments }))).into_response()
        }
        Err(QueryError::InvalidId(_)) => {
            errors::field_error(StatusCode::BAD_REQUEST, "itemId", errors::INVALID_OBJECT_ID)
        }
        Err(e) => errors::query_error_to_response(e),
    }
}
