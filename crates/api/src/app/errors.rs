//! Error response shapes.
//!
//! Two body shapes are in use: `{"message": ...}` for record-level failures
//! and `{"errors": {field: [...]}}` for input validation.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use anythink_infra::queries::QueryError;

pub const INVALID_COMMENT_ID: &str = "Invalid comment id";
pub const COMMENT_NOT_FOUND: &str = "Comment not found";
pub const ITEM_NOT_FOUND: &str = "Item not found";
pub const INVALID_OBJECT_ID: &str = "must be a valid ObjectId";

pub fn message_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "message": message.into(),
        })),
    )
        .into_response()
}

pub fn field_error(
    status: StatusCode,
    field: &str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "errors": { field: [message.into()] },
        })),
    )
        .into_response()
}

/// Fallback for failures a route does not map specially.
pub fn query_error_to_response(err: QueryError) -> axum::response::Response {
    match err {
        QueryError::InvalidId(msg) => message_error(StatusCode::BAD_REQUEST, msg),
        QueryError::NotFound => message_error(StatusCode::NOT_FOUND, "Not found"),
        QueryError::Validation { field, message } => {
            field_error(StatusCode::UNPROCESSABLE_ENTITY, field, message)
        }
        QueryError::Store(e) => {
            tracing::error!(error = %e, "store failure");
            message_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
