//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: store selection and query components
//! - `routes/`: HTTP routes + handlers (one file per resource)
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};

use crate::config::ApiConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

pub use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub async fn build_app(config: &ApiConfig) -> anyhow::Result<Router> {
    let services = services::build_services(&config.store).await?;
    Ok(build_app_with_services(services, config.jwt_secret.clone()))
}

/// Build the router around already-constructed services (tests inject stores here).
pub fn build_app_with_services(services: AppServices, jwt_secret: String) -> Router {
    let jwt = Arc::new(anythink_auth::Hs256JwtValidator::new(jwt_secret.into_bytes()));
    let auth_state = middleware::AuthState { jwt };

    // Comment creation requires a signed-in user.
    let items = routes::items::router().route_layer(axum::middleware::from_fn_with_state(
        auth_state.clone(),
        middleware::auth_middleware,
    ));

    // Stats accept anonymous callers but reject bad tokens.
    let stats = routes::stats::router().route_layer(axum::middleware::from_fn_with_state(
        auth_state,
        middleware::optional_auth_middleware,
    ));

    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/comments", routes::comments::router())
        .nest("/items", items)
        .nest("/stats", stats)
        .layer(Extension(Arc::new(services)))
}
