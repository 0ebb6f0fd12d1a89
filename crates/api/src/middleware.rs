use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use anythink_auth::JwtValidator;

use crate::context::{OptionalPrincipal, PrincipalContext};

#[derive(Clone)]
pub struct AuthState {
    pub jwt: Arc<dyn JwtValidator>,
}

impl AuthState {
    fn principal(&self, token: &str) -> Result<PrincipalContext, StatusCode> {
        let claims = self.jwt.validate(token, Utc::now()).map_err(|e| {
            tracing::debug!(error = %e, "rejected bearer token");
            StatusCode::UNAUTHORIZED
        })?;
        Ok(PrincipalContext::from_claims(claims))
    }
}

/// Require a valid bearer token; inserts [`PrincipalContext`].
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let token = extract_bearer(req.headers())?.ok_or(StatusCode::UNAUTHORIZED)?;
    let principal = state.principal(token)?;

    req.extensions_mut().insert(principal);

    Ok(next.run(req).await)
}

/// Accept anonymous requests; a token that is present must still be valid.
/// Inserts [`OptionalPrincipal`].
pub async fn optional_auth_middleware(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let principal = match extract_bearer(req.headers())? {
        Some(token) => Some(state.principal(token)?),
        None => None,
    };

    req.extensions_mut().insert(OptionalPrincipal(principal));

    Ok(next.run(req).await)
}

/// `Ok(None)` when there is no Authorization header; malformed headers are 401.
fn extract_bearer(headers: &HeaderMap) -> Result<Option<&str>, StatusCode> {
    let Some(header) = headers.get(axum::http::header::AUTHORIZATION) else {
        return Ok(None);
    };

    let header = header.to_str().map_err(|_| StatusCode::UNAUTHORIZED)?;

    let header = header
        .strip_prefix("Bearer ")
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let token = header.trim();
    if token.is_empty() {
        return Err(StatusCode::UNAUTHORIZED);
    }

    Ok(Some(token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, header::AUTHORIZATION};

    fn headers(value: &str) -> HeaderMap {
        let mut h = HeaderMap::new();
        h.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        h
    }

    #[test]
    fn missing_header_is_anonymous() {
        assert_eq!(extract_bearer(&HeaderMap::new()), Ok(None));
    }

    #[test]
    fn bearer_token_is_extracted() {
        let h = headers("Bearer abc.def.ghi");
        assert_eq!(extract_bearer(&h), Ok(Some("abc.def.ghi")));
    }

    #[test]
    fn other_schemes_and_empty_tokens_are_rejected() {
        for value in ["Basic dXNlcjpwYXNz", "Bearer ", "Bearer    ", "abc"] {
            assert_eq!(extract_bearer(&headers(value)), Err(StatusCode::UNAUTHORIZED), "{value}");
        }
    }
}
