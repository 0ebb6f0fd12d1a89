//! `anythink-auth` — bearer token verification for the marketplace API.
//!
//! This crate is intentionally decoupled from HTTP and storage.

pub mod claims;
pub mod validator;

pub use claims::{JwtClaims, TokenValidationError, validate_claims};
pub use validator::{Hs256JwtValidator, JwtError, JwtValidator};
