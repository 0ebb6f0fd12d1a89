//! `anythink-core` — identifiers and errors shared by every marketplace crate.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::{CommentId, ItemId, UserId};
