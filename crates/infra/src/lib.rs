//! Infrastructure layer: document stores and the read/write queries built on them.

pub mod queries;
pub mod store;
