//! Document store abstractions, one trait per collection.
//!
//! Query components receive these as `Arc<dyn ...>` handles when they are
//! built; nothing resolves a collection by name at call time.

pub mod in_memory;
#[cfg(feature = "mongodb")]
pub mod mongo;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use anythink_core::{CommentId, ItemId, UserId};
use anythink_marketplace::{Comment, Item, ItemComment, User};

pub use in_memory::{InMemoryCommentStore, InMemoryItemStore, InMemoryUserStore};
#[cfg(feature = "mongodb")]
pub use mongo::MongoStores;

/// Store operation error.
///
/// These are **infrastructure errors** (connectivity, decoding) as opposed to
/// domain errors (malformed ids, missing records).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("failed to decode stored document: {0}")]
    Decode(String),

    #[error("store backend error: {0}")]
    Backend(String),
}

/// The `comments` collection.
#[async_trait]
pub trait CommentStore: Send + Sync {
    /// Every comment, in store-native (insertion) order.
    async fn list(&self) -> Result<Vec<Comment>, StoreError>;

    /// Remove a comment and return what was stored, or `None` if absent.
    async fn find_and_delete(&self, id: CommentId) -> Result<Option<Comment>, StoreError>;

    /// Newest comments for `item` (created_at desc, id desc), at most `limit`.
    async fn recent_for_item(&self, item: ItemId, limit: usize) -> Result<Vec<ItemComment>, StoreError>;

    async fn insert(&self, comment: Comment) -> Result<(), StoreError>;

    async fn count(&self) -> Result<u64, StoreError>;
}

/// The `users` collection (read-only apart from seeding).
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find(&self, id: UserId) -> Result<Option<User>, StoreError>;

    /// Seeding only; no request path creates users.
    async fn insert(&self, user: User) -> Result<(), StoreError>;

    async fn count(&self) -> Result<u64, StoreError>;
}

/// The `items` collection (read-only apart from seeding).
#[async_trait]
pub trait ItemStore: Send + Sync {
    async fn find(&self, id: ItemId) -> Result<Option<Item>, StoreError>;

    /// Seeding only; no request path creates items.
    async fn insert(&self, item: Item) -> Result<(), StoreError>;

    async fn count(&self) -> Result<u64, StoreError>;
}

/// Typed handles to the three collections, handed to query components at startup.
#[derive(Clone)]
pub struct StoreHandles {
    pub comments: Arc<dyn CommentStore>,
    pub users: Arc<dyn UserStore>,
    pub items: Arc<dyn ItemStore>,
}

impl StoreHandles {
    /// Fresh, empty in-memory stores (dev/test).
    pub fn in_memory() -> Self {
        Self {
            comments: Arc::new(InMemoryCommentStore::new()),
            users: Arc::new(InMemoryUserStore::new()),
            items: Arc::new(InMemoryItemStore::new()),
        }
    }
}

impl std::fmt::Debug for StoreHandles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreHandles").finish_non_exhaustive()
    }
}
