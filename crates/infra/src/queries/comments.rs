use std::sync::Arc;

use chrono::{DateTime, Utc};

use anythink_core::{CommentId, ItemId, UserId};
use anythink_marketplace::Comment;

use super::QueryError;
use crate::store::{CommentStore, ItemStore};

/// Listing, deletion and creation of comment records.
#[derive(Clone)]
pub struct CommentCatalog {
    comments: Arc<dyn CommentStore>,
    items: Arc<dyn ItemStore>,
}

impl CommentCatalog {
    pub fn new(comments: Arc<dyn CommentStore>, items: Arc<dyn ItemStore>) -> Self {
        Self { comments, items }
    }

    /// Every comment, unfiltered and unpaginated.
    pub async fn list(&self) -> Result<Vec<Comment>, QueryError> {
        Ok(self.comments.list().await?)
    }

    /// Permanently remove a comment and return its prior contents.
    ///
    /// A malformed `id` is rejected before the store is touched.
    pub async fn delete(&self, id: &str) -> Result<Comment, QueryError> {
        let id: CommentId = id.parse()?;
        match self.comments.find_and_delete(id).await? {
            Some(deleted) => {
                tracing::info!(comment_id = %deleted.id, item_id = %deleted.item, "comment deleted");
                Ok(deleted)
            }
            None => Err(QueryError::NotFound),
        }
    }

    /// Create a comment by `seller` on the item identified by `item_id`.
    ///
    /// Validation order: item id format, body, then item existence.
    pub async fn create(
        &self,
        item_id: &str,
        seller: UserId,
        body: &str,
        now: DateTime<Utc>,
    ) -> Result<Comment, QueryError> {
        let item_id: ItemId = item_id.parse()?;
        let comment = Comment::new(item_id, seller, body, now)?;

        if self.items.find(item_id).await?.is_none() {
            return Err(QueryError::NotFound);
        }

        self.comments.insert(comment.clone()).await?;
        tracing::info!(comment_id = %comment.id, item_id = %item_id, seller = %seller, "comment created");
        Ok(comment)
    }
}
