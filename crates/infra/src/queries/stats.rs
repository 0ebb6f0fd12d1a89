use std::sync::Arc;

use anythink_marketplace::MarketplaceStats;

use super::QueryError;
use crate::store::{CommentStore, ItemStore, UserStore};

/// Document counts across users, items and comments.
#[derive(Clone)]
pub struct MarketplaceStatistics {
    users: Arc<dyn UserStore>,
    items: Arc<dyn ItemStore>,
    comments: Arc<dyn CommentStore>,
}

impl MarketplaceStatistics {
    pub fn new(
        users: Arc<dyn UserStore>,
        items: Arc<dyn ItemStore>,
        comments: Arc<dyn CommentStore>,
    ) -> Self {
        Self { users, items, comments }
    }

    /// Count all three collections concurrently.
    ///
    /// The counts are independent reads, not a snapshot. If any count fails
    /// the whole summary fails; partial results are never returned.
    pub async fn summary(&self) -> Result<MarketplaceStats, QueryError> {
        let (users, items, comments) =
            tokio::try_join!(self.users.count(), self.items.count(), self.comments.count())?;

        Ok(MarketplaceStats { users, items, comments })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::test_support::FailingStore;
    use crate::store::{InMemoryCommentStore, InMemoryItemStore, InMemoryUserStore};
    use anythink_core::{ItemId, UserId};
    use anythink_marketplace::{Comment, Item, User};
    use chrono::Utc;

    #[tokio::test]
    async fn empty_marketplace_counts_zero() {
        let stats = MarketplaceStatistics::new(
            Arc::new(InMemoryUserStore::new()),
            Arc::new(InMemoryItemStore::new()),
            Arc::new(InMemoryCommentStore::new()),
        );
        assert_eq!(stats.summary().await.unwrap(), MarketplaceStats::default());
    }

    #[tokio::test]
    async fn counts_follow_inserts() {
        let users = Arc::new(InMemoryUserStore::new());
        let items = Arc::new(InMemoryItemStore::new());
        let comments = Arc::new(InMemoryCommentStore::new());
        let stats = MarketplaceStatistics::new(users.clone(), items.clone(), comments.clone());

        let before = stats.summary().await.unwrap();

        let seller = User::new(UserId::new(), "dave");
        users.insert(seller.clone()).await.unwrap();
        let item = Item::new(ItemId::new(), "bike", seller.id, Utc::now());
        items.insert(item.clone()).await.unwrap();
        for body in ["a", "b"] {
            comments
                .insert(Comment::new(item.id, seller.id, body, Utc::now()).unwrap())
                .await
                .unwrap();
        }

        let after = stats.summary().await.unwrap();
        assert_eq!(after.users, before.users + 1);
        assert_eq!(after.items, before.items + 1);
        assert_eq!(after.comments, before.comments + 2);
    }

    #[tokio::test]
    async fn one_failing_count_fails_the_summary() {
        let stats = MarketplaceStatistics::new(
            Arc::new(InMemoryUserStore::new()),
            Arc::new(FailingStore),
            Arc::new(InMemoryCommentStore::new()),
        );
        assert!(matches!(stats.summary().await, Err(QueryError::Store(_))));
    }
}
