use std::collections::HashMap;
use std::sync::Arc;

use anythink_core::{ItemId, UserId};
use anythink_marketplace::{CommentAuthor, ItemCommentView, MAX_ITEM_COMMENTS};

use super::QueryError;
use crate::store::{CommentStore, UserStore};

/// Newest comments on an item, with each author's public profile joined in.
#[derive(Clone)]
pub struct RecentItemComments {
    comments: Arc<dyn CommentStore>,
    users: Arc<dyn UserStore>,
}

impl RecentItemComments {
    pub fn new(comments: Arc<dyn CommentStore>, users: Arc<dyn UserStore>) -> Self {
        Self { comments, users }
    }

    /// Up to [`MAX_ITEM_COMMENTS`] comments on `item_id`, newest first.
    ///
    /// A comment whose author no longer exists gets `author: None`. A store
    /// failure while resolving an author fails the whole request.
    pub async fn recent_for_item(&self, item_id: &str) -> Result<Vec<ItemCommentView>, QueryError> {
        let item_id: ItemId = item_id.parse()?;
        let comments = self.comments.recent_for_item(item_id, MAX_ITEM_COMMENTS).await?;

        let mut authors: HashMap<UserId, Option<CommentAuthor>> = HashMap::new();
        for comment in &comments {
            if !authors.contains_key(&comment.seller) {
                let author = self.users.find(comment.seller).await?.map(|u| u.author());
                if author.is_none() {
                    tracing::debug!(item_id = %item_id, seller = %comment.seller, "comment author not found");
                }
                authors.insert(comment.seller, author);
            }
        }

        Ok(comments
            .into_iter()
            .map(|c| {
                let author = authors.get(&c.seller).cloned().flatten();
                ItemCommentView::new(c, author)
            })
            .collect())
    }
}
