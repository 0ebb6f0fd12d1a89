use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use anythink_core::{CommentId, DomainError, DomainResult, ItemId, UserId};

/// Upper bound on comments returned for a single item listing.
pub const MAX_ITEM_COMMENTS: usize = 10;

/// A comment left by a user on an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub body: String,
    pub seller: UserId,
    pub item: ItemId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    /// Build a new comment authored by `seller` on `item`.
    ///
    /// The body is trimmed and must not be blank.
    pub fn new(item: ItemId, seller: UserId, body: &str, now: DateTime<Utc>) -> DomainResult<Self> {
        let body = body.trim();
        if body.is_empty() {
            return Err(DomainError::validation("body", "can't be blank"));
        }

        Ok(Self {
            id: CommentId::new(),
            body: body.to_string(),
            seller,
            item,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reduced field set used by per-item listings.
    pub fn to_item_comment(&self) -> ItemComment {
        ItemComment {
            id: self.id,
            body: self.body.clone(),
            seller: self.seller,
            created_at: self.created_at,
        }
    }
}

/// Projection of a comment as read for an item listing (author not yet resolved).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemComment {
    pub id: CommentId,
    pub body: String,
    pub seller: UserId,
    pub created_at: DateTime<Utc>,
}

/// Public author fields joined from the users collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentAuthor {
    pub username: String,
    pub image: Option<String>,
    pub bio: Option<String>,
}

/// Item comment with its author resolved; `author` is `None` when the user is gone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemCommentView {
    pub id: CommentId,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub author: Option<CommentAuthor>,
}

impl ItemCommentView {
    pub fn new(comment: ItemComment, author: Option<CommentAuthor>) -> Self {
        Self {
            id: comment.id,
            body: comment.body,
            created_at: comment.created_at,
            author,
        }
    }
}
