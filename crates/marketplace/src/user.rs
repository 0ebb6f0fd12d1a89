use serde::{Deserialize, Serialize};

use anythink_core::UserId;

use crate::comment::CommentAuthor;

/// A marketplace user. Read-only from the comments subsystem's point of view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub image: Option<String>,
    pub bio: Option<String>,
}

impl User {
    pub fn new(id: UserId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            image: None,
            bio: None,
        }
    }

    /// Public fields denormalized into a comment listing.
    pub fn author(&self) -> CommentAuthor {
        CommentAuthor {
            username: self.username.clone(),
            image: self.image.clone(),
            bio: self.bio.clone(),
        }
    }
}
