use serde::Deserialize;

use anythink_marketplace::{Comment, CommentAuthor, ItemCommentView, MarketplaceStats};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Default, Deserialize)]
pub struct NewCommentBody {
    #[serde(default)]
    pub body: String,
}

/// `POST /items/:itemId/comments` payload: `{"comment": {"body": "..."}}`.
///
/// Missing fields default to empty so the body check reports them as blank.
#[derive(Debug, Default, Deserialize)]
pub struct CreateCommentRequest {
    #[serde(default)]
    pub comment: NewCommentBody,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn comment_to_json(c: Comment) -> serde_json::Value {
    serde_json::json!({
        "id": c.id.to_string(),
        "body": c.body,
        "seller": c.seller.to_string(),
        "item": c.item.to_string(),
        "createdAt": c.created_at.to_rfc3339(),
        "updatedAt": c.updated_at.to_rfc3339(),
    })
}

pub fn author_to_json(a: CommentAuthor) -> serde_json::Value {
    serde_json::json!({
        "username": a.username,
        "image": a.image,
        "bio": a.bio,
    })
}

pub fn item_comment_to_json(c: ItemCommentView) -> serde_json::Value {
    serde_json::json!({
        "id": c.id.to_string(),
        "body": c.body,
        "createdAt": c.created_at.to_rfc3339(),
        "author": c.author.map(author_to_json),
    })
}

pub fn stats_to_json(s: MarketplaceStats) -> serde_json::Value {
    serde_json::json!({
        "users": s.users,
        "items": s.items,
        "comments": s.comments,
    })
}
