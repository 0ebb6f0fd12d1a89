//! Marketplace domain records (comments, users, items, statistics).
//!
//! Plain data plus the few rules that apply when a comment is created; no IO,
//! no HTTP, no storage.

pub mod comment;
pub mod item;
pub mod stats;
pub mod user;

pub use comment::{Comment, CommentAuthor, ItemComment, ItemCommentView, MAX_ITEM_COMMENTS};
pub use item::Item;
pub use stats::MarketplaceStats;
pub use user::User;
