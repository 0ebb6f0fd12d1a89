use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use anythink_core::{ItemId, UserId};

/// A marketplace listing. Only the fields this subsystem touches are modelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub seller: UserId,
    pub created_at: DateTime<Utc>,
}

impl Item {
    pub fn new(id: ItemId, title: impl Into<String>, seller: UserId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: title.into(),
            seller,
            created_at,
        }
    }
}
