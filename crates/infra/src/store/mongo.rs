//! MongoDB-backed stores.
//!
//! The wire format mirrors the documents written by the rest of the
//! marketplace: `_id` ObjectIds, camelCase timestamps stored as BSON dates.
//! Domain records never see BSON types; each collection has a private
//! document struct and converts at the boundary.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use mongodb::{
    Client, Collection, Database,
    bson::{DateTime as BsonDateTime, doc, oid::ObjectId},
};
use serde::{Deserialize, Serialize};

use anythink_core::{CommentId, ItemId, UserId};
use anythink_marketplace::{Comment, Item, ItemComment, User};

use super::{CommentStore, ItemStore, StoreError, StoreHandles, UserStore};

const COMMENTS: &str = "comments";
const USERS: &str = "users";
const ITEMS: &str = "items";

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        StoreError::Backend(err.to_string())
    }
}

fn to_bson_date(at: DateTime<Utc>) -> BsonDateTime {
    BsonDateTime::from_millis(at.timestamp_millis())
}

fn from_bson_date(at: BsonDateTime) -> Result<DateTime<Utc>, StoreError> {
    DateTime::<Utc>::from_timestamp_millis(at.timestamp_millis())
        .ok_or_else(|| StoreError::Decode(format!("timestamp out of range: {at}")))
}

#[derive(Debug, Serialize, Deserialize)]
struct CommentDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    body: String,
    seller: ObjectId,
    item: ObjectId,
    #[serde(rename = "createdAt")]
    created_at: BsonDateTime,
    #[serde(rename = "updatedAt")]
    updated_at: BsonDateTime,
}

impl CommentDocument {
    fn from_domain(c: &Comment) -> Self {
        Self {
            id: *c.id.as_object_id(),
            body: c.body.clone(),
            seller: *c.seller.as_object_id(),
            item: *c.item.as_object_id(),
            created_at: to_bson_date(c.created_at),
            updated_at: to_bson_date(c.updated_at),
        }
    }

    fn into_domain(self) -> Result<Comment, StoreError> {
        Ok(Comment {
            id: CommentId::from(self.id),
            body: self.body,
            seller: UserId::from(self.seller),
            item: ItemId::from(self.item),
            created_at: from_bson_date(self.created_at)?,
            updated_at: from_bson_date(self.updated_at)?,
        })
    }
}

/// Projected shape returned by the per-item listing query.
#[derive(Debug, Deserialize)]
struct ItemCommentDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    body: String,
    seller: ObjectId,
    #[serde(rename = "createdAt")]
    created_at: BsonDateTime,
}

impl ItemCommentDocument {
    fn into_domain(self) -> Result<ItemComment, StoreError> {
        Ok(ItemComment {
            id: CommentId::from(self.id),
            body: self.body,
            seller: UserId::from(self.seller),
            created_at: from_bson_date(self.created_at)?,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct UserDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bio: Option<String>,
}

impl UserDocument {
    fn from_domain(u: &User) -> Self {
        Self {
            id: *u.id.as_object_id(),
            username: u.username.clone(),
            image: u.image.clone(),
            bio: u.bio.clone(),
        }
    }

    fn into_domain(self) -> User {
        User {
            id: UserId::from(self.id),
            username: self.username,
            image: self.image,
            bio: self.bio,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ItemDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    title: String,
    seller: ObjectId,
    #[serde(rename = "createdAt")]
    created_at: BsonDateTime,
}

impl ItemDocument {
    fn from_domain(i: &Item) -> Self {
        Self {
            id: *i.id.as_object_id(),
            title: i.title.clone(),
            seller: *i.seller.as_object_id(),
            created_at: to_bson_date(i.created_at),
        }
    }

    fn into_domain(self) -> Result<Item, StoreError> {
        Ok(Item {
            id: ItemId::from(self.id),
            title: self.title,
            seller: UserId::from(self.seller),
            created_at: from_bson_date(self.created_at)?,
        })
    }
}

/// Connection to the marketplace database; hands out one store per collection.
#[derive(Debug, Clone)]
pub struct MongoStores {
    db: Database,
}

impl MongoStores {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await?;
        tracing::info!(database, "connected to mongodb");
        Ok(Self {
            db: client.database(database),
        })
    }

    pub fn comments(&self) -> MongoCommentStore {
        MongoCommentStore {
            collection: self.db.collection(COMMENTS),
        }
    }

    pub fn users(&self) -> MongoUserStore {
        MongoUserStore {
            collection: self.db.collection(USERS),
        }
    }

    pub fn items(&self) -> MongoItemStore {
        MongoItemStore {
            collection: self.db.collection(ITEMS),
        }
    }

    pub fn handles(&self) -> StoreHandles {
        StoreHandles {
            comments: std::sync::Arc::new(self.comments()),
            users: std::sync::Arc::new(self.users()),
            items: std::sync::Arc::new(self.items()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MongoCommentStore {
    collection: Collection<CommentDocument>,
}

#[async_trait]
impl CommentStore for MongoCommentStore {
    async fn list(&self) -> Result<Vec<Comment>, StoreError> {
        let docs: Vec<CommentDocument> = self.collection.find(doc! {}).await?.try_collect().await?;
        docs.into_iter().map(CommentDocument::into_domain).collect()
    }

    async fn find_and_delete(&self, id: CommentId) -> Result<Option<Comment>, StoreError> {
        self.collection
            .find_one_and_delete(doc! { "_id": *id.as_object_id() })
            .await?
            .map(CommentDocument::into_domain)
            .transpose()
    }

    async fn recent_for_item(&self, item: ItemId, limit: usize) -> Result<Vec<ItemComment>, StoreError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let docs: Vec<ItemCommentDocument> = self
            .collection
            .clone_with_type::<ItemCommentDocument>()
            .find(doc! { "item": *item.as_object_id() })
            .sort(doc! { "createdAt": -1, "_id": -1 })
            .limit(limit)
            .projection(doc! { "_id": 1, "body": 1, "seller": 1, "createdAt": 1 })
            .await?
            .try_collect()
            .await?;
        docs.into_iter().map(ItemCommentDocument::into_domain).collect()
    }

    async fn insert(&self, comment: Comment) -> Result<(), StoreError> {
        self.collection.insert_one(CommentDocument::from_domain(&comment)).await?;
        Ok(())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.collection.count_documents(doc! {}).await?)
    }
}

#[derive(Debug, Clone)]
pub struct MongoUserStore {
    collection: Collection<UserDocument>,
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn find(&self, id: UserId) -> Result<Option<User>, StoreError> {
        Ok(self
            .collection
            .find_one(doc! { "_id": *id.as_object_id() })
            .await?
            .map(UserDocument::into_domain))
    }

    async fn insert(&self, user: User) -> Result<(), StoreError> {
        self.collection.insert_one(UserDocument::from_domain(&user)).await?;
        Ok(())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.collection.count_documents(doc! {}).await?)
    }
}

#[derive(Debug, Clone)]
pub struct MongoItemStore {
    collection: Collection<ItemDocument>,
}

#[async_trait]
impl ItemStore for MongoItemStore {
    async fn find(&self, id: ItemId) -> Result<Option<Item>, StoreError> {
        self.collection
            .find_one(doc! { "_id": *id.as_object_id() })
            .await?
            .map(ItemDocument::into_domain)
            .transpose()
    }

    async fn insert(&self, item: Item) -> Result<(), StoreError> {
        self.collection.insert_one(ItemDocument::from_domain(&item)).await?;
        Ok(())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.collection.count_documents(doc! {}).await?)
    }
}
