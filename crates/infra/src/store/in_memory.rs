use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use anythink_core::{CommentId, ItemId, UserId};
use anythink_marketplace::{Comment, Item, ItemComment, User};

use super::{CommentStore, ItemStore, StoreError, UserStore};

/// A record that can live in an [`InMemoryCollection`].
pub trait Document: Clone + Send + Sync + 'static {
    type Id: Copy + Eq + core::fmt::Display + Send + Sync;

    fn id(&self) -> Self::Id;
}

impl Document for Comment {
    type Id = CommentId;

    fn id(&self) -> CommentId {
        self.id
    }
}

impl Document for User {
    type Id = UserId;

    fn id(&self) -> UserId {
        self.id
    }
}

impl Document for Item {
    type Id = ItemId;

    fn id(&self) -> ItemId {
        self.id
    }
}

/// In-memory collection for tests/dev.
///
/// Documents are kept in insertion order, which is what `list()` returns.
#[derive(Debug)]
pub struct InMemoryCollection<T> {
    inner: RwLock<Vec<T>>,
}

pub type InMemoryCommentStore = InMemoryCollection<Comment>;
pub type InMemoryUserStore = InMemoryCollection<User>;
pub type InMemoryItemStore = InMemoryCollection<Item>;

impl<T> InMemoryCollection<T> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Vec::new()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<T>>, StoreError> {
        self.inner
            .read()
            .map_err(|_| StoreError::Unavailable("in-memory collection lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<T>>, StoreError> {
        self.inner
            .write()
            .map_err(|_| StoreError::Unavailable("in-memory collection lock poisoned".to_string()))
    }
}

impl<T> Default for InMemoryCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Document> InMemoryCollection<T> {
    fn find_by_id(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        Ok(self.read()?.iter().find(|d| d.id() == id).cloned())
    }

    fn insert_unique(&self, doc: T) -> Result<(), StoreError> {
        let mut docs = self.write()?;
        let id = doc.id();
        if docs.iter().any(|d| d.id() == id) {
            return Err(StoreError::Backend(format!("duplicate key: _id {id}")));
        }
        docs.push(doc);
        Ok(())
    }

    fn document_count(&self) -> Result<u64, StoreError> {
        Ok(self.read()?.len() as u64)
    }
}

#[async_trait]
impl CommentStore for InMemoryCollection<Comment> {
    async fn list(&self) -> Result<Vec<Comment>, StoreError> {
        Ok(self.read()?.clone())
    }

    async fn find_and_delete(&self, id: CommentId) -> Result<Option<Comment>, StoreError> {
        let mut docs = self.write()?;
        Ok(docs.iter().position(|c| c.id == id).map(|pos| docs.remove(pos)))
    }

    async fn recent_for_item(&self, item: ItemId, limit: usize) -> Result<Vec<ItemComment>, StoreError> {
        let docs = self.read()?;
        let mut matching: Vec<&Comment> = docs.iter().filter(|c| c.item == item).collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));

        Ok(matching
            .into_iter()
            .take(limit)
            .map(Comment::to_item_comment)
            .collect())
    }

    async fn insert(&self, comment: Comment) -> Result<(), StoreError> {
        self.insert_unique(comment)
    }

    async fn count(&self) -> Result<u64, StoreError> {
        self.document_count()
    }
}

#[async_trait]
impl UserStore for InMemoryCollection<User> {
    async fn find(&self, id: UserId) -> Result<Option<User>, StoreError> {
        self.find_by_id(id)
    }

    async fn insert(&self, user: User) -> Result<(), StoreError> {
        self.insert_unique(user)
    }

    async fn count(&self) -> Result<u64, StoreError> {
        self.document_count()
    }
}

#[async_trait]
impl ItemStore for InMemoryCollection<Item> {
    async fn find(&self, id: ItemId) -> Result<Option<Item>, StoreError> {
        self.find_by_id(id)
    }

    async fn insert(&self, item: Item) -> Result<(), StoreError> {
        self.insert_unique(item)
    }

    async fn count(&self) -> Result<u64, StoreError> {
        self.document_count()
    }
}
