use anythink_infra::{
    queries::{CommentCatalog, MarketplaceStatistics, RecentItemComments},
    store::StoreHandles,
};

use crate::config::StoreConfig;

/// Query components shared by all handlers.
///
/// Each component holds only the store handles it needs.
#[derive(Clone)]
pub struct AppServices {
    pub comments: CommentCatalog,
    pub item_comments: RecentItemComments,
    pub stats: MarketplaceStatistics,
}

impl AppServices {
    pub fn from_stores(stores: StoreHandles) -> Self {
        Self {
            comments: CommentCatalog::new(stores.comments.clone(), stores.items.clone()),
            item_comments: RecentItemComments::new(stores.comments.clone(), stores.users.clone()),
            stats: MarketplaceStatistics::new(stores.users, stores.items, stores.comments),
        }
    }
}

pub async fn build_services(config: &StoreConfig) -> anyhow::Result<AppServices> {
    let stores = match config {
        StoreConfig::InMemory => {
            tracing::info!("using in-memory stores");
            StoreHandles::in_memory()
        }
        StoreConfig::Mongo { uri, database } => build_mongo_stores(uri, database).await?,
    };

    Ok(AppServices::from_stores(stores))
}

#[cfg(feature = "mongodb")]
async fn build_mongo_stores(uri: &str, database: &str) -> anyhow::Result<StoreHandles> {
    let mongo = anythink_infra::store::MongoStores::connect(uri, database).await?;
    Ok(mongo.handles())
}

#[cfg(not(feature = "mongodb"))]
async fn build_mongo_stores(_uri: &str, _database: &str) -> anyhow::Result<StoreHandles> {
    tracing::warn!(
        "USE_PERSISTENT_STORES=true but mongodb feature not enabled, falling back to in-memory"
    );
    Ok(StoreHandles::in_memory())
}
