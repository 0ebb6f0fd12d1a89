use serde::{Deserialize, Serialize};

/// Document counts across the marketplace collections.
///
/// Each count is taken independently, so the three numbers are not guaranteed
/// to describe a single instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceStats {
    pub users: u64,
    pub items: u64,
    pub comments: u64,
}
