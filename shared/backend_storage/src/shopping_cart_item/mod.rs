//! Shopping cart item storage
//!
//! Items live in a single collection partitioned by `category`. Every item is
//! addressed by the compound `(id, category)` key. [`ShoppingCartItemStore`] is
//! the seam the backend talks to; [`ShoppingCartItemStorage`] backs it with
//! `DynamoDB` and [`InMemoryShoppingCartItemStorage`] with an embedded map.

mod dynamodb;
mod error;
mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

pub use dynamodb::ShoppingCartItemStorage;
pub use error::{ShoppingCartItemStorageError, ShoppingCartItemStorageResult};
pub use memory::InMemoryShoppingCartItemStorage;

/// Attribute names for the shopping cart item table
#[derive(Debug, Clone, Display)]
#[strum(serialize_all = "camelCase")]
pub enum ShoppingCartItemAttribute {
    /// Unique item ID (Sort Key)
    Id,
    /// Creation timestamp
    Created,
    /// Free text item name
    ItemName,
    /// Item category (Partition Key)
    Category,
    /// Whether the item has been collected
    Collected,
}

/// A shopping cart item as stored and as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingCartItem {
    /// Unique item ID (UUID v4)
    pub id: String,
    /// Timestamp of item creation
    #[schemars(with = "String")]
    pub created: DateTime<Utc>,
    /// Name of the item
    pub item_name: String,
    /// Category of the item, also the partition key
    pub category: String,
    /// Whether the item has been collected
    pub collected: bool,
}

impl ShoppingCartItem {
    /// Builds a new, not yet collected item with a generated ID
    #[must_use]
    pub fn new(item_name: String, category: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            created: Utc::now(),
            item_name,
            category,
            collected: false,
        }
    }

    /// Returns a copy of this item with only `collected` changed
    #[must_use]
    pub fn with_collected(&self, collected: bool) -> Self {
        Self {
            collected,
            ..self.clone()
        }
    }
}

/// Read consistency used for point reads and scans
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ReadConsistency {
    /// Reads may not reflect the latest completed write
    #[default]
    Eventual,
    /// Reads always reflect every write completed before them
    Strong,
}

impl ReadConsistency {
    /// Whether reads should ask the store for strongly consistent results
    #[must_use]
    pub const fn is_strong(self) -> bool {
        matches!(self, Self::Strong)
    }
}

/// Document store operations for shopping cart items
///
/// Implementations must be safe to share across concurrent requests.
#[async_trait]
pub trait ShoppingCartItemStore: Send + Sync {
    /// Reads every item across all partitions, in the order the store returns them
    ///
    /// # Errors
    ///
    /// Returns `ShoppingCartItemStorageError` if any page of the scan fails
    async fn scan_all(&self) -> ShoppingCartItemStorageResult<Vec<ShoppingCartItem>>;

    /// Point read by `(id, category)`, `None` when no such item exists
    ///
    /// # Errors
    ///
    /// Returns `ShoppingCartItemStorageError` if the read fails
    async fn get_one(
        &self,
        id: &str,
        category: &str,
    ) -> ShoppingCartItemStorageResult<Option<ShoppingCartItem>>;

    /// Inserts a new item
    ///
    /// # Errors
    ///
    /// Returns `ShoppingCartItemStorageError::ItemExists` if an item with the same key
    /// is already stored, or another error if the write fails
    async fn insert(&self, item: &ShoppingCartItem) -> ShoppingCartItemStorageResult<()>;

    /// Replaces the item stored at the key of `item`
    ///
    /// # Errors
    ///
    /// Returns `ShoppingCartItemStorageError::ItemNotFound` if nothing is stored at that
    /// key, or another error if the write fails
    async fn replace(&self, item: &ShoppingCartItem) -> ShoppingCartItemStorageResult<()>;

    /// Deletes the item at `(id, category)`; deleting a missing key succeeds
    ///
    /// # Errors
    ///
    /// Returns `ShoppingCartItemStorageError` if the delete fails
    async fn delete(&self, id: &str, category: &str) -> ShoppingCartItemStorageResult<()>;
}
