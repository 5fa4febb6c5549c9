//! Embedded shopping cart item storage
//!
//! Keeps items in process memory with the same key semantics as the `DynamoDB`
//! table. Used by tests and for running the backend without a database.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{
    ShoppingCartItem, ShoppingCartItemStorageError, ShoppingCartItemStorageResult,
    ShoppingCartItemStore,
};

/// `(category, id)`, partition first so scans group items by category
type ItemKey = (String, String);

/// In-memory shopping cart item storage
#[derive(Debug, Default)]
pub struct InMemoryShoppingCartItemStorage {
    items: RwLock<BTreeMap<ItemKey, ShoppingCartItem>>,
}

impl InMemoryShoppingCartItemStorage {
    /// Creates an empty storage
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn key(id: &str, category: &str) -> ItemKey {
        (category.to_string(), id.to_string())
    }
}

#[async_trait]
impl ShoppingCartItemStore for InMemoryShoppingCartItemStorage {
    async fn scan_all(&self) -> ShoppingCartItemStorageResult<Vec<ShoppingCartItem>> {
        Ok(self.items.read().await.values().cloned().collect())
    }

    async fn get_one(
        &self,
        id: &str,
        category: &str,
    ) -> ShoppingCartItemStorageResult<Option<ShoppingCartItem>> {
        Ok(self.items.read().await.get(&Self::key(id, category)).cloned())
    }

    async fn insert(&self, item: &ShoppingCartItem) -> ShoppingCartItemStorageResult<()> {
        let mut items = self.items.write().await;
        let key = Self::key(&item.id, &item.category);
        if items.contains_key(&key) {
            return Err(ShoppingCartItemStorageError::ItemExists);
        }
        items.insert(key, item.clone());
        Ok(())
    }

    async fn replace(&self, item: &ShoppingCartItem) -> ShoppingCartItemStorageResult<()> {
        let mut items = self.items.write().await;
        let stored = items
            .get_mut(&Self::key(&item.id, &item.category))
            .ok_or(ShoppingCartItemStorageError::ItemNotFound)?;
        *stored = item.clone();
        Ok(())
    }

    async fn delete(&self, id: &str, category: &str) -> ShoppingCartItemStorageResult<()> {
        self.items.write().await.remove(&Self::key(id, category));
        Ok(())
    }
}
