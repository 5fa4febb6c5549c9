//! Shopping cart item operations
//!
//! Each operation maps onto one document store call, two for
//! [`ShoppingCartService::update`].

use std::sync::Arc;

use backend_storage::shopping_cart_item::{
    ShoppingCartItem, ShoppingCartItemStorageError, ShoppingCartItemStore,
};
use thiserror::Error;

/// Result type alias for shopping cart operations
pub type ShoppingCartResult<T> = Result<T, ShoppingCartError>;

/// Errors surfaced by shopping cart operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShoppingCartError {
    /// No item exists at the requested `(id, category)`
    #[error("Shopping cart item not found")]
    NotFound,

    /// The document store rejected the request
    #[error("{0}")]
    RequestFailure(String),
}

impl From<ShoppingCartItemStorageError> for ShoppingCartError {
    fn from(err: ShoppingCartItemStorageError) -> Self {
        match err {
            ShoppingCartItemStorageError::ItemNotFound => Self::NotFound,
            other => {
                tracing::error!("Shopping cart item storage error: {other}");
                Self::RequestFailure(other.to_string())
            }
        }
    }
}

/// Stateless handler set bound to one document store
pub struct ShoppingCartService {
    store: Arc<dyn ShoppingCartItemStore>,
}

impl ShoppingCartService {
    /// Creates a new service over the given store
    #[must_use]
    pub fn new(store: Arc<dyn ShoppingCartItemStore>) -> Self {
        Self { store }
    }

    /// Returns every item across all categories, in store order
    ///
    /// # Errors
    ///
    /// Returns `ShoppingCartError::RequestFailure` if the scan fails part way
    pub async fn list_all(&self) -> ShoppingCartResult<Vec<ShoppingCartItem>> {
        Ok(self.store.scan_all().await?)
    }

    /// Point lookup by `(id, category)`
    ///
    /// # Errors
    ///
    /// Returns `ShoppingCartError::NotFound` if there is no such item, or
    /// `ShoppingCartError::RequestFailure` if the read fails
    pub async fn get_by_id(&self, id: &str, category: &str) -> ShoppingCartResult<ShoppingCartItem> {
        self.store
            .get_one(id, category)
            .await?
            .ok_or(ShoppingCartError::NotFound)
    }

    /// Creates a new, not yet collected item
    ///
    /// # Errors
    ///
    /// Returns `ShoppingCartError::RequestFailure` if the store rejects the insert
    pub async fn create(
        &self,
        item_name: String,
        category: String,
    ) -> ShoppingCartResult<ShoppingCartItem> {
        let item = ShoppingCartItem::new(item_name, category);
        self.store.insert(&item).await?;

        tracing::info!("Created shopping cart item {} in {}", item.id, item.category);
        Ok(item)
    }

    /// Sets `collected` on an existing item, every other field is kept
    ///
    /// Reads the stored item, then replaces it. The two calls are not atomic and
    /// no version token is sent with the replace: concurrent updates to one item
    /// race and the last write wins. An item deleted between the read and the
    /// replace is reported as `NotFound`.
    ///
    /// # Errors
    ///
    /// Returns `ShoppingCartError::NotFound` if there is no such item, or
    /// `ShoppingCartError::RequestFailure` if either store call fails
    pub async fn update(
        &self,
        id: &str,
        category: &str,
        collected: bool,
    ) -> ShoppingCartResult<ShoppingCartItem> {
        let existing = self.get_by_id(id, category).await?;

        let item = existing.with_collected(collected);
        self.store.replace(&item).await?;

        Ok(item)
    }

    /// Deletes the item at `(id, category)`, succeeding whether or not it existed
    ///
    /// # Errors
    ///
    /// Returns `ShoppingCartError::RequestFailure` if the store rejects the delete
    pub async fn delete(&self, id: &str, category: &str) -> ShoppingCartResult<()> {
        self.store.delete(id, category).await?;
        Ok(())
    }
}
