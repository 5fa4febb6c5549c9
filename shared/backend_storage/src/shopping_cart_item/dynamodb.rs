//! `DynamoDB` backed shopping cart item storage

use std::sync::Arc;

use async_trait::async_trait;
use aws_sdk_dynamodb::{error::SdkError, types::AttributeValue, Client as DynamoDbClient};
use serde_dynamo::{from_item, from_items, to_item};

use super::{
    ReadConsistency, ShoppingCartItem, ShoppingCartItemAttribute, ShoppingCartItemStorageError,
    ShoppingCartItemStorageResult, ShoppingCartItemStore,
};

/// Shopping cart item storage client for `DynamoDB` operations
///
/// The table uses `category` as the partition key and `id` as the sort key.
pub struct ShoppingCartItemStorage {
    dynamodb_client: Arc<DynamoDbClient>,
    table_name: String,
    read_consistency: ReadConsistency,
}

impl ShoppingCartItemStorage {
    /// Creates a new shopping cart item storage client
    ///
    /// # Arguments
    ///
    /// * `dynamodb_client` - Pre-configured `DynamoDB` client
    /// * `table_name` - `DynamoDB` table name for shopping cart items
    /// * `read_consistency` - Consistency requested for point reads and scans
    #[must_use]
    pub const fn new(
        dynamodb_client: Arc<DynamoDbClient>,
        table_name: String,
        read_consistency: ReadConsistency,
    ) -> Self {
        Self {
            dynamodb_client,
            table_name,
            read_consistency,
        }
    }
}

#[async_trait]
impl ShoppingCartItemStore for ShoppingCartItemStorage {
    async fn scan_all(&self) -> ShoppingCartItemStorageResult<Vec<ShoppingCartItem>> {
        let raw_items = self
            .dynamodb_client
            .scan()
            .table_name(&self.table_name)
            .consistent_read(self.read_consistency.is_strong())
            .into_paginator()
            .items()
            .send()
            .collect::<Result<Vec<_>, _>>()
            .await?;

        tracing::debug!("Scanned {} shopping cart items", raw_items.len());
        Ok(from_items::<_, ShoppingCartItem>(raw_items)?)
    }

    async fn get_one(
        &self,
        id: &str,
        category: &str,
    ) -> ShoppingCartItemStorageResult<Option<ShoppingCartItem>> {
        let response = self
            .dynamodb_client
            .get_item()
            .table_name(&self.table_name)
            .key(
                ShoppingCartItemAttribute::Category.to_string(),
                AttributeValue::S(category.to_string()),
            )
            .key(
                ShoppingCartItemAttribute::Id.to_string(),
                AttributeValue::S(id.to_string()),
            )
            .consistent_read(self.read_consistency.is_strong())
            .send()
            .await?;

        response
            .item
            .map(|item| from_item(item).map_err(ShoppingCartItemStorageError::from))
            .transpose()
    }

    async fn insert(&self, item: &ShoppingCartItem) -> ShoppingCartItemStorageResult<()> {
        let dynamo_item = to_item(item)?;

        // Create only if *no item with this PK+SK* exists.
        self.dynamodb_client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(dynamo_item))
            .condition_expression("attribute_not_exists(#pk) AND attribute_not_exists(#sk)")
            .expression_attribute_names("#pk", ShoppingCartItemAttribute::Category.to_string())
            .expression_attribute_names("#sk", ShoppingCartItemAttribute::Id.to_string())
            .send()
            .await
            .map_err(|err| {
                if matches!(
                    err,
                    SdkError::ServiceError(ref svc) if svc.err().is_conditional_check_failed_exception()
                ) {
                    ShoppingCartItemStorageError::ItemExists
                } else {
                    err.into()
                }
            })?;

        Ok(())
    }

    async fn replace(&self, item: &ShoppingCartItem) -> ShoppingCartItemStorageResult<()> {
        let dynamo_item = to_item(item)?;

        // Overwrite only if the item is still there.
        self.dynamodb_client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(dynamo_item))
            .condition_expression("attribute_exists(#pk) AND attribute_exists(#sk)")
            .expression_attribute_names("#pk", ShoppingCartItemAttribute::Category.to_string())
            .expression_attribute_names("#sk", ShoppingCartItemAttribute::Id.to_string())
            .send()
            .await
            .map_err(|err| {
                if matches!(
                    err,
                    SdkError::ServiceError(ref svc) if svc.err().is_conditional_check_failed_exception()
                ) {
                    ShoppingCartItemStorageError::ItemNotFound
                } else {
                    err.into()
                }
            })?;

        Ok(())
    }

    async fn delete(&self, id: &str, category: &str) -> ShoppingCartItemStorageResult<()> {
        self.dynamodb_client
            .delete_item()
            .table_name(&self.table_name)
            .key(
                ShoppingCartItemAttribute::Category.to_string(),
                AttributeValue::S(category.to_string()),
            )
            .key(
                ShoppingCartItemAttribute::Id.to_string(),
                AttributeValue::S(id.to_string()),
            )
            .send()
            .await?;

        Ok(())
    }
}
