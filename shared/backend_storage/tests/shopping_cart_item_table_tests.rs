//! `DynamoDB` table tests, run against `LocalStack`:
//!
//! ```sh
//! docker run -p 4566:4566 localstack/localstack
//! cargo test -p backend_storage -- --ignored
//! ```

use std::sync::Arc;
use std::time::Duration;

use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode, KeySchemaElement, KeyType, ScalarAttributeType,
};
use aws_sdk_dynamodb::Client as DynamoDbClient;
use backend_storage::shopping_cart_item::{
    ReadConsistency, ShoppingCartItem, ShoppingCartItemAttribute, ShoppingCartItemStorage,
    ShoppingCartItemStorageError, ShoppingCartItemStore,
};
use pretty_assertions::assert_eq;
use tokio::time::sleep;
use uuid::Uuid;

/// Test configuration for LocalStack
const LOCALSTACK_ENDPOINT: &str = "http://localhost:4566";
const TEST_REGION: &str = "us-east-1";

/// Test context that automatically cleans up the table on drop
struct TestContext {
    storage: ShoppingCartItemStorage,
    table_name: String,
    dynamodb_client: Arc<DynamoDbClient>,
}

impl Drop for TestContext {
    fn drop(&mut self) {
        let client = self.dynamodb_client.clone();
        let table = self.table_name.clone();

        let handle = tokio::runtime::Handle::try_current();
        if let Ok(handle) = handle {
            handle.spawn(async move {
                let _ = client.delete_table().table_name(&table).send().await;
            });
        }
    }
}

/// Creates a test setup with a unique table
async fn setup_test() -> TestContext {
    let table_name = format!("test-shopping-cart-items-{}", Uuid::new_v4());

    let credentials = Credentials::from_keys(
        "test", // AWS_ACCESS_KEY_ID
        "test", // AWS_SECRET_ACCESS_KEY
        None,   // no session token
    );
    let config = aws_config::defaults(BehaviorVersion::latest())
        .endpoint_url(LOCALSTACK_ENDPOINT)
        .region(Region::new(TEST_REGION))
        .credentials_provider(credentials)
        .load()
        .await;

    let dynamodb_client = Arc::new(DynamoDbClient::new(&config));

    dynamodb_client
        .create_table()
        .table_name(&table_name)
        .billing_mode(BillingMode::PayPerRequest)
        // Partition key
        .key_schema(
            KeySchemaElement::builder()
                .attribute_name(ShoppingCartItemAttribute::Category.to_string())
                .key_type(KeyType::Hash)
                .build()
                .expect("Failed to build key schema"),
        )
        // Sort key
        .key_schema(
            KeySchemaElement::builder()
                .attribute_name(ShoppingCartItemAttribute::Id.to_string())
                .key_type(KeyType::Range)
                .build()
                .expect("Failed to build key schema"),
        )
        .attribute_definitions(
            AttributeDefinition::builder()
                .attribute_name(ShoppingCartItemAttribute::Category.to_string())
                .attribute_type(ScalarAttributeType::S)
                .build()
                .expect("Failed to build attribute definition"),
        )
        .attribute_definitions(
            AttributeDefinition::builder()
                .attribute_name(ShoppingCartItemAttribute::Id.to_string())
                .attribute_type(ScalarAttributeType::S)
                .build()
                .expect("Failed to build attribute definition"),
        )
        .send()
        .await
        .expect("Failed to create test table");

    // Wait for table to be ready
    sleep(Duration::from_millis(100)).await;

    let storage = ShoppingCartItemStorage::new(
        dynamodb_client.clone(),
        table_name.clone(),
        ReadConsistency::Strong,
    );

    TestContext {
        storage,
        table_name,
        dynamodb_client,
    }
}

fn create_test_item(category: &str) -> ShoppingCartItem {
    ShoppingCartItem::new(format!("Item {}", Uuid::new_v4()), category.to_string())
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_insert_and_get_one() {
    let ctx = setup_test().await;
    let item = create_test_item("Dairy");

    ctx.storage
        .insert(&item)
        .await
        .expect("Failed to insert shopping cart item");

    let retrieved = ctx
        .storage
        .get_one(&item.id, &item.category)
        .await
        .expect("Failed to get shopping cart item");

    assert_eq!(retrieved, Some(item));
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_get_one_non_existing_item() {
    let ctx = setup_test().await;

    let result = ctx
        .storage
        .get_one(&Uuid::new_v4().to_string(), "Dairy")
        .await
        .expect("Failed to query non-existing item");

    assert!(result.is_none());
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_get_one_wrong_category() {
    let ctx = setup_test().await;
    let item = create_test_item("Dairy");
    ctx.storage.insert(&item).await.expect("Failed to insert");

    let result = ctx
        .storage
        .get_one(&item.id, "Bakery")
        .await
        .expect("Failed to query item in other partition");

    assert!(result.is_none());
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_insert_duplicate_item() {
    let ctx = setup_test().await;
    let item = create_test_item("Dairy");
    ctx.storage.insert(&item).await.expect("Failed to insert");

    let result = ctx.storage.insert(&item).await;

    assert!(matches!(
        result,
        Err(ShoppingCartItemStorageError::ItemExists)
    ));
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_replace_existing_item() {
    let ctx = setup_test().await;
    let item = create_test_item("Produce");
    ctx.storage.insert(&item).await.expect("Failed to insert");

    let collected = item.with_collected(true);
    ctx.storage
        .replace(&collected)
        .await
        .expect("Failed to replace item");

    let retrieved = ctx
        .storage
        .get_one(&item.id, &item.category)
        .await
        .expect("Failed to get item")
        .expect("Item should exist");

    assert_eq!(retrieved, collected);
    assert_eq!(retrieved.created, item.created);
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_replace_non_existing_item() {
    let ctx = setup_test().await;
    let item = create_test_item("Produce");

    let result = ctx.storage.replace(&item).await;

    assert!(matches!(
        result,
        Err(ShoppingCartItemStorageError::ItemNotFound)
    ));

    // The failed replace must not have created the item
    let retrieved = ctx
        .storage
        .get_one(&item.id, &item.category)
        .await
        .expect("Failed to get item");
    assert!(retrieved.is_none());
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_delete_existing_item() {
    let ctx = setup_test().await;
    let item = create_test_item("Bakery");
    ctx.storage.insert(&item).await.expect("Failed to insert");

    ctx.storage
        .delete(&item.id, &item.category)
        .await
        .expect("Failed to delete item");

    let result = ctx
        .storage
        .get_one(&item.id, &item.category)
        .await
        .expect("Failed to query deleted item");
    assert!(result.is_none());
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_delete_non_existing_item() {
    let ctx = setup_test().await;

    // Delete should succeed even if item doesn't exist (DynamoDB behavior)
    ctx.storage
        .delete(&Uuid::new_v4().to_string(), "Bakery")
        .await
        .expect("Failed to delete non-existing item");
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_scan_all_across_categories() {
    let ctx = setup_test().await;

    let mut created = Vec::new();
    for category in ["Dairy", "Bakery", "Produce"] {
        for _ in 0..5 {
            let item = create_test_item(category);
            ctx.storage.insert(&item).await.expect("Failed to insert");
            created.push(item);
        }
    }

    let scanned = ctx.storage.scan_all().await.expect("Failed to scan items");

    assert_eq!(scanned.len(), created.len());
    for item in &created {
        assert!(scanned.contains(item), "missing item {}", item.id);
    }
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_scan_all_empty_table() {
    let ctx = setup_test().await;

    let scanned = ctx.storage.scan_all().await.expect("Failed to scan items");

    assert!(scanned.is_empty());
}
