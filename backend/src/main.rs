use std::sync::Arc;

use aws_sdk_dynamodb::Client as DynamoDbClient;
use backend::{
    server,
    shopping_cart::ShoppingCartService,
    types::{Environment, StorageBackend},
};
use backend_storage::shopping_cart_item::{
    InMemoryShoppingCartItemStorage, ShoppingCartItemStorage, ShoppingCartItemStore,
};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let environment = Environment::from_env();

    // Configure logging format based on environment
    // Use JSON format for staging/production, regular format for development
    match environment {
        Environment::Production | Environment::Staging => {
            fmt()
                .json()
                .with_env_filter(EnvFilter::from_default_env())
                .init();
        }
        Environment::Development => {
            fmt().with_env_filter(EnvFilter::from_default_env()).init();
        }
    }

    let store: Arc<dyn ShoppingCartItemStore> = match environment.storage_backend() {
        StorageBackend::DynamoDb => {
            let dynamodb_client = Arc::new(DynamoDbClient::new(&environment.aws_config().await));
            let table_name = environment.shopping_cart_table_name();
            let read_consistency = environment.read_consistency();
            tracing::info!(
                "✅ Using DynamoDB table {table_name} with {read_consistency} read consistency"
            );
            Arc::new(ShoppingCartItemStorage::new(
                dynamodb_client,
                table_name,
                read_consistency,
            ))
        }
        StorageBackend::InMemory => {
            tracing::warn!("Using in-memory storage, items are lost on restart");
            Arc::new(InMemoryShoppingCartItemStorage::new())
        }
    };

    let shopping_cart_service = Arc::new(ShoppingCartService::new(store));

    server::start(environment, shopping_cart_service).await
}
