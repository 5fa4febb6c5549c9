//! Error types for shopping cart item storage operations

use std::error::Error as _;

use aws_sdk_dynamodb::config::http::HttpResponse;
use aws_sdk_dynamodb::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::operation::{
    delete_item::DeleteItemError, get_item::GetItemError, put_item::PutItemError, scan::ScanError,
};
use thiserror::Error;

/// Result type alias for storage operations
pub type ShoppingCartItemStorageResult<T> = Result<T, ShoppingCartItemStorageError>;

/// Storage error types for shopping cart item operations
///
/// The display text of every variant is safe to hand back to API clients: SDK
/// errors render as the service error code and message only, never the raw
/// HTTP response.
#[derive(Debug, Error)]
pub enum ShoppingCartItemStorageError {
    /// Failed to write shopping cart item into `DynamoDB`
    #[error("Failed to write shopping cart item into DynamoDB: {}", sdk_error_message(.0))]
    DynamoDbPutError(#[from] SdkError<PutItemError>),

    /// Failed to get shopping cart item from `DynamoDB`
    #[error("Failed to get shopping cart item from DynamoDB: {}", sdk_error_message(.0))]
    DynamoDbGetError(#[from] SdkError<GetItemError>),

    /// Failed to scan shopping cart items from `DynamoDB`
    #[error("Failed to scan shopping cart items from DynamoDB: {}", sdk_error_message(.0))]
    DynamoDbScanError(#[from] SdkError<ScanError>),

    /// Failed to delete shopping cart item from `DynamoDB`
    #[error("Failed to delete shopping cart item from DynamoDB: {}", sdk_error_message(.0))]
    DynamoDbDeleteError(#[from] SdkError<DeleteItemError>),

    /// An item with the same id and category already exists
    #[error("Shopping cart item already exists")]
    ItemExists,

    /// No item exists at the given id and category
    #[error("Shopping cart item not found")]
    ItemNotFound,

    /// Failed to convert a shopping cart item to or from a `DynamoDB` item
    #[error("Failed to parse shopping cart item: {0}")]
    SerializationError(String),
}

impl From<serde_dynamo::Error> for ShoppingCartItemStorageError {
    fn from(err: serde_dynamo::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// `code: message` for service errors, the failure kind and its cause otherwise
fn sdk_error_message<E>(err: &SdkError<E, HttpResponse>) -> String
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
{
    match err.as_service_error() {
        Some(service_err) => match (service_err.code(), service_err.message()) {
            (Some(code), Some(message)) => format!("{code}: {message}"),
            _ => service_err.to_string(),
        },
        None => err
            .source()
            .map_or_else(|| err.to_string(), |source| format!("{err}: {source}")),
    }
}
