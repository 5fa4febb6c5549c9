use std::sync::Arc;

use axum::{extract::Path, Extension, Json};
use backend_storage::shopping_cart_item::ShoppingCartItem;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    shopping_cart::ShoppingCartService,
    types::{AppError, ValidatedJson},
};

/// Path parameters addressing a single shopping cart item
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ShoppingCartItemPath {
    /// ID of the item
    pub id: String,
    /// Category (partition key) of the item
    pub category: String,
}

/// Request to create a new shopping cart item
#[derive(Debug, Deserialize, Serialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateShoppingCartItemRequest {
    /// Name of the item
    #[validate(length(min = 1, message = "itemName must not be empty"))]
    pub item_name: String,

    /// Category of the item
    #[validate(length(min = 1, message = "category must not be empty"))]
    pub category: String,
}

/// Request to update a shopping cart item
#[derive(Debug, Deserialize, Serialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShoppingCartItemRequest {
    /// Whether the item has been collected
    pub collected: bool,
}

/// List all shopping cart items
///
/// Returns every item across all categories. No filtering, sorting or
/// pagination is applied.
///
/// # Errors
///
/// Returns an error if:
/// - `400 BAD_REQUEST` - The document store failed while listing items
pub async fn list_items(
    Extension(service): Extension<Arc<ShoppingCartService>>,
) -> Result<Json<Vec<ShoppingCartItem>>, AppError> {
    tracing::info!("Received request for all shopping cart items");

    let items = service.list_all().await?;
    Ok(Json(items))
}

/// Get a shopping cart item by ID and category
///
/// # Errors
///
/// Returns an error if:
/// - `404 NOT_FOUND` - No item with the given ID in the given category
/// - `400 BAD_REQUEST` - The document store rejected the read
pub async fn get_item(
    Path(path): Path<ShoppingCartItemPath>,
    Extension(service): Extension<Arc<ShoppingCartService>>,
) -> Result<Json<ShoppingCartItem>, AppError> {
    tracing::info!("Getting shopping cart item with ID: {}", path.id);

    let item = service.get_by_id(&path.id, &path.category).await?;
    Ok(Json(item))
}

/// Create a shopping cart item
///
/// The ID and creation timestamp are assigned by the server and the item
/// starts out not collected.
///
/// # Returns
///
/// Returns `200 OK` with the stored item
///
/// # Errors
///
/// Returns an error if:
/// - `400 BAD_REQUEST` - Invalid payload or the document store rejected the insert
pub async fn create_item(
    Extension(service): Extension<Arc<ShoppingCartService>>,
    ValidatedJson(payload): ValidatedJson<CreateShoppingCartItemRequest>,
) -> Result<Json<ShoppingCartItem>, AppError> {
    tracing::info!("Creating a new shopping cart item");

    let item = service.create(payload.item_name, payload.category).await?;
    Ok(Json(item))
}

/// Update the collected flag of a shopping cart item
///
/// Name and category are kept from the stored item. The body is checked
/// before the item is looked up, so a malformed body to a missing item
/// answers `400` rather than `404`.
///
/// # Errors
///
/// Returns an error if:
/// - `404 NOT_FOUND` - No item with the given ID in the given category
/// - `400 BAD_REQUEST` - Invalid payload or the document store rejected the update
pub async fn update_item(
    Path(path): Path<ShoppingCartItemPath>,
    Extension(service): Extension<Arc<ShoppingCartService>>,
    ValidatedJson(payload): ValidatedJson<UpdateShoppingCartItemRequest>,
) -> Result<Json<ShoppingCartItem>, AppError> {
    tracing::info!("Updating shopping cart item with ID: {}", path.id);

    let item = service
        .update(&path.id, &path.category, payload.collected)
        .await?;
    Ok(Json(item))
}

/// Delete a shopping cart item
///
/// Succeeds whether or not the item existed.
///
/// # Returns
///
/// Returns `200 OK` with an empty body
///
/// # Errors
///
/// Returns an error if:
/// - `400 BAD_REQUEST` - The document store rejected the delete
pub async fn delete_item(
    Path(path): Path<ShoppingCartItemPath>,
    Extension(service): Extension<Arc<ShoppingCartService>>,
) -> Result<(), AppError> {
    tracing::info!("Deleting shopping cart item with ID: {}", path.id);

    service.delete(&path.id, &path.category).await?;
    Ok(())
}
