use axum::response::Response;
use backend_storage::shopping_cart_item::ShoppingCartItem;
use http_body_util::BodyExt;
use serde_json::json;

/// Parse response body to JSON
pub async fn parse_response_body(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Parse response body to a shopping cart item
pub async fn parse_item(response: Response) -> ShoppingCartItem {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Read the raw response body
pub async fn response_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// Create request payload
pub fn create_item_request(item_name: &str, category: &str) -> serde_json::Value {
    json!({
        "itemName": item_name,
        "category": category,
    })
}

/// Route addressing a single item
pub fn item_route(id: &str, category: &str) -> String {
    format!("/shoppingcartitem/{id}/{category}")
}
