/// API reference pages
pub mod docs;
mod health;
/// Shopping cart item handlers
pub mod shopping_cart_items;

use aide::axum::{routing::get, ApiRouter};

/// Creates the router with all handler routes
pub fn handler() -> ApiRouter {
    ApiRouter::new()
        .merge(docs::handler())
        .api_route("/health", get(health::handler))
        .api_route(
            "/shoppingcartitem",
            get(shopping_cart_items::list_items).post(shopping_cart_items::create_item),
        )
        .api_route(
            "/shoppingcartitem/{id}/{category}",
            get(shopping_cart_items::get_item)
                .put(shopping_cart_items::update_item)
                .delete(shopping_cart_items::delete_item),
        )
}
