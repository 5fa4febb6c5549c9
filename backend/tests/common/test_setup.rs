use std::sync::Arc;

use axum::{body::Body, http::Request, response::Response, Router};
use backend::{server, shopping_cart::ShoppingCartService, types::Environment};
use backend_storage::shopping_cart_item::{InMemoryShoppingCartItemStorage, ShoppingCartItemStore};
use tower::ServiceExt;

/// Setup test environment variables with all the required configuration
pub fn setup_test_env() {
    // Load test environment variables
    dotenvy::from_path(".env.example").ok();

    // Initialize tracing for tests
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .ok();
}

/// Router over a fresh in-memory store
pub struct TestSetup {
    pub router: Router,
    pub environment: Environment,
    pub storage: Arc<dyn ShoppingCartItemStore>,
}

impl TestSetup {
    pub fn new() -> Self {
        Self::with_storage(Arc::new(InMemoryShoppingCartItemStorage::new()))
    }

    pub fn with_environment(environment: Environment) -> Self {
        Self::build(environment, Arc::new(InMemoryShoppingCartItemStorage::new()))
    }

    pub fn with_storage(storage: Arc<dyn ShoppingCartItemStore>) -> Self {
        Self::build(Environment::Development, storage)
    }

    fn build(environment: Environment, storage: Arc<dyn ShoppingCartItemStore>) -> Self {
        setup_test_env();

        let shopping_cart_service = Arc::new(ShoppingCartService::new(storage.clone()));
        let router = server::app(environment.clone(), shopping_cart_service);

        Self {
            router,
            environment,
            storage,
        }
    }

    pub async fn send_json_request(
        &self,
        method: &str,
        route: &str,
        payload: serde_json::Value,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method(method)
            .header("Content-Type", "application/json")
            .body(Body::from(payload.to_string()))?;

        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }

    pub async fn send_post_request(
        &self,
        route: &str,
        payload: serde_json::Value,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        self.send_json_request("POST", route, payload).await
    }

    pub async fn send_put_request(
        &self,
        route: &str,
        payload: serde_json::Value,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        self.send_json_request("PUT", route, payload).await
    }

    pub async fn send_get_request(
        &self,
        route: &str,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        self.send_empty_request("GET", route).await
    }

    pub async fn send_delete_request(
        &self,
        route: &str,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        self.send_empty_request("DELETE", route).await
    }

    async fn send_empty_request(
        &self,
        method: &str,
        route: &str,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method(method)
            .body(Body::empty())?;
        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }
}
