use std::sync::Arc;

use aide::openapi::OpenApi;
use axum::{Extension, Router};
use datadog_tracing::axum::{shutdown_signal, OtelAxumLayer, OtelInResponseLayer};
use tokio::net::TcpListener;

use crate::routes::{self, docs::API_TITLE};
use crate::{shopping_cart::ShoppingCartService, types::Environment};

/// Builds the application router with its dependencies attached
pub fn app(environment: Environment, shopping_cart_service: Arc<ShoppingCartService>) -> Router {
    let mut openapi = OpenApi::default();
    openapi.info.title = API_TITLE.to_string();
    openapi.info.version = env!("CARGO_PKG_VERSION").to_string();

    let router = routes::handler().finish_api(&mut openapi);

    router
        .layer(Extension(Arc::new(openapi)))
        .layer(Extension(environment))
        .layer(Extension(shopping_cart_service))
}

/// Starts the server with the given environment and dependencies
///
/// # Errors
///
/// Returns an error if the server fails to start or bind to the port
pub async fn start(
    environment: Environment,
    shopping_cart_service: Arc<ShoppingCartService>,
) -> anyhow::Result<()> {
    let router = app(environment, shopping_cart_service)
        // Include trace context as header into the response
        .layer(OtelInResponseLayer)
        // Start OpenTelemetry trace on incoming request
        .layer(OtelAxumLayer::default())
        .layer(tower_http::timeout::TimeoutLayer::new(
            std::time::Duration::from_secs(30),
        ));

    let addr = std::net::SocketAddr::from((
        [0, 0, 0, 0],
        std::env::var("PORT").map_or(Ok(8001), |p| p.parse())?,
    ));

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🔄 Shopping Cart API started on http://{addr}");

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(anyhow::Error::from)
}
