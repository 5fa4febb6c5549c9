//! Shopping Cart API service

#![deny(clippy::all, clippy::pedantic, clippy::nursery, dead_code, missing_docs)]

/// HTTP routes
pub mod routes;

/// Server bootstrap
pub mod server;

/// Shopping cart item operations
pub mod shopping_cart;

/// Configuration, errors and extractors
pub mod types;
