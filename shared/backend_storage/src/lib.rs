//! Backend storage services for the Shopping Cart API
//!
//! This crate provides the shopping cart item data model and the document store
//! implementations the backend persists items with.

pub mod shopping_cart_item;
