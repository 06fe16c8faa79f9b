//! Typed wrappers around the generic session clients.

pub mod order_client;

pub use order_client::OrderClient;
