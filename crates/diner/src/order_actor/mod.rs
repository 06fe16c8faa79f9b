//! # Order Actor
//!
//! Hosts one [`OrderSession`] per kiosk customer inside a
//! [`SessionActor`](session_actor::SessionActor).
//!
//! ## Structure
//!
//! - [`engine`] - [`OrderEngine`], the synchronous cart state machine
//! - [`entity`] - [`SessionEntity`](session_actor::SessionEntity) impl for [`OrderSession`]
//! - [`commands`] - [`OrderCommand`] and [`OrderOutcome`]
//! - [`error`] - [`Rejection`] and [`OrderError`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use diner::catalog::Catalog;
//! use diner::clients::OrderClient;
//! use diner::model::{MenuItemId, SessionPolicy};
//! use diner::order_actor;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = order_actor::new();
//!     let client = OrderClient::new(generic_client);
//!     tokio::spawn(actor.run(Arc::new(Catalog::default())));
//!
//!     let session = client.open_session(SessionPolicy::LockAfterPayment).await?;
//!     client.add_item(session, MenuItemId(1)).await?;
//!     let summary = client.summary(session).await?;
//!     assert_eq!(summary.total, 14.0);
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod engine;
pub mod entity;
pub mod error;

pub use commands::*;
pub use engine::OrderEngine;
pub use entity::*;
pub use error::*;

use session_actor::{SessionActor, SessionClient};

/// Creates a new Order actor and its client.
pub fn new() -> (SessionActor<OrderSession>, SessionClient<OrderSession>) {
    SessionActor::new(32)
}
