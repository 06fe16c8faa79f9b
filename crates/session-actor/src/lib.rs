//! # Session Actor
//!
//! A small runtime for hosting per-customer state machines behind a message channel.
//!
//! Each [`SessionActor`] owns every live session of one entity type and handles requests
//! one at a time. Callers never touch session state directly; they send requests through
//! a cloneable [`SessionClient`] and await the reply. Because only the actor task owns the
//! state, two mutations can never interleave and no locks are needed.
//!
//! ## Layers
//!
//! 1. **Entity** ([`SessionEntity`]): the domain state machine and its hooks.
//! 2. **Runtime** ([`SessionActor`]): the request loop and the session map.
//! 3. **Interface** ([`SessionClient`], [`EntityClient`]): typed async calls.
//!
//! ## Requests
//!
//! | Request | Effect |
//! |---------|--------|
//! | `Open` | builds a session from [`SessionEntity::Open`] params, returns its id |
//! | `View` | returns a [`SessionEntity::View`] projection, or `None` |
//! | `Command` | applies one [`SessionEntity::Command`] and returns its outcome |
//! | `Close` | runs `on_close` and forgets the session |
//!
//! ## Context Injection
//!
//! Collaborators shared by every session (a menu, a price list) are passed once to
//! [`SessionActor::run`] and lent to each hook, instead of being copied into each session.
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers requests from queued expectations so client-side logic can
//! be tested without any entity state.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::SessionActor;
pub use client::SessionClient;
pub use client_trait::EntityClient;
pub use entity::SessionEntity;
pub use error::FrameworkError;
pub use message::{Response, SessionRequest};
