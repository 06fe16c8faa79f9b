//! # Framework Errors
//!
//! Failures of the session runtime itself, as opposed to the domain errors each
//! [`SessionEntity`](crate::SessionEntity) defines.

/// Errors raised by the actor plumbing.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Session actor closed")]
    ActorClosed,
    #[error("Session actor dropped response channel")]
    ActorDropped,
    #[error("Session not found: {0}")]
    NotFound(String),
    #[error("Session error: {0}")]
    Entity(Box<dyn std::error::Error + Send + Sync>),
}
