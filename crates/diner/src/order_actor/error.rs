//! Error types for the Order actor.

use crate::model::PaymentField;
use thiserror::Error;

/// Why checkout or payment was refused.
///
/// These are expected outcomes of a customer's actions, not faults.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum Rejection {
    /// Nothing has been ordered yet.
    #[error("Your order is empty")]
    EmptyCart,

    /// A payment field was left blank.
    #[error("Please enter your {0}")]
    MissingField(PaymentField),

    /// The order was already paid for and the session no longer takes orders.
    #[error("This order has already been placed")]
    SessionClosed,
}

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// Checkout or payment was refused.
    #[error(transparent)]
    Rejected(#[from] Rejection),

    /// The session id does not refer to a live session.
    #[error("Order session not found: {0}")]
    SessionNotFound(String),

    /// The actor answered with an outcome that does not belong to the command sent.
    #[error("Unexpected reply from order actor: {0}")]
    UnexpectedOutcome(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}
