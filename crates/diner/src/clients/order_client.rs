//! # Order Client
//!
//! Provides a high-level API for interacting with the order actor.
//! It wraps a `SessionClient<OrderSession>` and turns the actor's untyped outcomes back
//! into per-operation results.
use crate::model::{
    MenuItemId, OrderSnapshot, OrderSummary, PaymentDetails, SessionId, SessionPolicy,
};
use crate::order_actor::{OrderCommand, OrderError, OrderOpen, OrderOutcome, OrderSession};
use async_trait::async_trait;
use session_actor::{EntityClient, FrameworkError, SessionClient};
use tracing::{debug, instrument};

/// Client for interacting with the order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: SessionClient<OrderSession>,
}

#[async_trait]
impl EntityClient<OrderSession> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &SessionClient<OrderSession> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderError::SessionNotFound(id),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl OrderClient {
    pub fn new(inner: SessionClient<OrderSession>) -> Self {
        Self { inner }
    }

    /// Opens a fresh, empty order.
    #[instrument(skip(self))]
    pub async fn open_session(&self, policy: SessionPolicy) -> Result<SessionId, OrderError> {
        debug!("Sending request");
        self.inner
            .open(OrderOpen { policy })
            .await
            .map_err(Self::map_error)
    }

    /// Adds one unit of `item`. Returns whether the order changed.
    #[instrument(skip(self))]
    pub async fn add_item(&self, session: SessionId, item: MenuItemId) -> Result<bool, OrderError> {
        match self.send(session, OrderCommand::AddItem(item)).await? {
            OrderOutcome::AddItem(added) => Ok(added),
            other => Err(unexpected(other)),
        }
    }

    /// Removes the unit at flat `index`. Returns whether the order changed.
    #[instrument(skip(self))]
    pub async fn remove_one(&self, session: SessionId, index: usize) -> Result<bool, OrderError> {
        match self.send(session, OrderCommand::RemoveOne(index)).await? {
            OrderOutcome::RemoveOne(removed) => Ok(removed),
            other => Err(unexpected(other)),
        }
    }

    /// Asks whether the payment prompt may open.
    ///
    /// Returns [`OrderError::Rejected`] when the order is empty or already placed.
    #[instrument(skip(self))]
    pub async fn checkout(&self, session: SessionId) -> Result<(), OrderError> {
        match self.send(session, OrderCommand::Checkout).await? {
            OrderOutcome::Checkout => Ok(()),
            OrderOutcome::Rejected(rejection) => Err(rejection.into()),
            other => Err(unexpected(other)),
        }
    }

    /// Submits payment. On success the order is cleared.
    #[instrument(skip(self, payment))]
    pub async fn finalize(
        &self,
        session: SessionId,
        payment: PaymentDetails,
    ) -> Result<(), OrderError> {
        match self.send(session, OrderCommand::Finalize(payment)).await? {
            OrderOutcome::Finalize => Ok(()),
            OrderOutcome::Rejected(rejection) => Err(rejection.into()),
            other => Err(unexpected(other)),
        }
    }

    /// Current state of a live session.
    pub async fn snapshot(&self, session: SessionId) -> Result<OrderSnapshot, OrderError> {
        self.view(session)
            .await?
            .ok_or_else(|| OrderError::SessionNotFound(session.to_string()))
    }

    /// The grouped order and its total.
    pub async fn summary(&self, session: SessionId) -> Result<OrderSummary, OrderError> {
        Ok(self.snapshot(session).await?.summary)
    }

    async fn send(
        &self,
        session: SessionId,
        command: OrderCommand,
    ) -> Result<OrderOutcome, OrderError> {
        debug!("Sending request");
        self.inner
            .command(session, command)
            .await
            .map_err(Self::map_error)
    }
}

fn unexpected(outcome: OrderOutcome) -> OrderError {
    OrderError::UnexpectedOutcome(format!("{outcome:?}"))
}
