//! [`SessionEntity`] implementation for [`OrderSession`].
//!
//! A session wraps one [`OrderEngine`]. The catalog arrives as the actor's context when the
//! actor starts, so every session prices against the same menu.

use super::commands::{OrderCommand, OrderOutcome};
use super::engine::OrderEngine;
use super::error::OrderError;
use crate::catalog::Catalog;
use crate::model::{OrderSnapshot, SessionId, SessionPolicy};
use async_trait::async_trait;
use session_actor::SessionEntity;
use std::sync::Arc;

/// Parameters for opening an order session.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderOpen {
    pub policy: SessionPolicy,
}

/// One customer's order, as hosted by the order actor.
#[derive(Debug)]
pub struct OrderSession {
    id: SessionId,
    engine: OrderEngine,
}

#[async_trait]
impl SessionEntity for OrderSession {
    type Id = SessionId;
    type Open = OrderOpen;
    type Command = OrderCommand;
    type Outcome = OrderOutcome;
    type View = OrderSnapshot;
    type Context = Arc<Catalog>;
    type Error = OrderError;

    fn open(id: SessionId, params: OrderOpen, catalog: &Arc<Catalog>) -> Result<Self, OrderError> {
        Ok(Self {
            id,
            engine: OrderEngine::new(Arc::clone(catalog), params.policy),
        })
    }

    /// Applies one command to the engine.
    ///
    /// Refusals are answered as [`OrderOutcome::Rejected`] rather than as errors: they
    /// are part of a normal conversation with the customer.
    async fn handle_command(
        &mut self,
        command: OrderCommand,
        _catalog: &Arc<Catalog>,
    ) -> Result<OrderOutcome, OrderError> {
        let outcome = match command {
            OrderCommand::AddItem(item) => OrderOutcome::AddItem(self.engine.add_item(item)),
            OrderCommand::RemoveOne(index) => {
                OrderOutcome::RemoveOne(self.engine.remove_one_occurrence(index))
            }
            OrderCommand::Checkout => match self.engine.checkout() {
                Ok(()) => OrderOutcome::Checkout,
                Err(rejection) => OrderOutcome::Rejected(rejection),
            },
            OrderCommand::Finalize(payment) => match self.engine.finalize(&payment) {
                Ok(()) => OrderOutcome::Finalize,
                Err(rejection) => OrderOutcome::Rejected(rejection),
            },
        };
        Ok(outcome)
    }

    fn view(&self, _catalog: &Arc<Catalog>) -> OrderSnapshot {
        OrderSnapshot {
            session: self.id,
            phase: self.engine.phase(),
            policy: self.engine.policy(),
            summary: self.engine.compute_summary(),
        }
    }
}
