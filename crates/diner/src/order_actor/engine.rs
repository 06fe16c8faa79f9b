//! # Order Engine
//!
//! The cart state machine. It owns the selection (one entry per unit ordered, in the order
//! the units were added) and derives everything else from it on demand.
//!
//! All operations are synchronous. Lookups that miss and indices that are out of range are
//! silent no-ops; only checkout and payment can be refused, and they say why through
//! [`Rejection`].

use super::error::Rejection;
use crate::catalog::Catalog;
use crate::model::{MenuItemId, OrderLine, OrderSummary, PaymentDetails, Phase, SessionPolicy};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct OrderEngine {
    catalog: Arc<Catalog>,
    policy: SessionPolicy,
    selection: Vec<String>,
    phase: Phase,
}

impl OrderEngine {
    pub fn new(catalog: Arc<Catalog>, policy: SessionPolicy) -> Self {
        Self {
            catalog,
            policy,
            selection: Vec::new(),
            phase: Phase::Ordering,
        }
    }

    pub fn policy(&self) -> SessionPolicy {
        self.policy
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The raw selection: one item name per unit, oldest first.
    pub fn selection(&self) -> &[String] {
        &self.selection
    }

    /// Appends one unit of the item with this id.
    ///
    /// Returns `false` without changing anything when the id is unknown or the order has
    /// been finalized.
    pub fn add_item(&mut self, id: MenuItemId) -> bool {
        if self.phase == Phase::Finalized {
            debug!(item = %id, "Ignoring add on finalized order");
            return false;
        }
        let Some(item) = self.catalog.find_by_id(id) else {
            debug!(item = %id, "Ignoring add of unknown item");
            return false;
        };
        self.selection.push(item.name.clone());
        true
    }

    /// Removes the unit at flat `index` of the selection.
    ///
    /// Returns `false` without changing anything when the index is out of range.
    pub fn remove_one_occurrence(&mut self, index: usize) -> bool {
        if index >= self.selection.len() {
            debug!(index, len = self.selection.len(), "Ignoring out-of-range removal");
            return false;
        }
        self.selection.remove(index);
        true
    }

    /// Groups the selection by name in first-occurrence order.
    ///
    /// One pass: each name's line is created at its first occurrence, which is also the
    /// flat index recorded as `first_index`.
    pub fn compute_summary(&self) -> OrderSummary {
        let mut lines: Vec<OrderLine> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut total = 0.0;

        for (index, name) in self.selection.iter().enumerate() {
            let unit_price = self.unit_price(name);
            total += unit_price;
            match positions.get(name.as_str()) {
                Some(&pos) => lines[pos].quantity += 1,
                None => {
                    positions.insert(name.as_str(), lines.len());
                    lines.push(OrderLine {
                        name: name.clone(),
                        quantity: 1,
                        unit_price,
                        first_index: index,
                    });
                }
            }
        }

        OrderSummary { lines, total }
    }

    /// Whether the payment prompt may open.
    pub fn checkout(&self) -> Result<(), Rejection> {
        if self.phase == Phase::Finalized {
            return Err(Rejection::SessionClosed);
        }
        if self.selection.is_empty() {
            return Err(Rejection::EmptyCart);
        }
        Ok(())
    }

    /// Accepts payment and completes the order.
    ///
    /// Every field must be non-blank. The selection itself is not checked here; the
    /// payment prompt is only reachable through [`checkout`](Self::checkout). On success
    /// the selection is cleared; under [`SessionPolicy::LockAfterPayment`] the engine
    /// then refuses further ordering.
    pub fn finalize(&mut self, payment: &PaymentDetails) -> Result<(), Rejection> {
        if self.phase == Phase::Finalized {
            return Err(Rejection::SessionClosed);
        }
        if let Some(field) = payment.first_blank() {
            return Err(Rejection::MissingField(field));
        }
        self.selection.clear();
        if self.policy == SessionPolicy::LockAfterPayment {
            self.phase = Phase::Finalized;
        }
        Ok(())
    }

    fn unit_price(&self, name: &str) -> f64 {
        self.catalog
            .find_by_name(name)
            .map(|item| item.price)
            .unwrap_or_default()
    }
}
