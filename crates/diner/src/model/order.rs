//! Order-side data: session ids, the payment policy, and the derived summary.

use serde::Deserialize;
use std::fmt::Display;

/// Type-safe identifier for kiosk sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(pub u32);

impl From<u32> for SessionId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "session_{}", self.0)
    }
}

/// What a session does once payment goes through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SessionPolicy {
    /// The order is final: the menu is hidden and no further ordering is accepted.
    #[default]
    LockAfterPayment,
    /// The cart is emptied and the same session takes a new order.
    ResetAfterPayment,
}

impl Display for SessionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionPolicy::LockAfterPayment => write!(f, "lock-after-payment"),
            SessionPolicy::ResetAfterPayment => write!(f, "reset-after-payment"),
        }
    }
}

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Ordering,
    Finalized,
}

/// One distinct item of the current order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
    /// Flat index of the first occurrence of `name` in the selection.
    pub first_index: usize,
}

/// The aggregated order: lines in first-added order plus the total.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderSummary {
    pub lines: Vec<OrderLine>,
    pub total: f64,
}

impl OrderSummary {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Read-only view of a session, as returned by the order actor.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSnapshot {
    pub session: SessionId,
    pub phase: Phase,
    pub policy: SessionPolicy,
    pub summary: OrderSummary,
}

impl OrderSnapshot {
    /// Whether the menu should be shown and items accepted.
    pub fn accepts_orders(&self) -> bool {
        self.phase == Phase::Ordering
    }
}
