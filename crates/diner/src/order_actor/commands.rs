//! Commands accepted by an order session.
//!
//! One variant per kiosk gesture that reaches the engine. Reading the order is not a
//! command; it goes through the actor's `View` request instead.

use super::error::Rejection;
use crate::model::{MenuItemId, PaymentDetails};

#[derive(Debug, Clone)]
pub enum OrderCommand {
    /// Add one unit of a menu item.
    AddItem(MenuItemId),
    /// Remove the unit at a flat selection index.
    RemoveOne(usize),
    /// Ask whether the payment prompt may open.
    Checkout,
    /// Submit the payment form.
    Finalize(PaymentDetails),
}

/// Outcomes of [`OrderCommand`]s. Variants line up with the commands, plus `Rejected`
/// for checkout and payment refusals.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderOutcome {
    /// Whether the selection grew.
    AddItem(bool),
    /// Whether a unit was removed.
    RemoveOne(bool),
    /// The payment prompt may open.
    Checkout,
    /// Payment accepted and the selection cleared.
    Finalize,
    Rejected(Rejection),
}
