//! Turning catalog and order state into what the kiosk prints.
//!
//! [`views`] builds plain view models; [`terminal`] lays them out as text; [`mask`] holds
//! the payment input masks.

pub mod mask;
pub mod terminal;
pub mod views;

pub use mask::{digits_only, mask_card_number};
pub use terminal::{
    format_price, render_help, render_menu, render_summary, NOTHING_ON_MENU, THANK_YOU,
};
pub use views::{MenuEntry, MenuView, SummaryRow, SummaryView};
