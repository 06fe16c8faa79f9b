//! Plain-text rendering of the kiosk screens.

use super::views::{MenuView, SummaryView};
use std::fmt::Write;

pub const THANK_YOU: &str = "Thank you for your order!";
pub const NOTHING_ON_MENU: &str = "Nothing on the menu right now.";

/// `$14` for whole amounts, `$12.50` otherwise.
///
/// Amounts are rounded to cents first, so sums that drift below a whole number still
/// print without decimals.
pub fn format_price(amount: f64) -> String {
    let cents = (amount * 100.0).round();
    if cents % 100.0 == 0.0 {
        format!("${:.0}", cents / 100.0)
    } else {
        format!("${:.2}", cents / 100.0)
    }
}

pub fn render_menu(menu: &MenuView) -> String {
    if menu.entries.is_empty() {
        return format!("{NOTHING_ON_MENU}\n");
    }
    let mut out = String::new();
    for entry in &menu.entries {
        let _ = writeln!(
            out,
            "[{}] {} {}  {}",
            entry.id,
            entry.glyph,
            entry.name,
            format_price(entry.price)
        );
        if !entry.ingredients.is_empty() {
            let _ = writeln!(out, "      {}", entry.ingredients);
        }
    }
    out
}

pub fn render_summary(summary: &SummaryView) -> String {
    let mut out = String::from("Your Order\n");
    for row in &summary.rows {
        let _ = write!(out, "  {} (remove {})", row.name, row.remove_index);
        if let Some(quantity) = row.multiplier {
            let _ = write!(out, " x{quantity}");
        }
        let _ = writeln!(out, "  {}", format_price(row.unit_price));
    }
    let _ = writeln!(out, "Total {}", format_price(summary.total));
    out.push_str("[Complete Order: type `checkout`]\n");
    out
}

pub fn render_help() -> String {
    [
        "menu            show the menu",
        "add <id>        add one item to your order",
        "remove <index>  remove one unit at that index",
        "order           show your order",
        "checkout        pay for your order",
        "restart         start over with an empty order",
        "help            show this help",
        "quit            leave the kiosk (also while paying)",
    ]
    .join("\n")
        + "\n"
}
