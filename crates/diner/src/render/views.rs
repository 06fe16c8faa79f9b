//! View models: what the kiosk shows, before it is turned into text.

use crate::catalog::Catalog;
use crate::model::{MenuItemId, OrderSnapshot};

#[derive(Debug, Clone, PartialEq)]
pub struct MenuEntry {
    pub id: MenuItemId,
    pub glyph: String,
    pub name: String,
    /// Ingredients joined with ", ".
    pub ingredients: String,
    pub price: f64,
}

/// The menu as shown to the customer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MenuView {
    pub entries: Vec<MenuEntry>,
    /// Set once the order is locked. A catalog with no items is empty, not hidden.
    pub hidden: bool,
}

impl MenuView {
    pub fn build(catalog: &Catalog, snapshot: &OrderSnapshot) -> Self {
        if !snapshot.accepts_orders() {
            return Self {
                entries: Vec::new(),
                hidden: true,
            };
        }
        let entries = catalog
            .items()
            .iter()
            .map(|item| MenuEntry {
                id: item.id,
                glyph: item.glyph.clone(),
                name: item.name.clone(),
                ingredients: item.ingredients.join(", "),
                price: item.price,
            })
            .collect();
        Self {
            entries,
            hidden: false,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub name: String,
    /// Index to pass to `remove`: the first occurrence of this item in the order.
    pub remove_index: usize,
    /// `None` when only one unit is ordered.
    pub multiplier: Option<u32>,
    pub unit_price: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryView {
    pub rows: Vec<SummaryRow>,
    pub total: f64,
}

impl SummaryView {
    pub fn build(snapshot: &OrderSnapshot) -> Self {
        let rows = snapshot
            .summary
            .lines
            .iter()
            .map(|line| SummaryRow {
                name: line.name.clone(),
                remove_index: line.first_index,
                multiplier: (line.quantity > 1).then_some(line.quantity),
                unit_price: line.unit_price,
            })
            .collect();
        Self {
            rows,
            total: snapshot.summary.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderLine, OrderSummary, Phase, SessionId, SessionPolicy};

    fn snapshot(phase: Phase, lines: Vec<OrderLine>, total: f64) -> OrderSnapshot {
        OrderSnapshot {
            session: SessionId(1),
            phase,
            policy: SessionPolicy::LockAfterPayment,
            summary: OrderSummary { lines, total },
        }
    }

    #[test]
    fn test_menu_lists_catalog_in_order() {
        let view = MenuView::build(&Catalog::default(), &snapshot(Phase::Ordering, vec![], 0.0));
        let names: Vec<&str> = view.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Pizza", "Hamburger", "Beer"]);
        assert_eq!(view.entries[0].ingredients, "pepperoni, mushrom, mozarella");
        assert_eq!(view.entries[2].glyph, "🍺");
    }

    #[test]
    fn test_empty_catalog_is_not_hidden() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        let view = MenuView::build(&catalog, &snapshot(Phase::Ordering, vec![], 0.0));
        assert!(view.entries.is_empty());
        assert!(!view.is_hidden());
    }

    #[test]
    fn test_menu_hidden_once_finalized() {
        let view = MenuView::build(&Catalog::default(), &snapshot(Phase::Finalized, vec![], 0.0));
        assert!(view.is_hidden());
    }

    #[test]
    fn test_summary_rows_use_first_index_and_hide_single_multiplier() {
        let lines = vec![
            OrderLine {
                name: "Beer".into(),
                quantity: 1,
                unit_price: 12.0,
                first_index: 0,
            },
            OrderLine {
                name: "Pizza".into(),
                quantity: 3,
                unit_price: 14.0,
                first_index: 1,
            },
        ];
        let view = SummaryView::build(&snapshot(Phase::Ordering, lines, 54.0));
        assert_eq!(view.rows[0].remove_index, 0);
        assert_eq!(view.rows[0].multiplier, None);
        assert_eq!(view.rows[1].remove_index, 1);
        assert_eq!(view.rows[1].multiplier, Some(3));
        assert_eq!(view.total, 54.0);
    }
}
