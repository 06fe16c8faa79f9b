//! Menu entries.
use serde::Deserialize;
use std::fmt::Display;

/// Type-safe identifier for menu items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(pub u32);

impl Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A dish or drink on the menu.
///
/// Menu items are loaded once into a [`Catalog`](crate::catalog::Catalog) and never change
/// afterwards. The kiosk refers to them by [`MenuItemId`]; the order engine stores their
/// `name`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub glyph: String,
}

impl MenuItem {
    /// Creates a new MenuItem.
    ///
    /// # Arguments
    /// * `id` - Unique menu identifier
    /// * `name` - Unique display name, also the key stored in an order
    /// * `price` - Unit price, never negative
    /// * `ingredients` - Listed under the name, in order
    /// * `glyph` - Short picture shown beside the name
    pub fn new<I, S>(
        id: u32,
        name: impl Into<String>,
        price: f64,
        ingredients: I,
        glyph: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: MenuItemId(id),
            name: name.into(),
            price,
            ingredients: ingredients.into_iter().map(Into::into).collect(),
            glyph: glyph.into(),
        }
    }
}
