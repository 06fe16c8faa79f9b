//! # Catalog
//!
//! The fixed, read-only menu. A catalog is built once at startup, shared behind an `Arc`,
//! and only ever searched afterwards.
//!
//! Menus can come from the built-in house menu ([`Catalog::default`]) or from a TOML file:
//!
//! ```toml
//! [[items]]
//! id = 1
//! name = "Pizza"
//! price = 14
//! ingredients = ["pepperoni", "mushrom", "mozarella"]
//! glyph = "🍕"
//! ```
//!
//! Lookups are linear scans; menus are a handful of entries.

use crate::model::{MenuItem, MenuItemId};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Reasons a menu is refused.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate menu id {0}")]
    DuplicateId(MenuItemId),

    #[error("duplicate menu name {0:?}")]
    DuplicateName(String),

    #[error("menu item {0} has an empty name")]
    EmptyName(MenuItemId),

    #[error("menu item {name:?} has an invalid price {price}")]
    InvalidPrice { name: String, price: f64 },

    #[error("failed to parse menu: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to read menu file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Deserialize)]
struct MenuFile {
    #[serde(default)]
    items: Vec<MenuItem>,
}

/// The purchasable items, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    /// Builds a catalog, refusing duplicate ids or names and negative or non-finite prices.
    pub fn new(items: Vec<MenuItem>) -> Result<Self, CatalogError> {
        let mut ids = HashSet::new();
        let mut names = HashSet::new();
        for item in &items {
            if !ids.insert(item.id) {
                return Err(CatalogError::DuplicateId(item.id));
            }
            if item.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(item.id));
            }
            if !names.insert(item.name.as_str()) {
                return Err(CatalogError::DuplicateName(item.name.clone()));
            }
            if !item.price.is_finite() || item.price < 0.0 {
                return Err(CatalogError::InvalidPrice {
                    name: item.name.clone(),
                    price: item.price,
                });
            }
        }
        Ok(Self { items })
    }

    /// Parses a `[[items]]` TOML menu.
    pub fn from_toml_str(raw: &str) -> Result<Self, CatalogError> {
        let file: MenuFile = toml::from_str(raw)?;
        Self::new(file.items)
    }

    /// Reads and parses a TOML menu file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find_by_id(&self, id: MenuItemId) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.name == name)
    }
}

impl Default for Catalog {
    /// The house menu.
    fn default() -> Self {
        Self {
            items: vec![
                MenuItem::new(1, "Pizza", 14.0, ["pepperoni", "mushrom", "mozarella"], "🍕"),
                MenuItem::new(2, "Hamburger", 12.0, ["beef", "cheese", "lettuce"], "🍔"),
                MenuItem::new(3, "Beer", 12.0, ["grain", "hops", "yeast", "water"], "🍺"),
            ],
        }
    }
}
