//! Fixed menu: pizza base prices, topping add-ons and size add-ons.

use std::fmt;

use thiserror::Error;

use crate::Amount;
use crate::model::SizeTier;

/// Which table a failed lookup went to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Pizza,
    Topping,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Pizza => f.write_str("pizza"),
            ItemKind::Topping => f.write_str("topping"),
        }
    }
}

/// Error during a menu lookup.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unknown {kind} '{name}'")]
    UnknownItem { kind: ItemKind, name: String },

    #[error("invalid size tier {0}, expected 0, 1 or 2")]
    InvalidTier(usize),

    #[error("unknown size '{0}', expected small, medium or large")]
    UnknownSize(String),
}

/// A named menu entry and its price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub name: String,
    pub price: Amount,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, price: Amount) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// Read-only price tables. Entries keep menu order.
#[derive(Debug, Clone)]
pub struct Catalog {
    pizzas: Vec<MenuItem>,
    toppings: Vec<MenuItem>,
    sizes: [Amount; 3],
}

impl Catalog {
    /// Build a menu. Size add-ons are indexed by [`SizeTier::index`].
    pub fn new(pizzas: Vec<MenuItem>, toppings: Vec<MenuItem>, sizes: [Amount; 3]) -> Self {
        debug_assert!(sizes.windows(2).all(|w| w[0] <= w[1]));
        Self {
            pizzas,
            toppings,
            sizes,
        }
    }

    pub fn pizzas(&self) -> impl Iterator<Item = &MenuItem> + '_ {
        self.pizzas.iter()
    }

    pub fn toppings(&self) -> impl Iterator<Item = &MenuItem> + '_ {
        self.toppings.iter()
    }

    pub fn pizza_price(&self, name: &str) -> Result<Amount, CatalogError> {
        Self::lookup(&self.pizzas, ItemKind::Pizza, name)
    }

    pub fn topping_price(&self, name: &str) -> Result<Amount, CatalogError> {
        Self::lookup(&self.toppings, ItemKind::Topping, name)
    }

    pub fn size_add_on(&self, tier_index: usize) -> Result<Amount, CatalogError> {
        self.sizes
            .get(tier_index)
            .copied()
            .ok_or(CatalogError::InvalidTier(tier_index))
    }

    /// Human readable menu, one entry per line.
    pub fn render_menu(&self, currency: &str) -> String {
        let mut out = String::from("Pizzas:\n");
        for item in &self.pizzas {
            out.push_str(&format!("  {} - {currency}{}\n", item.name, item.price));
        }
        out.push_str("Sizes:\n");
        for (tier, add_on) in SizeTier::ALL.iter().zip(self.sizes) {
            out.push_str(&format!("  {tier} (+{currency}{add_on})\n"));
        }
        out.push_str("Toppings:\n");
        for item in &self.toppings {
            out.push_str(&format!("  {} (+{currency}{})\n", item.name, item.price));
        }
        out
    }

    fn lookup(items: &[MenuItem], kind: ItemKind, name: &str) -> Result<Amount, CatalogError> {
        items
            .iter()
            .find(|item| item.name == name)
            .map(|item| item.price)
            .ok_or_else(|| CatalogError::UnknownItem {
                kind,
                name: name.to_string(),
            })
    }
}

/// The house menu.
impl Default for Catalog {
    fn default() -> Self {
        Self::new(
            vec![
                MenuItem::new("Margherita", Amount::from_units(750)),
                MenuItem::new("Pepperoni", Amount::from_units(900)),
                MenuItem::new("Veggie", Amount::from_units(600)),
                MenuItem::new("Meat Lovers", Amount::from_units(1200)),
            ],
            vec![
                MenuItem::new("Extra Cheese", Amount::from_units(50)),
                MenuItem::new("Mushrooms", Amount::from_units(30)),
                MenuItem::new("Olives", Amount::from_units(40)),
                MenuItem::new("Pepperoni", Amount::from_units(60)),
            ],
            [
                Amount::from_units(0),
                Amount::from_units(150),
                Amount::from_units(300),
            ],
        )
    }
}
