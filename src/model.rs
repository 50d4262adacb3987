//! Core domain types for the order engine.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::bill::{BillResult, OrderSummary};
use crate::catalog::CatalogError;

/// Number of units ordered for one pizza line.
pub type Quantity = u32;

/// Pizza size. Applies to every line of the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub enum SizeTier {
    #[default]
    Small,
    Medium,
    Large,
}

impl SizeTier {
    pub const ALL: [SizeTier; 3] = [SizeTier::Small, SizeTier::Medium, SizeTier::Large];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Result<Self, CatalogError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(CatalogError::InvalidTier(index))
    }

    pub fn label(self) -> &'static str {
        match self {
            SizeTier::Small => "Small",
            SizeTier::Medium => "Medium",
            SizeTier::Large => "Large",
        }
    }
}

impl fmt::Display for SizeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts a tier name (any case) or its index.
impl FromStr for SizeTier {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(index) = s.parse::<usize>() {
            return Self::from_index(index);
        }
        Self::ALL
            .into_iter()
            .find(|tier| tier.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| CatalogError::UnknownSize(s.to_string()))
    }
}

/// A user intent, the input of [`Engine::apply`](crate::Engine::apply).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the menu.
    Menu,
    /// Upsert each selected pizza with the same quantity.
    AddToOrder { pizzas: Vec<String>, quantity: i64 },
    /// Select the size tier by index.
    SetSize(usize),
    /// Select or deselect a topping.
    ToggleTopping { name: String, selected: bool },
    /// Snapshot of the current lines.
    Summary,
    /// Price the order and remember the bill for export.
    CalculateBill,
    /// Reset the order.
    Clear,
    /// Write the last calculated bill, to a default file name if none given.
    Save(Option<PathBuf>),
}

impl Command {
    /// Short name used in logs.
    pub fn action(&self) -> &'static str {
        match self {
            Command::Menu => "menu",
            Command::AddToOrder { .. } => "add",
            Command::SetSize(_) => "size",
            Command::ToggleTopping { .. } => "topping",
            Command::Summary => "summary",
            Command::CalculateBill => "calculate",
            Command::Clear => "clear",
            Command::Save(_) => "save",
        }
    }
}

/// What a successfully applied command produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Menu(String),
    /// State changed; nothing to show.
    Updated,
    Summary(OrderSummary),
    Bill(BillResult),
    Saved(PathBuf),
}
