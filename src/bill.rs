//! Read-only views derived from an order: the summary and the priced bill.

use std::fmt;

use crate::Amount;
use crate::model::{Quantity, SizeTier};

/// Currency symbol printed in front of every price.
pub const CURRENCY: &str = "₹";

const RULE: &str = "--------------------";

/// Snapshot of the order lines, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderSummary {
    pub lines: Vec<(String, Quantity)>,
    pub size: SizeTier,
    pub toppings: Vec<String>,
}

impl OrderSummary {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn quantity_of(&self, pizza: &str) -> Option<Quantity> {
        self.lines
            .iter()
            .find(|(name, _)| name == pizza)
            .map(|(_, quantity)| *quantity)
    }
}

impl fmt::Display for OrderSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current Order:")?;
        writeln!(f, "{RULE}")?;
        for (name, quantity) in &self.lines {
            writeln!(f, "{name} (x{quantity})")?;
        }
        Ok(())
    }
}

/// One priced line of a bill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillLine {
    pub pizza: String,
    pub quantity: Quantity,
    /// Base price plus size and topping add-ons.
    pub unit_price: Amount,
    /// Exact, not rounded to cents.
    pub subtotal: Amount,
}

impl fmt::Display for BillLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (x{}): {CURRENCY}{}",
            self.pizza, self.quantity, self.subtotal
        )
    }
}

/// Priced order. `total` is the exact sum of the line subtotals; it is only
/// rounded when displayed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BillResult {
    pub lines: Vec<BillLine>,
    pub total: Amount,
}

impl BillResult {
    /// `None` when the total overflows.
    pub fn from_lines(lines: Vec<BillLine>) -> Option<Self> {
        let total = lines
            .iter()
            .try_fold(Amount::ZERO, |total, line| total.checked_add(line.subtotal))?;
        Some(Self { lines, total })
    }

    /// The bill as shown to the user and written to the invoice.
    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BillResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Detailed Bill:")?;
        writeln!(f, "{RULE}")?;
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        writeln!(f, "{RULE}")?;
        write!(f, "Total Bill: {CURRENCY}{}", self.total)
    }
}
