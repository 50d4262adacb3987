use crate::bill::OrderSummary;
use crate::model::{Quantity, SizeTier};

/// The current selection: pizza lines, one size and a set of toppings.
/// Size and toppings apply to every line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OrderState {
    /// First-insertion order; names are unique.
    lines: Vec<(String, Quantity)>,
    size: SizeTier,
    /// Selection order; names are unique.
    toppings: Vec<String>,
}

impl OrderState {
    pub fn lines(&self) -> impl Iterator<Item = (&str, Quantity)> + '_ {
        self.lines.iter().map(|(name, quantity)| (name.as_str(), *quantity))
    }

    pub fn size(&self) -> SizeTier {
        self.size
    }

    pub fn toppings(&self) -> impl Iterator<Item = &str> + '_ {
        self.toppings.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Set the quantity of `pizza`, replacing any previous quantity.
    pub fn upsert(&mut self, pizza: &str, quantity: Quantity) {
        match self.lines.iter_mut().find(|(name, _)| name == pizza) {
            Some((_, existing)) => *existing = quantity,
            None => self.lines.push((pizza.to_string(), quantity)),
        }
    }

    pub fn set_size(&mut self, size: SizeTier) {
        self.size = size;
    }

    pub fn set_topping(&mut self, topping: &str, selected: bool) {
        let position = self.toppings.iter().position(|name| name == topping);
        match (selected, position) {
            (true, None) => self.toppings.push(topping.to_string()),
            (false, Some(idx)) => {
                self.toppings.remove(idx);
            }
            _ => {}
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn summary(&self) -> OrderSummary {
        OrderSummary {
            lines: self.lines.clone(),
            size: self.size,
            toppings: self.toppings.clone(),
        }
    }
}
