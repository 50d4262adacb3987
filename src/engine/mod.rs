//! Order processing engine.
//!
//! The engine owns the current order and the menu it is priced against.
//! Every user intent arrives as a [`Command`] and maps to one operation:
//! add, set size, toggle topping, summary, calculate, clear or save.
//! Also supports an async stream of commands.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use tokio_stream::{Stream, StreamExt};
use tracing::{info, warn};

use crate::bill::{BillLine, BillResult, CURRENCY, OrderSummary};
use crate::catalog::Catalog;
use crate::export;
use crate::model::{Command, Outcome, Quantity, SizeTier};

mod state;
pub use state::OrderState;

mod error;
pub use error::OrderError;

/// The order engine.
///
/// Holds the order being built and the text of the last calculated bill,
/// which is what `save` exports.
pub struct Engine {
    catalog: Catalog,
    order: OrderState,
    last_bill: Option<String>,
    clock: fn() -> NaiveDateTime,
}

/// Public API
impl Engine {
    /// Engine on the house menu.
    pub fn new() -> Self {
        Self::with_catalog(Catalog::default())
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            order: OrderState::default(),
            last_bill: None,
            clock: local_now,
        }
    }

    /// Replace the source of export timestamps.
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    pub fn order(&self) -> &OrderState {
        &self.order
    }

    /// Text of the most recently calculated bill, if any.
    pub fn last_bill(&self) -> Option<&str> {
        self.last_bill.as_deref()
    }

    /// Run the engine over the given command stream, writing each outcome to
    /// `out`. Rejected commands are reported and do not stop the engine.
    pub async fn run(
        &mut self,
        mut stream: impl Stream<Item = Command> + Unpin,
        out: &mut impl Write,
    ) -> io::Result<()> {
        while let Some(command) = stream.next().await {
            match self.apply(command) {
                Ok(outcome) => Self::render(&outcome, out)?,
                Err(e) => warn!("{e}"),
            }
        }
        out.flush()
    }

    /// Apply a single command on top of the current order.
    pub fn apply(&mut self, command: Command) -> Result<Outcome, OrderError> {
        let action = command.action();
        let result = match command {
            Command::Menu => Ok(Outcome::Menu(self.catalog.render_menu(CURRENCY))),
            Command::AddToOrder { pizzas, quantity } => self
                .add_to_order(pizzas.as_slice(), quantity)
                .map(|()| Outcome::Updated),
            Command::SetSize(tier) => self.set_size(tier).map(|()| Outcome::Updated),
            Command::ToggleTopping { name, selected } => self
                .toggle_topping(&name, selected)
                .map(|()| Outcome::Updated),
            Command::Summary => Ok(Outcome::Summary(self.summary())),
            Command::CalculateBill => self.calculate_bill().map(Outcome::Bill),
            Command::Clear => {
                self.clear();
                Ok(Outcome::Updated)
            }
            Command::Save(target) => self.save(target.as_deref()).map(Outcome::Saved),
        };
        Self::log_result(action, &result);
        result
    }

    /// Upsert every selected pizza with `quantity`. All-or-nothing: the
    /// order is untouched when any name or the quantity is rejected.
    pub fn add_to_order(
        &mut self,
        pizzas: &[impl AsRef<str>],
        quantity: i64,
    ) -> Result<(), OrderError> {
        if pizzas.is_empty() {
            return Err(OrderError::EmptySelection);
        }

        let quantity = Quantity::try_from(quantity)
            .ok()
            .filter(|q| *q > 0)
            .ok_or_else(|| OrderError::InvalidQuantity(quantity.to_string()))?;

        for pizza in pizzas {
            self.catalog.pizza_price(pizza.as_ref())?;
        }

        for pizza in pizzas {
            self.order.upsert(pizza.as_ref(), quantity);
        }

        Ok(())
    }

    pub fn set_size(&mut self, tier_index: usize) -> Result<(), OrderError> {
        self.order.set_size(SizeTier::from_index(tier_index)?);
        Ok(())
    }

    pub fn toggle_topping(&mut self, name: &str, selected: bool) -> Result<(), OrderError> {
        self.catalog.topping_price(name)?;
        self.order.set_topping(name, selected);
        Ok(())
    }

    /// Reset lines, toppings and size, and forget the last bill.
    pub fn clear(&mut self) {
        self.order.clear();
        self.last_bill = None;
    }

    pub fn summary(&self) -> OrderSummary {
        self.order.summary()
    }

    /// Price every line with the order-wide size and toppings, and remember
    /// the rendered bill for export.
    pub fn calculate_bill(&mut self) -> Result<BillResult, OrderError> {
        let bill = self.price_order()?;
        self.last_bill = Some(bill.text());
        Ok(bill)
    }

    /// Export the last calculated bill.
    pub fn save(&self, target: Option<&Path>) -> Result<PathBuf, OrderError> {
        let path = export::export_bill(self.last_bill(), target, (self.clock)())?;
        Ok(path)
    }
}

/// Private API
impl Engine {
    /// Compute the bill without touching any state.
    fn price_order(&self) -> Result<BillResult, OrderError> {
        let overflow = |pizza: &str| OrderError::AmountOverflow(pizza.to_string());

        let mut add_ons = self.catalog.size_add_on(self.order.size().index())?;
        for topping in self.order.toppings() {
            add_ons = add_ons
                .checked_add(self.catalog.topping_price(topping)?)
                .ok_or_else(|| overflow(topping))?;
        }

        let lines = self
            .order
            .lines()
            .map(|(pizza, quantity)| {
                let unit_price = self
                    .catalog
                    .pizza_price(pizza)?
                    .checked_add(add_ons)
                    .ok_or_else(|| overflow(pizza))?;
                let subtotal = unit_price
                    .checked_mul(quantity)
                    .ok_or_else(|| overflow(pizza))?;
                Ok(BillLine {
                    pizza: pizza.to_string(),
                    quantity,
                    unit_price,
                    subtotal,
                })
            })
            .collect::<Result<Vec<_>, OrderError>>()?;

        BillResult::from_lines(lines).ok_or_else(|| overflow("the order total"))
    }

    fn render(outcome: &Outcome, out: &mut impl Write) -> io::Result<()> {
        match outcome {
            Outcome::Menu(menu) => write!(out, "{menu}"),
            Outcome::Updated => Ok(()),
            Outcome::Summary(summary) => write!(out, "{summary}"),
            Outcome::Bill(bill) => writeln!(out, "{bill}"),
            Outcome::Saved(path) => {
                writeln!(out, "Bill saved successfully to: {}", path.display())
            }
        }
    }

    /// Small helper to log `apply` results
    fn log_result(action: &str, result: &Result<Outcome, OrderError>) {
        match result {
            Ok(Outcome::Bill(bill)) => {
                info!(
                    action,
                    lines = bill.lines.len(),
                    total = %bill.total,
                    "{action} applied"
                );
            }
            Ok(Outcome::Saved(path)) => {
                info!(action, path = %path.display(), "{action} applied");
            }
            Ok(_) => {
                info!(action, "{action} applied");
            }
            Err(e) => {
                info!(action, reason = %e, "{action} skipped");
            }
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}
