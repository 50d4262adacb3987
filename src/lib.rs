pub mod amount;
pub mod bill;
pub mod catalog;
pub mod csv;
pub mod engine;
pub mod export;
pub mod model;

pub use amount::Amount;
pub use bill::{BillResult, OrderSummary};
pub use catalog::Catalog;
pub use engine::{Engine, OrderError};
pub use model::{Command, Outcome, SizeTier};
