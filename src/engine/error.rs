//! Error types for order processing.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::export::ExportError;

/// Top-level error returned by [`Engine::apply`](super::Engine::apply).
///
/// None of these leave the order in a partially updated state.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("please select at least one pizza")]
    EmptySelection,

    #[error("invalid quantity '{0}', expected a positive whole number")]
    InvalidQuantity(String),

    #[error("price of {0} overflows the bill amount")]
    AmountOverflow(String),

    #[error("{0}")]
    Catalog(#[from] CatalogError),

    #[error("{0}")]
    Export(#[from] ExportError),
}
