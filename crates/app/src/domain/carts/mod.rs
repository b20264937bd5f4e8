//! Carts
//!
//! The cart is a single process-wide ledger of lines, at most one per product.
//! Amounts are never stored on a line; they are computed by joining the ledger
//! against the catalog whenever the cart is read.

pub mod errors;
pub mod models;
mod repositories;
pub mod service;
pub mod totals;

pub use errors::CartsServiceError;
pub use service::*;
