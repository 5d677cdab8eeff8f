//! Error types for rule loading and inventory exchanges.
//!
//! None of these are fatal. Loading errors drop a single section; exchange
//! errors make the current tick a no-op.

use thiserror::Error;

/// A configured section could not be turned into a rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("section `{section}` is missing required field `{field}`")]
    MissingField {
        section: String,
        field: &'static str,
    },
}

/// An inventory exchange was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExchangeError {
    #[error("slot {index} is outside the inventory (size {size})")]
    OutOfRange { index: usize, size: usize },

    #[error("slot {index} has no item to swap from")]
    EmptySource { index: usize },
}
