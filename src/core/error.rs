//! Error type for pile transfers and table validation.
//!
//! Player mistakes (clicking an illegal destination, clicking empty felt)
//! are not errors: the table resolves them to `ClickOutcome::Ignored` or
//! `ClickOutcome::Deselected`. These variants describe what the pile layer
//! refuses and what `Table::check_invariants` finds.

use thiserror::Error;

use crate::cards::Card;
use crate::piles::PileId;

/// Errors raised by piles and table validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolitaireError {
    /// Tried to take more cards than the pile holds.
    #[error("cannot take {requested} card(s) from a pile holding {available}")]
    EmptyPile { requested: usize, available: usize },

    /// `receive` was handed a run whose bottom card the pile rejects.
    #[error("{pile} does not accept {card}")]
    IllegalMove { card: Card, pile: PileId },

    /// Card accounting is broken (count is not 52, or a duplicate card).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SolitaireError>;
