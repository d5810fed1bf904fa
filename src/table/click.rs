//! Click input and the result of resolving it.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::piles::PileId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Primary,
    Secondary,
}

/// A mouse click at a cell, as reported by the host event loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Click {
    pub x: i32,
    pub y: i32,
    pub button: MouseButton,
}

impl Click {
    #[must_use]
    pub const fn primary(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            button: MouseButton::Primary,
        }
    }

    #[must_use]
    pub const fn secondary(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            button: MouseButton::Secondary,
        }
    }
}

/// What a click did to the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickOutcome {
    /// Cards moved between piles. `won` is set when this move finished the game.
    Moved {
        from: PileId,
        to: PileId,
        cards: usize,
        won: bool,
    },
    /// A card became active.
    Selected { card: CardId, pile: PileId },
    /// The active card was released without moving.
    Deselected,
    /// A card was drawn onto the waste.
    Drew(CardId),
    /// The waste was turned back into the stock.
    Recycled { cards: usize },
    /// The top waste card went back onto the stock.
    ReturnedToStock(CardId),
    /// Nothing happened.
    Ignored,
}

impl ClickOutcome {
    /// Did the click change the table?
    #[must_use]
    pub fn changed_state(&self) -> bool {
        !matches!(self, ClickOutcome::Ignored)
    }
}
