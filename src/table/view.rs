//! Read-only snapshots for the renderer.
//!
//! The host pulls these after each click and draws from them; nothing here
//! feeds back into the table.

use serde::Serialize;
use std::time::Duration;

use crate::cards::{Card, Rank, Suit};
use crate::core::geometry::Rect;
use crate::piles::PileId;

/// Everything needed to draw one card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub suit: Suit,
    pub rank: Rank,
    pub face_up: bool,
    pub selected: bool,
    pub pile: PileId,
    /// Index within its pile's sequence, bottom = 0. Stock cards count
    /// within their half (undealt or waste).
    pub position: usize,
    pub bounds: Rect,
}

impl CardView {
    pub(crate) fn new(card: &Card, pile: PileId, position: usize) -> Self {
        Self {
            suit: card.suit,
            rank: card.rank,
            face_up: card.face_up,
            selected: card.selected,
            pile,
            position,
            bounds: card.bounds,
        }
    }

    /// Text to print on the card: its label, or the back pattern.
    #[must_use]
    pub fn glyph(&self) -> String {
        if self.face_up {
            format!("{}{}", self.rank.symbol(), self.suit.symbol())
        } else {
            "~~".to_string()
        }
    }
}

/// One pile as the renderer sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PileView {
    pub id: PileId,
    /// Visible cards, bottom first. For the stock this is the waste.
    pub cards: Vec<CardView>,
    /// Face-down stock cards; zero for other piles.
    pub undealt: usize,
    pub is_empty: bool,
    /// Where to draw the empty-slot outline.
    pub placeholder: Rect,
}

/// End-of-frame status line data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub won: bool,
    /// Cards already on foundations, 0 to 52.
    pub foundation_cards: usize,
    /// Successful moves and draws since the deal.
    pub moves_made: u32,
    /// Session time as measured by the host.
    pub elapsed: Duration,
}
