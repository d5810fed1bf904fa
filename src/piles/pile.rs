//! The shared pile contract.
//!
//! Every pile on the table implements `Pile`. There are exactly three
//! implementations (`FoundationPile`, `TableauPile`, `StockPile`) and each
//! answers every method; a pile that never takes cards (the stock) says so
//! through `accepts` rather than by refusing the call.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};
use std::fmt;

use crate::cards::{Card, CardId, PileKind, Suit};
use crate::core::error::Result;

/// Number of tableau columns.
pub const TABLEAU_COUNT: usize = 7;

/// Cards in transit between two piles, bottom card first.
///
/// The longest movable run is King down to Ace, so 13 inline slots avoid
/// heap allocation for every legal transfer.
pub type Run = SmallVec<[Card; 13]>;

/// Identifies one of the twelve piles on the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileId {
    /// Undealt and waste cards.
    Stock,
    /// The foundation for one suit.
    Foundation(Suit),
    /// Tableau column, 0 (leftmost) through 6.
    Tableau(u8),
}

impl PileId {
    /// Kind tag carried by cards in this pile.
    #[must_use]
    pub const fn kind(self) -> PileKind {
        match self {
            PileId::Stock => PileKind::Stock,
            PileId::Foundation(_) => PileKind::Foundation,
            PileId::Tableau(_) => PileKind::Tableau,
        }
    }

    /// All twelve piles: stock, foundations in suit order, then tableaux.
    pub fn all() -> impl Iterator<Item = PileId> {
        std::iter::once(PileId::Stock)
            .chain(Suit::ALL.into_iter().map(PileId::Foundation))
            .chain((0..TABLEAU_COUNT as u8).map(PileId::Tableau))
    }
}

impl fmt::Display for PileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PileId::Stock => write!(f, "Stock"),
            PileId::Foundation(suit) => write!(f, "Foundation({suit})"),
            PileId::Tableau(col) => write!(f, "Tableau({col})"),
        }
    }
}

/// Capabilities shared by every pile.
pub trait Pile {
    /// Which pile this is.
    fn id(&self) -> PileId;

    /// Visible cards, bottom first.
    ///
    /// For the stock this is the waste; undealt cards are hidden.
    fn cards(&self) -> &[Card];

    /// Total cards held, hidden ones included.
    fn len(&self) -> usize {
        self.cards().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Topmost visible card.
    fn top(&self) -> Option<&Card> {
        self.cards().last()
    }

    /// Is `card` the topmost visible card?
    fn is_last_card(&self, card: CardId) -> bool {
        self.top().is_some_and(|top| top.id() == card)
    }

    /// Index of `card` among the visible cards.
    fn position_of(&self, card: CardId) -> Option<usize> {
        self.cards().iter().position(|c| c.id() == card)
    }

    /// Would this pile take `card` as the bottom of an incoming run?
    fn accepts(&self, card: &Card) -> bool;

    /// Does the cell hit the top card, or the placeholder when empty?
    fn click_hits(&self, x: i32, y: i32) -> bool;

    /// Remove the top `count` cards and hand them to the caller.
    ///
    /// Fails with `EmptyPile` when fewer than `count` cards are available.
    fn take_top_run(&mut self, count: usize) -> Result<Run>;

    /// Append a run.
    ///
    /// Fails with `IllegalMove` when `accepts` rejects the run's bottom card.
    /// An empty run is accepted and changes nothing.
    fn receive(&mut self, run: Run) -> Result<()>;
}

/// Wrap a single card as a run.
#[must_use]
pub fn single(card: Card) -> Run {
    smallvec![card]
}

/// Split the top `count` cards off `cards`.
pub(crate) fn split_top(cards: &mut Vec<Card>, count: usize) -> Result<Run> {
    use crate::core::error::SolitaireError;

    let available = cards.len();
    if count > available {
        return Err(SolitaireError::EmptyPile {
            requested: count,
            available,
        });
    }
    Ok(cards.drain(available - count..).collect())
}
