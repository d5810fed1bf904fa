//! Foundation piles: one per suit, built Ace to King.

use super::pile::{split_top, Pile, PileId, Run};
use crate::cards::{Card, CardId, PileKind, Rank, Suit};
use crate::core::config::PileGeometry;
use crate::core::error::{Result, SolitaireError};

/// A foundation bound to a single suit.
///
/// Play only ever adds to a foundation. `take_top_run` exists because the
/// contract is shared, but the table never calls it here.
#[derive(Clone, Debug)]
pub struct FoundationPile {
    suit: Suit,
    cards: Vec<Card>,
    geometry: PileGeometry,
}

impl FoundationPile {
    #[must_use]
    pub fn new(suit: Suit, geometry: PileGeometry) -> Self {
        Self {
            suit,
            cards: Vec::with_capacity(13),
            geometry,
        }
    }

    /// Build a foundation from cards already in play.
    ///
    /// Cards are laid in order without checking; the table validates
    /// the sequence afterwards.
    #[must_use]
    pub fn with_cards(suit: Suit, geometry: PileGeometry, cards: Vec<Card>) -> Self {
        let mut pile = Self::new(suit, geometry);
        for card in cards {
            pile.place(card);
        }
        pile
    }

    #[must_use]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Holds Ace through King.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cards.len() == 13
    }

    /// Does the pile read Ace, 2, 3, ... in its own suit?
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.cards
            .iter()
            .enumerate()
            .all(|(i, c)| c.suit == self.suit && usize::from(c.rank.value()) == i + 1)
    }

    pub(crate) fn card_mut(&mut self, card: CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.id() == card)
    }

    /// Put a run back after a failed transfer.
    pub(crate) fn restore(&mut self, run: Run) {
        for card in run {
            self.place(card);
        }
    }

    fn place(&mut self, mut card: Card) {
        card.pile = PileKind::Foundation;
        card.selected = false;
        card.flip();
        card.bounds = self.geometry.card_bounds(self.cards.len());
        self.cards.push(card);
    }
}

impl Pile for FoundationPile {
    fn id(&self) -> PileId {
        PileId::Foundation(self.suit)
    }

    fn cards(&self) -> &[Card] {
        &self.cards
    }

    fn accepts(&self, card: &Card) -> bool {
        if card.suit != self.suit {
            return false;
        }
        match self.cards.last() {
            None => card.rank == Rank::ACE,
            Some(top) => top.is_adjacent_descending(card),
        }
    }

    fn click_hits(&self, x: i32, y: i32) -> bool {
        match self.cards.last() {
            Some(top) => top.hit_test(x, y),
            None => self.geometry.placeholder().contains(x, y),
        }
    }

    fn take_top_run(&mut self, count: usize) -> Result<Run> {
        split_top(&mut self.cards, count)
    }

    fn receive(&mut self, run: Run) -> Result<()> {
        let Some(bottom) = run.first() else {
            return Ok(());
        };
        if run.len() != 1 || !self.accepts(bottom) {
            return Err(SolitaireError::IllegalMove {
                card: *bottom,
                pile: self.id(),
            });
        }
        self.restore(run);
        Ok(())
    }
}
