//! Tableau columns.
//!
//! A column holds face-down cards under a face-up tail. Only a suffix that
//! is face-up, strictly descending and alternating in color moves as a
//! unit. Removing the top card turns the new top face-up; that turn is
//! permanent.

use super::pile::{split_top, Pile, PileId, Run};
use crate::cards::{Card, CardId, PileKind, Rank};
use crate::core::config::PileGeometry;
use crate::core::error::{Result, SolitaireError};

/// One of the seven tableau columns.
#[derive(Clone, Debug)]
pub struct TableauPile {
    index: u8,
    cards: Vec<Card>,
    geometry: PileGeometry,
}

impl TableauPile {
    #[must_use]
    pub fn new(index: u8, geometry: PileGeometry) -> Self {
        Self {
            index,
            cards: Vec::new(),
            geometry,
        }
    }

    /// Lay out a column from dealt cards, bottom first.
    ///
    /// Face flags are kept as given, except that the top card is always
    /// turned face-up.
    #[must_use]
    pub fn with_cards(index: u8, geometry: PileGeometry, cards: Vec<Card>) -> Self {
        let mut pile = Self::new(index, geometry);
        for card in cards {
            pile.place(card);
        }
        pile.turn_top();
        pile
    }

    /// Column index, 0 through 6.
    #[must_use]
    pub fn index(&self) -> u8 {
        self.index
    }

    /// Number of face-down cards under the face-up tail.
    #[must_use]
    pub fn face_down_count(&self) -> usize {
        self.cards.iter().filter(|c| !c.face_up).count()
    }

    /// Is `cards` a movable run: all face-up, each card one rank below and
    /// opposite in color to the card beneath it?
    #[must_use]
    pub fn is_legal_run(cards: &[Card]) -> bool {
        cards.iter().all(|c| c.face_up) && cards.windows(2).all(|w| w[1].stacks_on(&w[0]))
    }

    /// The run headed by `card`, if the suffix from `card` is movable.
    #[must_use]
    pub fn legal_run_starting_at(&self, card: CardId) -> Option<&[Card]> {
        let start = self.position_of(card)?;
        let run = &self.cards[start..];
        Self::is_legal_run(run).then_some(run)
    }

    /// Index of the topmost card under the cell.
    ///
    /// Fanned cards overlap, so the search runs from the top down and the
    /// first hit wins.
    #[must_use]
    pub fn card_index_at(&self, x: i32, y: i32) -> Option<usize> {
        self.cards.iter().rposition(|c| c.hit_test(x, y))
    }

    /// Card that would be selected by a click at the cell: a face-up card
    /// heading a legal run.
    #[must_use]
    pub fn selectable_at(&self, x: i32, y: i32) -> Option<&Card> {
        let idx = self.card_index_at(x, y)?;
        let run = &self.cards[idx..];
        Self::is_legal_run(run).then(|| &self.cards[idx])
    }

    pub(crate) fn card_mut(&mut self, card: CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.id() == card)
    }

    /// Put a run back after a failed transfer, without legality checks.
    pub(crate) fn restore(&mut self, run: Run) {
        for card in run {
            self.place(card);
        }
    }

    fn place(&mut self, mut card: Card) {
        card.pile = PileKind::Tableau;
        card.selected = false;
        card.bounds = self.geometry.card_bounds(self.cards.len());
        self.cards.push(card);
    }

    fn turn_top(&mut self) {
        if let Some(top) = self.cards.last_mut() {
            if !top.face_up {
                top.flip();
            }
        }
    }
}

impl Pile for TableauPile {
    fn id(&self) -> PileId {
        PileId::Tableau(self.index)
    }

    fn cards(&self) -> &[Card] {
        &self.cards
    }

    fn accepts(&self, card: &Card) -> bool {
        match self.cards.last() {
            None => card.rank == Rank::KING,
            Some(top) => top.face_up && card.stacks_on(top),
        }
    }

    fn click_hits(&self, x: i32, y: i32) -> bool {
        match self.cards.last() {
            Some(top) => top.hit_test(x, y),
            None => self.geometry.placeholder().contains(x, y),
        }
    }

    fn take_top_run(&mut self, count: usize) -> Result<Run> {
        let run = split_top(&mut self.cards, count)?;
        self.turn_top();
        Ok(run)
    }

    fn receive(&mut self, run: Run) -> Result<()> {
        let Some(bottom) = run.first() else {
            return Ok(());
        };
        if !self.accepts(bottom) {
            return Err(SolitaireError::IllegalMove {
                card: *bottom,
                pile: self.id(),
            });
        }
        self.restore(run);
        Ok(())
    }
}
