//! Stock and waste.
//!
//! Both halves are stacks whose top is the end of the `Vec`. Drawing pops
//! the undealt top and pushes it onto the waste, so the waste holds the
//! draw order bottom-to-top. Recycling pops the waste back onto undealt,
//! which reverses it: the first card drawn in the last pass ends up on top
//! and is drawn first again.

use super::pile::{split_top, Pile, PileId, Run};
use crate::cards::{Card, CardId, PileKind};
use crate::core::config::PileGeometry;
use crate::core::error::{Result, SolitaireError};

/// What a click on the draw region did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    /// One card moved to the waste, face-up.
    Drew(CardId),
    /// Undealt was empty; the waste was turned back over.
    Recycled { cards: usize },
    /// Both halves are empty.
    Exhausted,
}

/// The stock pile with its waste.
#[derive(Clone, Debug)]
pub struct StockPile {
    undealt: Vec<Card>,
    waste: Vec<Card>,
    geometry: PileGeometry,
    waste_geometry: PileGeometry,
}

impl StockPile {
    #[must_use]
    pub fn new(geometry: PileGeometry, waste_geometry: PileGeometry) -> Self {
        Self {
            undealt: Vec::new(),
            waste: Vec::new(),
            geometry,
            waste_geometry,
        }
    }

    /// Build a stock from dealt cards, bottom first.
    ///
    /// Undealt cards are turned face-down and waste cards face-up.
    #[must_use]
    pub fn with_cards(
        geometry: PileGeometry,
        waste_geometry: PileGeometry,
        undealt: Vec<Card>,
        waste: Vec<Card>,
    ) -> Self {
        let mut pile = Self::new(geometry, waste_geometry);
        for card in undealt {
            pile.push_undealt(card);
        }
        for card in waste {
            pile.push_waste(card);
        }
        pile
    }

    /// Face-down cards, bottom first. The last one is drawn next.
    #[must_use]
    pub fn undealt(&self) -> &[Card] {
        &self.undealt
    }

    /// Face-up drawn cards, bottom first.
    #[must_use]
    pub fn waste(&self) -> &[Card] {
        &self.waste
    }

    /// Draw one card, or recycle the waste when undealt is empty.
    pub fn draw(&mut self) -> DrawOutcome {
        match self.undealt.pop() {
            Some(card) => {
                let id = card.id();
                self.push_waste(card);
                DrawOutcome::Drew(id)
            }
            None if self.waste.is_empty() => DrawOutcome::Exhausted,
            None => DrawOutcome::Recycled {
                cards: self.recycle(),
            },
        }
    }

    /// Turn the whole waste back into undealt cards. Returns how many moved.
    pub fn recycle(&mut self) -> usize {
        let count = self.waste.len();
        while let Some(card) = self.waste.pop() {
            self.push_undealt(card);
        }
        count
    }

    /// Undo the most recent draw: top waste card back onto undealt.
    pub fn return_to_stock(&mut self) -> Option<CardId> {
        let card = self.waste.pop()?;
        let id = card.id();
        self.push_undealt(card);
        Some(id)
    }

    /// Is the cell on the undealt half (the draw region)?
    #[must_use]
    pub fn draw_region_hits(&self, x: i32, y: i32) -> bool {
        self.geometry.placeholder().contains(x, y)
    }

    /// Is the cell on the top waste card?
    #[must_use]
    pub fn waste_top_hits(&self, x: i32, y: i32) -> bool {
        self.waste.last().is_some_and(|c| c.hit_test(x, y))
    }

    pub(crate) fn card_mut(&mut self, card: CardId) -> Option<&mut Card> {
        self.waste
            .iter_mut()
            .chain(self.undealt.iter_mut())
            .find(|c| c.id() == card)
    }

    /// Put a run back on the waste after a failed transfer.
    pub(crate) fn restore(&mut self, run: Run) {
        for card in run {
            self.push_waste(card);
        }
    }

    fn push_undealt(&mut self, mut card: Card) {
        card.pile = PileKind::Stock;
        card.selected = false;
        if card.face_up {
            card.flip();
        }
        card.bounds = self.geometry.card_bounds(self.undealt.len());
        self.undealt.push(card);
    }

    fn push_waste(&mut self, mut card: Card) {
        card.pile = PileKind::Stock;
        if !card.face_up {
            card.flip();
        }
        card.bounds = self.waste_geometry.card_bounds(self.waste.len());
        self.waste.push(card);
    }
}

impl Pile for StockPile {
    fn id(&self) -> PileId {
        PileId::Stock
    }

    fn cards(&self) -> &[Card] {
        &self.waste
    }

    fn len(&self) -> usize {
        self.undealt.len() + self.waste.len()
    }

    /// Nothing is ever played onto the stock.
    fn accepts(&self, _card: &Card) -> bool {
        false
    }

    fn click_hits(&self, x: i32, y: i32) -> bool {
        self.draw_region_hits(x, y) || self.waste_top_hits(x, y)
    }

    /// Takes from the waste only.
    fn take_top_run(&mut self, count: usize) -> Result<Run> {
        split_top(&mut self.waste, count)
    }

    fn receive(&mut self, run: Run) -> Result<()> {
        match run.first() {
            None => Ok(()),
            Some(bottom) => Err(SolitaireError::IllegalMove {
                card: *bottom,
                pile: PileId::Stock,
            }),
        }
    }
}
