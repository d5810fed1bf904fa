//! Card placement for a new table.
//!
//! A `Deal` says which cards go in which pile, bottom first. The standard
//! Klondike deal comes from `Deal::shuffled`; tests and hosts can build any
//! other position by filling the vectors directly and handing the result
//! to `Table::from_deal`.

use serde::{Deserialize, Serialize};

use crate::cards::{shuffled_deck, Card};
use crate::core::rng::GameRng;
use crate::piles::TABLEAU_COUNT;

/// Cards in the initial stock of a standard deal.
pub const STOCK_SIZE: usize = 24;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    /// One vector per suit, ordered as `Suit::ALL`.
    pub foundations: [Vec<Card>; 4],
    /// Tableau columns, left to right.
    pub tableaux: [Vec<Card>; TABLEAU_COUNT],
    /// Face-down stock, the last card drawn first.
    pub undealt: Vec<Card>,
    /// Face-up waste, the last card on top.
    pub waste: Vec<Card>,
}

impl Deal {
    /// The standard deal: column `c` gets `c + 1` cards with only the last
    /// face-up, the remaining 24 form the stock.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut deck = shuffled_deck(rng).into_iter();
        let mut deal = Deal::default();

        for (col, pile) in deal.tableaux.iter_mut().enumerate() {
            pile.extend(deck.by_ref().take(col + 1));
            if let Some(top) = pile.last_mut() {
                top.face_up = true;
            }
        }
        deal.undealt.extend(deck);

        debug_assert_eq!(deal.undealt.len(), STOCK_SIZE);
        deal
    }

    /// Total cards placed.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.foundations.iter().map(Vec::len).sum::<usize>()
            + self.tableaux.iter().map(Vec::len).sum::<usize>()
            + self.undealt.len()
            + self.waste.len()
    }
}
