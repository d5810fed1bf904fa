//! The standard 52-card deck.

use super::card::{Card, Rank, Suit};
use crate::core::rng::GameRng;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// A fresh, ordered deck: Hearts A..K, then Diamonds, Clubs, Spades.
///
/// Every card starts face-down in the stock.
#[must_use]
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::ALL {
        for rank in Rank::all() {
            deck.push(Card::new(suit, rank));
        }
    }

    debug_assert_eq!(deck.len(), DECK_SIZE, "Deck must have exactly 52 cards");
    deck
}

/// A full deck shuffled with `rng`.
#[must_use]
pub fn shuffled_deck(rng: &mut GameRng) -> Vec<Card> {
    let mut deck = full_deck();
    rng.shuffle(&mut deck);
    deck
}
