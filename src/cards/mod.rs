//! Cards and the deck.
//!
//! - `Card`: suit, rank, face-up and selected flags, owning pile kind
//! - `CardId`: the (suit, rank) identity used by selection and views
//! - `full_deck` / `shuffled_deck`: the 52 cards of a session

pub mod card;
pub mod deck;

pub use card::{Card, CardId, Color, PileKind, Rank, Suit};
pub use deck::{full_deck, shuffled_deck, DECK_SIZE};
