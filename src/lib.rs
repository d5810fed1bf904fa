//! # term-solitaire
//!
//! Rules engine for single-player Klondike played with a mouse in a
//! character-cell terminal.
//!
//! ## Design Principles
//!
//! 1. **The host draws, the core decides**: the front end reports click
//!    cells and pulls `CardView`/`PileView` snapshots. Nothing in this crate
//!    touches the terminal.
//!
//! 2. **Invalid clicks are not errors**: a click either selects, moves,
//!    draws or does nothing. `SolitaireError` only describes what the pile
//!    layer refuses and broken invariants.
//!
//! 3. **Ownership carries the invariants**: piles own their cards by value
//!    and the selection is a single enum, so a card cannot be in two piles
//!    and two cards cannot be active at once.
//!
//! ## Example
//!
//! ```
//! use term_solitaire::{Click, ClickOutcome, Table, TableConfig};
//!
//! let mut table = Table::new(TableConfig::default().with_seed(7));
//!
//! // Click the stock to draw a card.
//! let stock = table.config().layout.stock;
//! let outcome = table.click(Click::primary(stock.x, stock.y));
//! assert!(matches!(outcome, ClickOutcome::Drew(_)));
//! assert_eq!(table.stock().waste().len(), 1);
//! ```
//!
//! ## Modules
//!
//! - `core`: errors, geometry, RNG, configuration
//! - `cards`: cards and the deck
//! - `piles`: foundation, tableau and stock piles
//! - `table`: the click state machine and render snapshots

pub mod cards;
pub mod core;
pub mod piles;
pub mod table;

// Re-export commonly used types
pub use crate::core::{GameRng, Layout, Point, Rect, Result, Size, SolitaireError, TableConfig};

pub use crate::cards::{full_deck, Card, CardId, Color, PileKind, Rank, Suit, DECK_SIZE};

pub use crate::piles::{DrawOutcome, FoundationPile, Pile, PileId, Run, StockPile, TableauPile};

pub use crate::table::{
    CardView, Click, ClickOutcome, Deal, MouseButton, PileView, Selection, Summary, Table,
};
