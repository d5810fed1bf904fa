//! Piles: the containers that own cards and decide what may land on them.
//!
//! ## Key Types
//!
//! - `Pile`: shared capability trait
//! - `FoundationPile`: same suit, Ace up
//! - `TableauPile`: alternating colors, King down
//! - `StockPile`: undealt cards and the waste
//! - `PileId`: identifies one of the twelve piles

pub mod foundation;
pub mod pile;
pub mod stock;
pub mod tableau;

pub use foundation::FoundationPile;
pub use pile::{single, Pile, PileId, Run, TABLEAU_COUNT};
pub use stock::{DrawOutcome, StockPile};
pub use tableau::TableauPile;
