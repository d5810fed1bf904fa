//! Core support types: errors, geometry, RNG, configuration.
//!
//! Nothing here knows the rules of Klondike; the pile and table modules
//! build on these.

pub mod config;
pub mod error;
pub mod geometry;
pub mod rng;

pub use config::{Layout, PileGeometry, TableConfig};
pub use error::{Result, SolitaireError};
pub use geometry::{Point, Rect, Size};
pub use rng::GameRng;
