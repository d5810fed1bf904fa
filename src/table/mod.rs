//! The table aggregate and everything the host exchanges with it.
//!
//! - `Table`: piles, selection, click resolution, win detection
//! - `Click` / `ClickOutcome`: input event and its result
//! - `Selection`: the `Idle` / `CardSelected` state
//! - `Deal`: which cards start in which pile
//! - `CardView` / `PileView` / `Summary`: render snapshots

pub mod click;
pub mod deal;
pub mod selection;
#[allow(clippy::module_inception)]
pub mod table;
pub mod view;

pub use click::{Click, ClickOutcome, MouseButton};
pub use deal::{Deal, STOCK_SIZE};
pub use selection::Selection;
pub use table::Table;
pub use view::{CardView, PileView, Summary};
