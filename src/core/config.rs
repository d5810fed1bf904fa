//! Table configuration: deal seed and screen layout.
//!
//! The host draws the table; the core only needs to know where each pile
//! sits so it can assign card bounds and resolve clicks. The default
//! `Layout` matches the classic 8x6-cell terminal board:
//!
//! ```text
//!  x=40      x=52                x=82  x=92  x=102 x=112
//!  [stock]   [waste]             [♥]   [♦]   [♣]   [♠]      y=5
//!
//!  [t0] [t1] [t2] [t3] [t4] [t5] [t6]                       y=20
//!  x=40, 52, 64, ...   (each card fanned 2 rows below the last)
//! ```

use serde::{Deserialize, Serialize};

use super::geometry::{Point, Rect, Size};
use crate::cards::Suit;
use crate::piles::{PileId, TABLEAU_COUNT};

/// Where a single pile lives on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PileGeometry {
    /// Top-left cell of the bottom card (and of the empty placeholder).
    pub origin: Point,
    /// Size of one card.
    pub card: Size,
    /// Rows between successive cards. Zero for squared piles.
    pub fan: i32,
}

impl PileGeometry {
    /// Bounds of the card at `index` (0 = bottom of the pile).
    #[must_use]
    pub fn card_bounds(&self, index: usize) -> Rect {
        let dy = self.fan.saturating_mul(i32::try_from(index).unwrap_or(i32::MAX));
        Rect::new(self.origin.down(dy), self.card)
    }

    /// Bounds of the empty-pile placeholder.
    #[must_use]
    pub fn placeholder(&self) -> Rect {
        Rect::new(self.origin, self.card)
    }
}

/// Screen layout of every pile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Card size in cells.
    pub card: Size,

    /// Face-down undealt cards; clicking here draws.
    pub stock: Point,

    /// Face-up drawn cards.
    pub waste: Point,

    /// One slot per suit, ordered as `Suit::ALL`.
    pub foundations: [Point; 4],

    /// Origin of the first tableau column.
    pub tableau: Point,

    /// Horizontal distance between tableau columns.
    pub tableau_spacing: i32,

    /// Vertical distance between fanned tableau cards.
    pub tableau_fan: i32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            card: Size::new(8, 6),
            stock: Point::new(40, 5),
            waste: Point::new(52, 5),
            foundations: [
                Point::new(82, 5),
                Point::new(92, 5),
                Point::new(102, 5),
                Point::new(112, 5),
            ],
            tableau: Point::new(40, 20),
            tableau_spacing: 12,
            tableau_fan: 2,
        }
    }
}

impl Layout {
    /// Geometry for the given pile.
    ///
    /// Tableau indices past the last column are clamped to it.
    #[must_use]
    pub fn geometry(&self, pile: PileId) -> PileGeometry {
        match pile {
            PileId::Stock => self.squared(self.stock),
            PileId::Foundation(suit) => self.squared(self.foundations[suit.index()]),
            PileId::Tableau(col) => {
                let col = usize::from(col).min(TABLEAU_COUNT - 1) as i32;
                PileGeometry {
                    origin: Point::new(self.tableau.x + col * self.tableau_spacing, self.tableau.y),
                    card: self.card,
                    fan: self.tableau_fan,
                }
            }
        }
    }

    /// Geometry of the waste half of the stock pile.
    #[must_use]
    pub fn waste_geometry(&self) -> PileGeometry {
        self.squared(self.waste)
    }

    /// Geometry of the foundation slot for `suit`.
    #[must_use]
    pub fn foundation_geometry(&self, suit: Suit) -> PileGeometry {
        self.geometry(PileId::Foundation(suit))
    }

    fn squared(&self, origin: Point) -> PileGeometry {
        PileGeometry {
            origin,
            card: self.card,
            fan: 0,
        }
    }
}

/// Configuration for a table session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Seed for the first deal. Restarts fork from it.
    pub seed: u64,

    /// On-screen geometry.
    pub layout: Layout,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            layout: Layout::default(),
        }
    }
}

impl TableConfig {
    /// Create a new config with custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with a custom layout.
    #[must_use]
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }
}
