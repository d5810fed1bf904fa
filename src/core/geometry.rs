//! Character-cell geometry for hit testing.
//!
//! Coordinates are terminal cells: `x` grows rightwards, `y` grows down.
//! The core never draws; it only stores where the host drew things so a
//! click coordinate can be resolved back to a card or pile.

use serde::{Deserialize, Serialize};

/// A cell coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset this point by `dy` rows.
    #[must_use]
    pub const fn down(self, dy: i32) -> Self {
        Self { x: self.x, y: self.y + dy }
    }
}

/// Width and height in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned box, half-open on both axes.
///
/// ```
/// use term_solitaire::core::{Point, Rect, Size};
///
/// let r = Rect::new(Point::new(40, 5), Size::new(8, 6));
/// assert!(r.contains(40, 5));
/// assert!(r.contains(47, 10));
/// assert!(!r.contains(48, 5));
/// assert!(!r.contains(40, 11));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    #[must_use]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self {
            origin,
            width: size.width,
            height: size.height,
        }
    }

    /// Check whether a cell lies inside this box.
    #[must_use]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        self.origin.x <= x
            && x < self.origin.x + self.width
            && self.origin.y <= y
            && y < self.origin.y + self.height
    }
}
