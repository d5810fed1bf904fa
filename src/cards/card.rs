//! Playing cards: identity plus face state.
//!
//! A `Card` is a value owned by exactly one pile. Moving it between piles
//! moves the value, so the "one pile at a time" rule is upheld by
//! ownership. The pile it currently sits in is mirrored in `Card::pile`
//! because the flip rule depends on it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::geometry::Rect;

/// The four French suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All four suits, in foundation order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Position of this suit in `Suit::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Suit::Hearts => 0,
            Suit::Diamonds => 1,
            Suit::Clubs => 2,
            Suit::Spades => 3,
        }
    }

    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    /// Single glyph used on card faces.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// Card rank, 1 (Ace) through 13 (King).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);

    /// Create a rank, returning `None` outside 1..=13.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= 13 {
            Some(Self(value))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Iterate Ace through King.
    pub fn all() -> impl Iterator<Item = Rank> {
        (1..=13).map(Rank)
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self.0 {
            1 => "A",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "J",
            12 => "Q",
            _ => "K",
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::new(value).ok_or_else(|| format!("rank {value} is outside 1..=13"))
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> u8 {
        rank.0
    }
}

/// Identity of a card: one of the 52 (suit, rank) pairs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId {
    pub suit: Suit,
    pub rank: Rank,
}

impl CardId {
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

/// Kind of pile a card currently sits in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileKind {
    Foundation,
    Tableau,
    /// Both halves of the stock: undealt and waste.
    #[default]
    Stock,
}

/// A card on the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,

    /// Is the face showing?
    pub face_up: bool,

    /// Is this the active (selected) card?
    pub selected: bool,

    /// Kind of pile holding this card. Kept in sync by the piles.
    pub pile: PileKind,

    /// Where the host drew this card. Set by the owning pile.
    pub bounds: Rect,
}

impl Card {
    /// A face-down card in the stock with no screen position yet.
    #[must_use]
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: false,
            selected: false,
            pile: PileKind::Stock,
            bounds: Rect::default(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> CardId {
        CardId::new(self.suit, self.rank)
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    /// Turn the card over.
    ///
    /// Only the stock may turn cards face-down again. Everywhere else a
    /// flip turns a face-down card up and leaves a face-up card alone.
    pub fn flip(&mut self) {
        match self.pile {
            PileKind::Stock => self.face_up = !self.face_up,
            PileKind::Foundation | PileKind::Tableau => self.face_up = true,
        }
    }

    /// True iff this card's rank is exactly one below `other`'s.
    #[must_use]
    pub fn is_adjacent_descending(&self, other: &Card) -> bool {
        self.rank.value() + 1 == other.rank.value()
    }

    /// True iff `self` may sit directly on top of `below` in a tableau.
    #[must_use]
    pub fn stacks_on(&self, below: &Card) -> bool {
        self.is_adjacent_descending(below) && self.color() != below.color()
    }

    /// True iff the cell lies inside the card's on-screen box.
    #[must_use]
    pub fn hit_test(&self, x: i32, y: i32) -> bool {
        self.bounds.contains(x, y)
    }

    /// Face label such as `"A♥"` or `"10♠"`.
    #[must_use]
    pub fn label(&self) -> String {
        self.id().to_string()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.id().fmt(f)
    }
}
