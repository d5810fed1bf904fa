//! The active-card state machine.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::piles::PileId;

/// Which card, if any, is active.
///
/// Holding the selection in one place means at most one card can ever be
/// selected. The matching `Card::selected` flag is kept in sync by the
/// table for renderers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    Idle,
    CardSelected {
        card: CardId,
        origin: PileId,
    },
}

impl Selection {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Selection::Idle)
    }

    /// The selected card.
    #[must_use]
    pub fn card(&self) -> Option<CardId> {
        match self {
            Selection::Idle => None,
            Selection::CardSelected { card, .. } => Some(*card),
        }
    }

    /// The pile the selected card sits in.
    #[must_use]
    pub fn origin(&self) -> Option<PileId> {
        match self {
            Selection::Idle => None,
            Selection::CardSelected { origin, .. } => Some(*origin),
        }
    }
}
