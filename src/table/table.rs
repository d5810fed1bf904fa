//! The table: all twelve piles plus the active-card state machine.
//!
//! ## Click resolution
//!
//! A primary click is tried against these rules in order; the first that
//! applies wins:
//!
//! 1. Card selected, click on a foundation that takes it: move it there.
//! 2. Card selected, click on another tableau that takes it: move the run
//!    it heads.
//! 3. Card selected, anything else: release the selection.
//! 4. Nothing selected, click on a movable tableau card or the top waste
//!    card: select it.
//! 5. Nothing selected, click on the stock: draw (or recycle).
//! 6. Otherwise nothing happens.
//!
//! Trying moves before selections means one click never both releases a
//! card and picks up another.

use log::{debug, error, info};
use rustc_hash::FxHashSet;
use std::time::Duration;

use super::click::{Click, ClickOutcome, MouseButton};
use super::deal::Deal;
use super::selection::Selection;
use super::view::{CardView, PileView, Summary};
use crate::cards::{Card, CardId, Suit, DECK_SIZE};
use crate::core::config::TableConfig;
use crate::core::error::{Result, SolitaireError};
use crate::core::rng::GameRng;
use crate::piles::{
    DrawOutcome, FoundationPile, Pile, PileId, Run, StockPile, TableauPile, TABLEAU_COUNT,
};

/// A Klondike table for one session.
#[derive(Clone, Debug)]
pub struct Table {
    config: TableConfig,
    rng: GameRng,
    foundations: [FoundationPile; 4],
    tableaux: [TableauPile; TABLEAU_COUNT],
    stock: StockPile,
    selection: Selection,
    moves_made: u32,
}

impl Table {
    /// Deal a new game from `config.seed`.
    #[must_use]
    pub fn new(config: TableConfig) -> Self {
        let mut rng = GameRng::new(config.seed);
        let deal = Deal::shuffled(&mut rng);
        let table = Self::assemble(config, rng, deal);
        debug_assert!(table.check_invariants().is_ok(), "fresh deal is inconsistent");
        info!("dealt new table from seed {}", table.rng.seed());
        table
    }

    /// Build a table from an explicit card placement.
    ///
    /// Pile and face flags are normalized: foundation and waste cards face
    /// up, undealt cards face down, each tableau top face up. Fails with
    /// `InvariantViolation` unless the deal holds each of the 52 cards
    /// exactly once and every foundation runs Ace upwards in its suit.
    pub fn from_deal(config: TableConfig, deal: Deal) -> Result<Self> {
        let rng = GameRng::new(config.seed);
        let table = Self::assemble(config, rng, deal);
        table.check_invariants()?;
        Ok(table)
    }

    fn assemble(config: TableConfig, rng: GameRng, deal: Deal) -> Self {
        let layout = &config.layout;
        let Deal {
            foundations,
            tableaux,
            undealt,
            waste,
        } = deal;

        let mut foundation_cards = foundations.into_iter();
        let foundations = Suit::ALL.map(|suit| {
            let cards = foundation_cards.next().unwrap_or_default();
            FoundationPile::with_cards(suit, layout.foundation_geometry(suit), cards)
        });

        let mut tableau_cards = tableaux.into_iter();
        let tableaux = std::array::from_fn(|col| {
            let index = col as u8;
            let cards = tableau_cards.next().unwrap_or_default();
            TableauPile::with_cards(index, layout.geometry(PileId::Tableau(index)), cards)
        });

        let stock = StockPile::with_cards(
            layout.geometry(PileId::Stock),
            layout.waste_geometry(),
            undealt,
            waste,
        );

        Self {
            config,
            rng,
            foundations,
            tableaux,
            stock,
            selection: Selection::Idle,
            moves_made: 0,
        }
    }

    /// Throw away the current game and deal a fresh one.
    ///
    /// The new deal comes from a fork of the session RNG, so the sequence
    /// of restarts is reproducible from the configured seed.
    pub fn restart(&mut self) {
        let mut rng = self.rng.fork();
        let deal = Deal::shuffled(&mut rng);
        info!("restarting with seed {}", rng.seed());

        let parent = std::mem::replace(&mut self.rng, GameRng::new(0));
        *self = Self::assemble(self.config.clone(), parent, deal);
        debug_assert!(self.check_invariants().is_ok(), "restarted deal is inconsistent");
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    #[must_use]
    pub fn foundation(&self, suit: Suit) -> &FoundationPile {
        &self.foundations[suit.index()]
    }

    /// Tableau column `index`, if it exists.
    #[must_use]
    pub fn tableau(&self, index: usize) -> Option<&TableauPile> {
        self.tableaux.get(index)
    }

    #[must_use]
    pub fn stock(&self) -> &StockPile {
        &self.stock
    }

    /// Look up any pile by id.
    #[must_use]
    pub fn pile(&self, id: PileId) -> Option<&dyn Pile> {
        match id {
            PileId::Stock => Some(&self.stock),
            PileId::Foundation(suit) => Some(&self.foundations[suit.index()]),
            PileId::Tableau(col) => self.tableaux.get(usize::from(col)).map(|t| t as &dyn Pile),
        }
    }

    fn pile_mut(&mut self, id: PileId) -> Option<&mut dyn Pile> {
        match id {
            PileId::Stock => Some(&mut self.stock),
            PileId::Foundation(suit) => Some(&mut self.foundations[suit.index()]),
            PileId::Tableau(col) => self
                .tableaux
                .get_mut(usize::from(col))
                .map(|t| t as &mut dyn Pile),
        }
    }

    fn card_mut(&mut self, pile: PileId, card: CardId) -> Option<&mut Card> {
        match pile {
            PileId::Stock => self.stock.card_mut(card),
            PileId::Foundation(suit) => self.foundations[suit.index()].card_mut(card),
            PileId::Tableau(col) => self.tableaux.get_mut(usize::from(col))?.card_mut(card),
        }
    }

    /// Every foundation is complete.
    ///
    /// Checked as "tableaux and stock are empty", which is the same thing
    /// while the table holds all 52 cards.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.tableaux.iter().all(|t| t.is_empty()) && self.stock.is_empty()
    }

    // === Click handling ===

    /// Resolve one click. Never fails: illegal intentions are no-ops.
    pub fn click(&mut self, click: Click) -> ClickOutcome {
        let outcome = if self.is_won() {
            ClickOutcome::Ignored
        } else {
            match click.button {
                MouseButton::Primary => self.primary_click(click.x, click.y),
                MouseButton::Secondary => self.secondary_click(click.x, click.y),
            }
        };

        debug!("click ({}, {}) {:?} -> {:?}", click.x, click.y, click.button, outcome);
        debug_assert_eq!(self.check_invariants(), Ok(()));
        outcome
    }

    fn primary_click(&mut self, x: i32, y: i32) -> ClickOutcome {
        if let Selection::CardSelected { card, origin } = self.selection {
            if let Some(to) = self.foundation_target(card, origin, x, y) {
                return self.transfer(origin, to, 1);
            }
            if let Some((to, count)) = self.tableau_target(card, origin, x, y) {
                return self.transfer(origin, to, count);
            }
            self.deselect();
            return ClickOutcome::Deselected;
        }

        if let Some((card, pile)) = self.selectable_at(x, y) {
            self.select(card, pile);
            return ClickOutcome::Selected { card, pile };
        }

        if self.stock.draw_region_hits(x, y) {
            return match self.stock.draw() {
                DrawOutcome::Drew(card) => {
                    self.moves_made += 1;
                    info!("drew {card}");
                    ClickOutcome::Drew(card)
                }
                DrawOutcome::Recycled { cards } => {
                    info!("recycled {cards} card(s) into the stock");
                    ClickOutcome::Recycled { cards }
                }
                DrawOutcome::Exhausted => ClickOutcome::Ignored,
            };
        }

        ClickOutcome::Ignored
    }

    /// Secondary button: release a selection, or put the last drawn card
    /// back on the stock.
    fn secondary_click(&mut self, x: i32, y: i32) -> ClickOutcome {
        if !self.selection.is_idle() {
            self.deselect();
            return ClickOutcome::Deselected;
        }

        if self.stock.click_hits(x, y) {
            if let Some(card) = self.stock.return_to_stock() {
                info!("returned {card} to the stock");
                return ClickOutcome::ReturnedToStock(card);
            }
        }

        ClickOutcome::Ignored
    }

    /// Foundation under the cell that takes `card`, which must be the top
    /// of its pile.
    fn foundation_target(&self, card: CardId, origin: PileId, x: i32, y: i32) -> Option<PileId> {
        let head = self.pile(origin)?.top().filter(|top| top.id() == card)?;
        self.foundations
            .iter()
            .find(|f| f.click_hits(x, y))
            .filter(|f| f.accepts(head))
            .map(Pile::id)
    }

    /// Tableau under the cell that takes the run headed by `card`, with the
    /// run length.
    fn tableau_target(&self, card: CardId, origin: PileId, x: i32, y: i32) -> Option<(PileId, usize)> {
        let source = self.pile(origin)?;
        let start = source.position_of(card)?;
        let head = &source.cards()[start];
        let count = source.cards().len() - start;

        self.tableaux
            .iter()
            .find(|t| t.id() != origin && t.click_hits(x, y))
            .filter(|t| t.accepts(head))
            .map(|t| (t.id(), count))
    }

    /// Card a click at the cell would pick up, with its pile.
    fn selectable_at(&self, x: i32, y: i32) -> Option<(CardId, PileId)> {
        let from_tableau = self
            .tableaux
            .iter()
            .find_map(|t| t.selectable_at(x, y).map(|c| (c.id(), t.id())));

        from_tableau.or_else(|| {
            self.stock
                .top()
                .filter(|_| self.stock.waste_top_hits(x, y))
                .map(|c| (c.id(), PileId::Stock))
        })
    }

    fn select(&mut self, card: CardId, origin: PileId) {
        if let Some(c) = self.card_mut(origin, card) {
            c.selected = true;
            self.selection = Selection::CardSelected { card, origin };
            debug!("selected {card} in {origin}");
        }
    }

    fn deselect(&mut self) {
        if let Selection::CardSelected { card, origin } = std::mem::take(&mut self.selection) {
            if let Some(c) = self.card_mut(origin, card) {
                c.selected = false;
            }
        }
    }

    /// Move the top `count` cards of `from` onto `to`. The selection is
    /// always released.
    fn transfer(&mut self, from: PileId, to: PileId, count: usize) -> ClickOutcome {
        self.deselect();

        let run = match self.pile_mut(from).map(|p| p.take_top_run(count)) {
            Some(Ok(run)) => run,
            Some(Err(err)) => {
                debug!("nothing to move from {from}: {err}");
                return ClickOutcome::Deselected;
            }
            None => return ClickOutcome::Deselected,
        };

        let received = self
            .pile_mut(to)
            .map_or(Ok(()), |dest| dest.receive(run.clone()));
        if let Err(err) = &received {
            // Destinations are checked with `accepts` before taking, so
            // reaching this is a bug in the rules above.
            error!("logic fault moving {count} card(s) {from} -> {to}: {err}");
            self.restore(from, run);
            debug_assert!(received.is_ok(), "state machine attempted an illegal move");
            return ClickOutcome::Deselected;
        }

        self.moves_made += 1;
        let won = self.is_won();
        info!("moved {count} card(s) {from} -> {to}");
        if won {
            info!("all foundations complete after {} moves", self.moves_made);
        }
        ClickOutcome::Moved {
            from,
            to,
            cards: count,
            won,
        }
    }

    fn restore(&mut self, from: PileId, run: Run) {
        match from {
            PileId::Stock => self.stock.restore(run),
            PileId::Foundation(suit) => self.foundations[suit.index()].restore(run),
            PileId::Tableau(col) => {
                if let Some(t) = self.tableaux.get_mut(usize::from(col)) {
                    t.restore(run);
                }
            }
        }
    }

    // === Validation ===

    /// Check card accounting, pile tags, face flags and the selection.
    pub fn check_invariants(&self) -> Result<()> {
        let violation = |msg: String| Err(SolitaireError::InvariantViolation(msg));

        let mut seen = FxHashSet::default();
        let mut count = 0usize;
        for (pile, cards) in self.all_cards() {
            for card in cards {
                count += 1;
                if !seen.insert(card.id()) {
                    return violation(format!("{card} appears more than once"));
                }
                if card.pile != pile.kind() {
                    return violation(format!("{card} in {pile} is tagged {:?}", card.pile));
                }
            }
        }
        if count != DECK_SIZE {
            return violation(format!("table holds {count} cards, expected {DECK_SIZE}"));
        }

        for f in &self.foundations {
            if !f.is_well_formed() || f.cards().iter().any(|c| !c.face_up) {
                return violation(format!("{} is out of sequence", f.id()));
            }
        }
        for t in &self.tableaux {
            if t.top().is_some_and(|c| !c.face_up) {
                return violation(format!("{} has a face-down top card", t.id()));
            }
        }
        if self.stock.undealt().iter().any(|c| c.face_up) || self.stock.waste().iter().any(|c| !c.face_up) {
            return violation("stock cards face the wrong way".to_string());
        }

        let flagged: Vec<(PileId, CardId)> = self
            .all_cards()
            .flat_map(|(pile, cards)| cards.iter().filter(|c| c.selected).map(move |c| (pile, c.id())))
            .collect();
        match (self.selection, flagged.as_slice()) {
            (Selection::Idle, []) => Ok(()),
            (Selection::CardSelected { card, origin }, [(pile, marked)]) if *pile == origin && *marked == card => {
                Ok(())
            }
            (selection, flagged) => violation(format!(
                "selection {selection:?} disagrees with flagged cards {flagged:?}"
            )),
        }
    }

    /// Every card with the pile holding it: undealt, waste, foundations,
    /// then tableaux.
    fn all_cards(&self) -> impl Iterator<Item = (PileId, &[Card])> {
        [(PileId::Stock, self.stock.undealt()), (PileId::Stock, self.stock.waste())]
            .into_iter()
            .chain(self.foundations.iter().map(|f| (f.id(), f.cards())))
            .chain(self.tableaux.iter().map(|t| (t.id(), t.cards())))
    }

    // === Rendering ===

    /// Every card, in the order of `all_cards`.
    #[must_use]
    pub fn card_views(&self) -> Vec<CardView> {
        self.all_cards()
            .flat_map(|(pile, cards)| {
                cards
                    .iter()
                    .enumerate()
                    .map(move |(pos, card)| CardView::new(card, pile, pos))
            })
            .collect()
    }

    /// The twelve piles in `PileId::all` order.
    #[must_use]
    pub fn pile_views(&self) -> Vec<PileView> {
        let layout = &self.config.layout;
        PileId::all()
            .filter_map(|id| {
                let pile = self.pile(id)?;
                let undealt = if id == PileId::Stock { self.stock.undealt().len() } else { 0 };
                Some(PileView {
                    id,
                    cards: pile
                        .cards()
                        .iter()
                        .enumerate()
                        .map(|(pos, card)| CardView::new(card, id, pos))
                        .collect(),
                    undealt,
                    is_empty: pile.is_empty(),
                    placeholder: layout.geometry(id).placeholder(),
                })
            })
            .collect()
    }

    /// Status for the host's status line. `elapsed` is the host's clock.
    #[must_use]
    pub fn summary(&self, elapsed: Duration) -> Summary {
        Summary {
            won: self.is_won(),
            foundation_cards: self.foundations.iter().map(|f| f.len()).sum(),
            moves_made: self.moves_made,
            elapsed,
        }
    }
}
