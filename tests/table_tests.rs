//! Click state machine integration tests.
//!
//! These tests drive a `Table` only through `click` and check the
//! resulting piles, selection and outcomes.

use term_solitaire::{
    full_deck, Card, CardId, Click, ClickOutcome, Deal, Pile, PileId, Rank, Selection, Suit, Table,
    TableConfig,
};

// =============================================================================
// Helpers
// =============================================================================

fn rank(value: u8) -> Rank {
    Rank::new(value).unwrap()
}

fn id(suit: Suit, value: u8) -> CardId {
    CardId::new(suit, rank(value))
}

/// Remove a card from `deck`, setting its face.
fn take(deck: &mut Vec<Card>, suit: Suit, value: u8, face_up: bool) -> Card {
    let pos = deck.iter().position(|c| c.id() == id(suit, value)).unwrap();
    let mut card = deck.remove(pos);
    card.face_up = face_up;
    card
}

/// A deal with the given tableau columns; every other card goes to the stock.
fn deal_with(columns: &[(usize, &[(Suit, u8, bool)])]) -> (Deal, Vec<Card>) {
    let mut deck = full_deck();
    let mut deal = Deal::default();
    for (col, cards) in columns {
        deal.tableaux[*col] = cards
            .iter()
            .map(|&(suit, value, up)| take(&mut deck, suit, value, up))
            .collect();
    }
    (deal, deck)
}

fn table_from(mut deal: Deal, rest: Vec<Card>) -> Table {
    deal.undealt = rest;
    Table::from_deal(TableConfig::default(), deal).unwrap()
}

/// A cell inside only the given tableau card.
fn tableau_cell(col: usize, index: usize) -> (i32, i32) {
    (40 + 12 * col as i32 + 1, 20 + 2 * index as i32 + 1)
}

fn click_at((x, y): (i32, i32)) -> Click {
    Click::primary(x, y)
}

fn foundation_cell(suit: Suit) -> (i32, i32) {
    (82 + 10 * suit.index() as i32 + 1, 6)
}

const STOCK: (i32, i32) = (41, 6);
const WASTE: (i32, i32) = (53, 6);

fn selected_count(table: &Table) -> usize {
    table.card_views().iter().filter(|c| c.selected).count()
}

// =============================================================================
// Dealing
// =============================================================================

/// A fresh deal has columns of 1..=7 with only the tops face-up and a
/// 24-card face-down stock.
#[test]
fn test_fresh_deal_shape() {
    let table = Table::new(TableConfig::default().with_seed(2024));

    for col in 0..7 {
        let pile = table.tableau(col).unwrap();
        assert_eq!(pile.len(), col + 1);
        assert!(pile.top().unwrap().face_up);
        assert_eq!(pile.face_down_count(), col);
    }
    assert_eq!(table.stock().undealt().len(), 24);
    assert!(table.stock().undealt().iter().all(|c| !c.face_up));
    assert!(table.stock().waste().is_empty());
    assert!(table.selection().is_idle());
}

// =============================================================================
// Foundation moves
// =============================================================================

/// Selecting an Ace and clicking its foundation moves it and turns the card
/// underneath.
#[test]
fn test_ace_to_foundation_turns_new_top() {
    let (deal, rest) = deal_with(&[(0, &[(Suit::Clubs, 9, false), (Suit::Hearts, 1, true)])]);
    let mut table = table_from(deal, rest);

    let outcome = table.click(click_at(tableau_cell(0, 1)));
    assert_eq!(
        outcome,
        ClickOutcome::Selected {
            card: id(Suit::Hearts, 1),
            pile: PileId::Tableau(0)
        }
    );
    assert_eq!(selected_count(&table), 1);

    let outcome = table.click(click_at(foundation_cell(Suit::Hearts)));
    assert_eq!(
        outcome,
        ClickOutcome::Moved {
            from: PileId::Tableau(0),
            to: PileId::Foundation(Suit::Hearts),
            cards: 1,
            won: false
        }
    );

    assert_eq!(table.foundation(Suit::Hearts).len(), 1);
    let column = table.tableau(0).unwrap();
    assert_eq!(column.len(), 1);
    assert!(column.top().unwrap().face_up);
    assert!(table.selection().is_idle());
    assert_eq!(selected_count(&table), 0);
}

/// Clicking the wrong suit's foundation releases the card without moving.
#[test]
fn test_wrong_foundation_deselects() {
    let (deal, rest) = deal_with(&[(0, &[(Suit::Hearts, 1, true)])]);
    let mut table = table_from(deal, rest);

    table.click(click_at(tableau_cell(0, 0)));
    let outcome = table.click(click_at(foundation_cell(Suit::Spades)));

    assert_eq!(outcome, ClickOutcome::Deselected);
    assert_eq!(table.tableau(0).unwrap().len(), 1);
    assert!(table.foundation(Suit::Spades).is_empty());
    assert_eq!(selected_count(&table), 0);
}

/// Only a single top card may go to a foundation, never the head of a run.
#[test]
fn test_run_head_cannot_go_to_foundation() {
    let mut deck = full_deck();
    let mut deal = Deal::default();
    deal.foundations[Suit::Spades.index()] = (1..=8).map(|v| take(&mut deck, Suit::Spades, v, true)).collect();
    deal.tableaux[0] = vec![
        take(&mut deck, Suit::Spades, 9, true),
        take(&mut deck, Suit::Hearts, 8, true),
    ];
    let mut table = table_from(deal, deck);

    let outcome = table.click(click_at(tableau_cell(0, 0)));
    assert!(matches!(outcome, ClickOutcome::Selected { .. }));

    let outcome = table.click(click_at(foundation_cell(Suit::Spades)));
    assert_eq!(outcome, ClickOutcome::Deselected);
    assert_eq!(table.foundation(Suit::Spades).len(), 8);
    assert_eq!(table.tableau(0).unwrap().len(), 2);
}

// =============================================================================
// Tableau moves
// =============================================================================

/// Selecting the head of a run moves the whole run.
#[test]
fn test_run_moves_as_unit() {
    let (deal, rest) = deal_with(&[
        (
            0,
            &[
                (Suit::Clubs, 5, false),
                (Suit::Spades, 9, true),
                (Suit::Hearts, 8, true),
                (Suit::Clubs, 7, true),
            ],
        ),
        (1, &[(Suit::Diamonds, 10, true)]),
    ]);
    let mut table = table_from(deal, rest);

    let outcome = table.click(click_at(tableau_cell(0, 1)));
    assert_eq!(
        outcome,
        ClickOutcome::Selected {
            card: id(Suit::Spades, 9),
            pile: PileId::Tableau(0)
        }
    );

    let outcome = table.click(click_at(tableau_cell(1, 0)));
    assert_eq!(
        outcome,
        ClickOutcome::Moved {
            from: PileId::Tableau(0),
            to: PileId::Tableau(1),
            cards: 3,
            won: false
        }
    );

    let dest = table.tableau(1).unwrap();
    let ranks: Vec<u8> = dest.cards().iter().map(|c| c.rank.value()).collect();
    assert_eq!(ranks, vec![10, 9, 8, 7]);
    assert!(dest.cards().iter().all(|c| c.pile == term_solitaire::PileKind::Tableau));

    let source = table.tableau(0).unwrap();
    assert_eq!(source.len(), 1);
    assert!(source.top().unwrap().face_up);
}

/// Clicking a card in the middle of a run moves only the cards above it.
#[test]
fn test_mid_run_selection_moves_suffix() {
    let (deal, rest) = deal_with(&[
        (
            0,
            &[
                (Suit::Spades, 9, true),
                (Suit::Hearts, 8, true),
                (Suit::Clubs, 7, true),
            ],
        ),
        (1, &[(Suit::Clubs, 9, true)]),
    ]);
    let mut table = table_from(deal, rest);

    table.click(click_at(tableau_cell(0, 1)));
    assert_eq!(table.selection().card(), Some(id(Suit::Hearts, 8)));

    let outcome = table.click(click_at(tableau_cell(1, 0)));
    assert!(matches!(outcome, ClickOutcome::Moved { cards: 2, .. }));
    assert_eq!(table.tableau(0).unwrap().len(), 1);
    assert_eq!(table.tableau(1).unwrap().len(), 3);
}

/// Only a King may land on an empty column.
#[test]
fn test_king_to_empty_column() {
    let (deal, rest) = deal_with(&[
        (0, &[(Suit::Diamonds, 3, false), (Suit::Spades, 13, true)]),
        (2, &[(Suit::Hearts, 12, true)]),
    ]);
    let mut table = table_from(deal, rest);
    let empty_column = tableau_cell(1, 0);

    table.click(click_at(tableau_cell(2, 0)));
    assert_eq!(table.click(click_at(empty_column)), ClickOutcome::Deselected);
    assert_eq!(table.tableau(2).unwrap().len(), 1);

    table.click(click_at(tableau_cell(0, 1)));
    let outcome = table.click(click_at(empty_column));
    assert!(matches!(
        outcome,
        ClickOutcome::Moved {
            from: PileId::Tableau(0),
            to: PileId::Tableau(1),
            cards: 1,
            ..
        }
    ));
    assert!(table.tableau(0).unwrap().top().unwrap().face_up);

    // The queen now fits on the king.
    table.click(click_at(tableau_cell(2, 0)));
    assert!(matches!(table.click(click_at(tableau_cell(1, 0))), ClickOutcome::Moved { .. }));
    assert!(table.tableau(2).unwrap().is_empty());
}

/// Same color is rejected even with the right rank.
#[test]
fn test_same_color_rejected() {
    let (deal, rest) = deal_with(&[
        (0, &[(Suit::Hearts, 6, true)]),
        (1, &[(Suit::Diamonds, 7, true)]),
    ]);
    let mut table = table_from(deal, rest);

    table.click(click_at(tableau_cell(0, 0)));
    assert_eq!(table.click(click_at(tableau_cell(1, 0))), ClickOutcome::Deselected);
    assert_eq!(table.tableau(0).unwrap().len(), 1);
}

/// Face-down cards cannot be picked up.
#[test]
fn test_face_down_card_not_selectable() {
    let (deal, rest) = deal_with(&[(0, &[(Suit::Hearts, 6, false), (Suit::Spades, 2, true)])]);
    let mut table = table_from(deal, rest);

    // Row 20 is covered only by the face-down bottom card.
    assert_eq!(table.click(Click::primary(41, 20)), ClickOutcome::Ignored);
    assert!(table.selection().is_idle());
}

// =============================================================================
// Selection priority
// =============================================================================

/// With a card selected, clicking another movable card releases the first
/// instead of picking up the second.
#[test]
fn test_click_on_other_card_only_deselects() {
    let (deal, rest) = deal_with(&[
        (0, &[(Suit::Hearts, 6, true)]),
        (1, &[(Suit::Hearts, 9, true)]),
    ]);
    let mut table = table_from(deal, rest);

    table.click(click_at(tableau_cell(0, 0)));
    assert_eq!(table.click(click_at(tableau_cell(1, 0))), ClickOutcome::Deselected);
    assert!(table.selection().is_idle());

    let outcome = table.click(click_at(tableau_cell(1, 0)));
    assert_eq!(
        outcome,
        ClickOutcome::Selected {
            card: id(Suit::Hearts, 9),
            pile: PileId::Tableau(1)
        }
    );
}

/// Clicking the selected card's own pile releases it.
#[test]
fn test_click_origin_deselects() {
    let (deal, rest) = deal_with(&[(0, &[(Suit::Hearts, 6, true)])]);
    let mut table = table_from(deal, rest);

    table.click(click_at(tableau_cell(0, 0)));
    assert_eq!(table.click(click_at(tableau_cell(0, 0))), ClickOutcome::Deselected);
    assert_eq!(table.selection(), Selection::Idle);
}

/// A click on empty felt with nothing selected changes nothing.
#[test]
fn test_click_on_empty_space_is_noop() {
    let mut table = Table::new(TableConfig::default());
    let before = table.card_views();

    assert_eq!(table.click(Click::primary(0, 0)), ClickOutcome::Ignored);
    assert_eq!(table.click(Click::primary(70, 8)), ClickOutcome::Ignored);
    assert_eq!(table.card_views(), before);
    assert!(table.selection().is_idle());
}

/// While a card is selected, a stock click releases it rather than drawing.
#[test]
fn test_stock_click_with_selection_does_not_draw() {
    let (deal, rest) = deal_with(&[(0, &[(Suit::Hearts, 6, true)])]);
    let mut table = table_from(deal, rest);

    table.click(click_at(tableau_cell(0, 0)));
    assert_eq!(table.click(click_at(STOCK)), ClickOutcome::Deselected);
    assert!(table.stock().waste().is_empty());
}

// =============================================================================
// Stock and waste
// =============================================================================

/// Drawing the whole stock, recycling, and drawing again repeats the order.
#[test]
fn test_recycle_repeats_draw_order() {
    let mut table = Table::new(TableConfig::default().with_seed(11));

    let mut first_pass = Vec::new();
    for _ in 0..24 {
        match table.click(click_at(STOCK)) {
            ClickOutcome::Drew(card) => first_pass.push(card),
            other => panic!("expected a draw, got {other:?}"),
        }
    }
    assert!(table.stock().undealt().is_empty());

    assert_eq!(table.click(click_at(STOCK)), ClickOutcome::Recycled { cards: 24 });
    assert!(table.stock().waste().is_empty());
    assert!(table.stock().undealt().iter().all(|c| !c.face_up));

    let mut second_pass = Vec::new();
    for _ in 0..24 {
        if let ClickOutcome::Drew(card) = table.click(click_at(STOCK)) {
            second_pass.push(card);
        }
    }
    assert_eq!(first_pass, second_pass);
}

/// The top waste card can be played to a tableau.
#[test]
fn test_waste_to_tableau() {
    let (mut deal, mut rest) = deal_with(&[(0, &[(Suit::Spades, 7, true)])]);
    deal.waste = vec![take(&mut rest, Suit::Hearts, 6, true)];
    let mut table = table_from(deal, rest);

    let outcome = table.click(click_at(WASTE));
    assert_eq!(
        outcome,
        ClickOutcome::Selected {
            card: id(Suit::Hearts, 6),
            pile: PileId::Stock
        }
    );
    assert!(table.stock().top().unwrap().selected);

    let outcome = table.click(click_at(tableau_cell(0, 0)));
    assert!(matches!(
        outcome,
        ClickOutcome::Moved {
            from: PileId::Stock,
            to: PileId::Tableau(0),
            cards: 1,
            ..
        }
    ));
    assert!(table.stock().waste().is_empty());
    assert!(!table.tableau(0).unwrap().top().unwrap().selected);
}

/// The top waste card can be played to its foundation.
#[test]
fn test_waste_to_foundation() {
    let (mut deal, mut rest) = deal_with(&[]);
    deal.waste = vec![take(&mut rest, Suit::Spades, 1, true)];
    let mut table = table_from(deal, rest);

    table.click(click_at(WASTE));
    let outcome = table.click(click_at(foundation_cell(Suit::Spades)));
    assert!(matches!(outcome, ClickOutcome::Moved { to: PileId::Foundation(Suit::Spades), .. }));
    assert_eq!(table.foundation(Suit::Spades).top().map(Card::id), Some(id(Suit::Spades, 1)));
}

/// A secondary click on the stock returns the last drawn card.
#[test]
fn test_secondary_click_returns_to_stock() {
    let mut table = Table::new(TableConfig::default());
    let ClickOutcome::Drew(card) = table.click(click_at(STOCK)) else {
        panic!("expected a draw");
    };

    assert_eq!(
        table.click(Click::secondary(STOCK.0, STOCK.1)),
        ClickOutcome::ReturnedToStock(card)
    );
    assert_eq!(table.stock().undealt().len(), 24);
    assert_eq!(table.click(click_at(STOCK)), ClickOutcome::Drew(card));
}

/// A secondary click releases a selection before anything else.
#[test]
fn test_secondary_click_deselects() {
    let mut table = Table::new(TableConfig::default());
    table.click(click_at(tableau_cell(0, 0)));
    assert!(!table.selection().is_idle());

    assert_eq!(table.click(Click::secondary(0, 0)), ClickOutcome::Deselected);
    assert!(table.selection().is_idle());
    assert_eq!(table.click(Click::secondary(0, 0)), ClickOutcome::Ignored);
}

// =============================================================================
// Winning
// =============================================================================

/// Full foundations mean the game is won and clicks are ignored.
#[test]
fn test_full_foundations_win() {
    let mut deal = Deal::default();
    for suit in Suit::ALL {
        deal.foundations[suit.index()] = Rank::all().map(|r| Card::new(suit, r)).collect();
    }
    let mut table = Table::from_deal(TableConfig::default(), deal).unwrap();

    assert!(table.is_won());
    assert_eq!(table.click(click_at(STOCK)), ClickOutcome::Ignored);
}

/// Playing the last King finishes the game.
#[test]
fn test_last_move_wins() {
    let mut deck = full_deck();
    let mut deal = Deal::default();
    for suit in Suit::ALL {
        let top = if suit == Suit::Spades { 12 } else { 13 };
        deal.foundations[suit.index()] = (1..=top).map(|v| take(&mut deck, suit, v, true)).collect();
    }
    deal.tableaux[3] = vec![take(&mut deck, Suit::Spades, 13, true)];
    assert!(deck.is_empty());

    let mut table = Table::from_deal(TableConfig::default(), deal).unwrap();
    assert!(!table.is_won());

    table.click(click_at(tableau_cell(3, 0)));
    let outcome = table.click(click_at(foundation_cell(Suit::Spades)));

    assert!(matches!(outcome, ClickOutcome::Moved { won: true, .. }));
    assert!(table.is_won());
    assert!(table.summary(std::time::Duration::ZERO).won);
    assert_eq!(table.summary(std::time::Duration::ZERO).foundation_cards, 52);
}
