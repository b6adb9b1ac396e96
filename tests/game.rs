//! Game integration tests.

#![allow(clippy::float_cmp)]

use klondrs::{
    CardId, DECK_SIZE, DrawError, DropOutcome, EventOutcome, Game, GameOptions, InputEvent,
    InteractionState, Key, MoveError, PickupError, PileId, PileStore, Point, Rank, Rect, Renderer,
    Suit, TextureKey, build_deck,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const fn id(suit: Suit, rank: Rank) -> CardId {
    CardId::of(suit, rank)
}

/// Builds a store with the listed cards placed (face up) and everything else in the stock.
fn arranged(layout: &[(PileId, &[(Suit, Rank)])]) -> PileStore {
    let mut piles = PileStore::stocked(build_deck());
    for &(pile, cards) in layout {
        for &(suit, rank) in cards {
            piles.move_to_pile(id(suit, rank), pile);
            piles.turn_face_up(id(suit, rank));
        }
    }
    piles
}

fn game_with(layout: &[(PileId, &[(Suit, Rank)])]) -> Game {
    Game::from_piles(GameOptions::default(), arranged(layout), 1)
}

/// Pile contents plus orientation, for whole-table comparisons.
fn table(game: &Game) -> Vec<Vec<(CardId, bool)>> {
    PileId::all()
        .map(|pile| {
            game.piles()
                .pile(pile)
                .iter()
                .map(|&card| (card, game.card(card).is_face_up()))
                .collect()
        })
        .collect()
}

fn assert_every_card_once(game: &Game) {
    let mut seen: Vec<CardId> = PileId::all()
        .flat_map(|pile| game.piles().pile(pile).to_vec())
        .collect();
    assert_eq!(seen.len(), DECK_SIZE);
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), DECK_SIZE);

    for card in seen {
        assert_eq!(game.card(card).id(), card);
        let pile = game.piles().pile_index_of(card).unwrap();
        assert!(game.piles().pile(pile).contains(&card));
    }
}

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
}

#[test]
fn new_game_is_idle_and_dealt() {
    let game = Game::new(GameOptions::default(), 3);
    assert_eq!(game.state(), InteractionState::Idle);
    assert!(game.held().is_none());
    assert_eq!(game.piles().len(PileId::STOCK), 24);
    assert_eq!(game.render_order().len(), DECK_SIZE);
    assert!(!game.is_won());
    assert_every_card_once(&game);

    let column = PileId::TABLEAU[6];
    for (ordinal, &card) in game.piles().pile(column).iter().enumerate() {
        assert!(close(
            game.position(card),
            game.layout().card_position(column, ordinal)
        ));
    }
}

#[test]
fn same_seed_deals_same_game() {
    let a = Game::new(GameOptions::default(), 99);
    let b = Game::new(GameOptions::default(), 99);
    let c = Game::new(GameOptions::default(), 100);
    assert_eq!(table(&a), table(&b));
    assert_ne!(table(&a), table(&c));
}

#[test]
fn three_draws_fill_the_waste() {
    let mut game = Game::new(GameOptions::default(), 11);
    let stock_before = game.piles().pile(PileId::STOCK).to_vec();

    for _ in 0..3 {
        assert_eq!(game.draw_from_stock().unwrap(), 3);
    }

    assert_eq!(game.piles().len(PileId::STOCK), 15);
    assert_eq!(game.piles().len(PileId::WASTE), 9);

    let waste = game.piles().pile(PileId::WASTE);
    let expected: Vec<CardId> = stock_before.iter().rev().take(9).copied().collect();
    assert_eq!(waste, expected.as_slice());
    assert!(waste.iter().all(|&card| game.card(card).is_face_up()));
    assert_eq!(game.piles().top(PileId::WASTE), Some(stock_before[15]));
    assert_eq!(game.render_order().last(), Some(&stock_before[15]));

    let anchor = game.layout().mat_center(PileId::WASTE);
    assert!(waste.iter().all(|&card| close(game.position(card), anchor)));
    assert_every_card_once(&game);
}

#[test]
fn short_stock_draws_what_is_left() {
    let options = GameOptions::default().with_cards_to_draw(5);
    let mut game = Game::new(options, 4);

    for _ in 0..4 {
        assert_eq!(game.draw_from_stock().unwrap(), 5);
    }
    assert_eq!(game.draw_from_stock().unwrap(), 4);
    assert_eq!(game.draw_from_stock().unwrap_err(), DrawError::StockEmpty);
}

#[test]
fn recycle_restores_the_stock_order() {
    let mut game = Game::new(GameOptions::default(), 12);
    let stock_before = game.piles().pile(PileId::STOCK).to_vec();

    assert_eq!(game.recycle_waste().unwrap_err(), DrawError::StockNotEmpty);

    while game.draw_from_stock().is_ok() {}
    assert!(game.piles().is_empty(PileId::STOCK));
    assert_eq!(game.piles().len(PileId::WASTE), 24);

    assert_eq!(game.recycle_waste().unwrap(), 24);
    assert!(game.piles().is_empty(PileId::WASTE));
    assert_eq!(game.piles().pile(PileId::STOCK), stock_before.as_slice());
    assert!(
        game.piles()
            .pile(PileId::STOCK)
            .iter()
            .all(|&card| !game.card(card).is_face_up())
    );

    // The first card drawn before the recycle is on top again.
    let first_drawn = *stock_before.last().unwrap();
    assert_eq!(game.piles().top(PileId::STOCK), Some(first_drawn));
    assert_every_card_once(&game);
}

#[test]
fn recycle_needs_a_waste() {
    let mut piles = PileStore::stocked(build_deck());
    for card in piles.pile(PileId::STOCK).to_vec() {
        piles.move_to_pile(card, PileId::TABLEAU[0]);
    }
    let mut game = Game::from_piles(GameOptions::default(), piles, 1);
    assert_eq!(
        game.recycle_waste().unwrap_err(),
        DrawError::NothingToRecycle
    );
}

#[test]
fn pointer_on_stock_draws_and_on_empty_mat_recycles() {
    let mut game = Game::new(GameOptions::default(), 21);
    let stock = game.layout().mat_center(PileId::STOCK);

    for _ in 0..8 {
        assert_eq!(game.pointer_down(stock.x, stock.y), EventOutcome::Drew(3));
        assert_eq!(game.state(), InteractionState::Idle);
    }
    assert!(game.piles().is_empty(PileId::STOCK));

    assert_eq!(game.pointer_down(stock.x, stock.y), EventOutcome::Recycled(24));
    assert_eq!(game.piles().len(PileId::STOCK), 24);
}

#[test]
fn pointer_on_empty_space_does_nothing() {
    let mut game = Game::new(GameOptions::default(), 21);
    let before = table(&game);

    let far = Point::new(1000.0, 100.0);
    assert_eq!(game.card_at(far), None);
    assert_eq!(game.mat_at(far), None);
    assert_eq!(game.pointer_down(far.x, far.y), EventOutcome::Ignored);

    // Empty waste mat.
    let waste = game.layout().mat_center(PileId::WASTE);
    assert_eq!(game.pointer_down(waste.x, waste.y), EventOutcome::Ignored);
    assert_eq!(table(&game), before);
}

#[test]
fn picking_a_tableau_card_takes_the_run_above_it() {
    let mut game = game_with(&[
        (
            PileId::TABLEAU[0],
            &[
                (Suit::Clubs, Rank::Nine),
                (Suit::Hearts, Rank::Eight),
                (Suit::Spades, Rank::Seven),
                (Suit::Diamonds, Rank::Six),
            ],
        ),
        (PileId::TABLEAU[1], &[(Suit::Spades, Rank::Nine)]),
    ]);

    assert_eq!(game.pick_up(id(Suit::Hearts, Rank::Eight)).unwrap(), 3);
    assert_eq!(game.state(), InteractionState::Holding);

    let held = game.held().unwrap();
    assert_eq!(
        held.cards(),
        &[
            id(Suit::Hearts, Rank::Eight),
            id(Suit::Spades, Rank::Seven),
            id(Suit::Diamonds, Rank::Six),
        ]
    );
    assert_eq!(held.origin(), PileId::TABLEAU[0]);
    assert_eq!(held.primary(), id(Suit::Hearts, Rank::Eight));
    assert_eq!(&game.render_order()[DECK_SIZE - 3..], held.cards());

    let outcome = game.drop_on(PileId::TABLEAU[1]).unwrap();
    assert_eq!(
        outcome,
        DropOutcome::Moved {
            from: PileId::TABLEAU[0],
            to: PileId::TABLEAU[1],
            cards: 3,
        }
    );
    assert_eq!(game.state(), InteractionState::Idle);
    assert_eq!(
        game.piles().pile(PileId::TABLEAU[1]),
        &[
            id(Suit::Spades, Rank::Nine),
            id(Suit::Hearts, Rank::Eight),
            id(Suit::Spades, Rank::Seven),
            id(Suit::Diamonds, Rank::Six),
        ]
    );
    assert_eq!(
        game.piles().pile(PileId::TABLEAU[0]),
        &[id(Suit::Clubs, Rank::Nine)]
    );
    assert!(close(
        game.position(id(Suit::Diamonds, Rank::Six)),
        game.layout().card_position(PileId::TABLEAU[1], 3)
    ));
    assert_every_card_once(&game);
}

#[test]
fn illegal_drop_snaps_back() {
    let mut game = game_with(&[
        (
            PileId::TABLEAU[0],
            &[(Suit::Hearts, Rank::Eight), (Suit::Spades, Rank::Seven)],
        ),
        (PileId::TABLEAU[2], &[(Suit::Hearts, Rank::Nine)]),
    ]);
    let before = table(&game);
    let eight = id(Suit::Hearts, Rank::Eight);
    let seven = id(Suit::Spades, Rank::Seven);
    let eight_at = game.position(eight);
    let seven_at = game.position(seven);

    game.pick_up(eight).unwrap();
    assert!(game.drag_by(100.0, -50.0));
    assert!(close(game.position(seven), seven_at.offset(100.0, -50.0)));

    assert_eq!(
        game.drop_on(PileId::TABLEAU[2]).unwrap_err(),
        MoveError::SameColor
    );
    assert_eq!(game.state(), InteractionState::Idle);
    assert_eq!(table(&game), before);
    assert_eq!(game.position(eight), eight_at);
    assert_eq!(game.position(seven), seven_at);
}

#[test]
fn dropping_on_the_origin_changes_nothing() {
    let mut game = Game::new(GameOptions::default(), 5);
    let before = table(&game);
    let positions: Vec<Point> = (0..DECK_SIZE)
        .map(|card| {
            let card = game.piles().cards()[card].id();
            game.position(card)
        })
        .collect();

    let column = PileId::TABLEAU[3];
    let top = game.piles().top(column).unwrap();
    game.pick_up(top).unwrap();
    game.drag_by(30.0, 12.0);

    assert_eq!(game.drop_on(column).unwrap(), DropOutcome::Cancelled);
    assert_eq!(table(&game), before);
    for card in game.piles().cards() {
        assert_eq!(game.position(card.id()), positions[card.id().index()]);
    }
}

#[test]
fn pointer_drag_moves_a_card_between_columns() {
    let mut game = game_with(&[
        (PileId::TABLEAU[0], &[(Suit::Hearts, Rank::Seven)]),
        (PileId::TABLEAU[1], &[(Suit::Clubs, Rank::Eight)]),
    ]);
    let seven = id(Suit::Hearts, Rank::Seven);
    let start = game.position(seven);
    let target = game.layout().mat_center(PileId::TABLEAU[1]);

    assert_eq!(
        game.handle_event(InputEvent::PointerDown {
            x: start.x,
            y: start.y,
        }),
        EventOutcome::PickedUp(1)
    );
    assert_eq!(
        game.handle_event(InputEvent::PointerMove {
            dx: target.x - start.x,
            dy: target.y - start.y,
        }),
        EventOutcome::Dragged
    );
    assert_eq!(
        game.handle_event(InputEvent::PointerUp {
            x: target.x,
            y: target.y,
        }),
        EventOutcome::Dropped(DropOutcome::Moved {
            from: PileId::TABLEAU[0],
            to: PileId::TABLEAU[1],
            cards: 1,
        })
    );
    assert!(close(
        game.position(seven),
        game.layout().card_position(PileId::TABLEAU[1], 1)
    ));
}

#[test]
fn pointer_drop_onto_a_fanned_card_uses_its_pile() {
    let mut game = game_with(&[
        (
            PileId::TABLEAU[1],
            &[
                (Suit::Spades, Rank::King),
                (Suit::Hearts, Rank::Queen),
                (Suit::Clubs, Rank::Jack),
                (Suit::Diamonds, Rank::Ten),
                (Suit::Spades, Rank::Nine),
                (Suit::Hearts, Rank::Eight),
                (Suit::Clubs, Rank::Seven),
            ],
        ),
        (PileId::WASTE, &[(Suit::Diamonds, Rank::Six)]),
    ]);
    let six = id(Suit::Diamonds, Rank::Six);
    let start = game.position(six);
    let seven_at = game.position(id(Suit::Clubs, Rank::Seven));
    let target = seven_at.offset(0.0, -game.layout().fan());

    assert_eq!(game.pointer_down(start.x, start.y), EventOutcome::PickedUp(1));
    game.pointer_move(target.x - start.x, target.y - start.y);
    assert_eq!(
        game.pointer_up(target.x, target.y),
        EventOutcome::Dropped(DropOutcome::Moved {
            from: PileId::WASTE,
            to: PileId::TABLEAU[1],
            cards: 1,
        })
    );
    assert_eq!(game.piles().top(PileId::TABLEAU[1]), Some(six));
}

#[test]
fn release_far_from_any_pile_cancels() {
    let mut game = game_with(&[(PileId::TABLEAU[0], &[(Suit::Hearts, Rank::Seven)])]);
    let seven = id(Suit::Hearts, Rank::Seven);
    let start = game.position(seven);

    game.pointer_down(start.x, start.y);
    game.pointer_move(1000.0 - start.x, 300.0 - start.y);
    assert_eq!(
        game.pointer_up(1000.0, 300.0),
        EventOutcome::Dropped(DropOutcome::Cancelled)
    );
    assert_eq!(game.position(seven), start);
    assert_eq!(game.piles().top(PileId::TABLEAU[0]), Some(seven));
}

#[test]
fn pointer_rejection_reports_the_rule() {
    let mut game = game_with(&[
        (PileId::TABLEAU[0], &[(Suit::Hearts, Rank::Queen)]),
        (PileId::TABLEAU[1], &[(Suit::Clubs, Rank::Ten)]),
    ]);
    let queen = game.position(id(Suit::Hearts, Rank::Queen));
    let target = game.layout().mat_center(PileId::TABLEAU[1]);

    game.pointer_down(queen.x, queen.y);
    game.pointer_move(target.x - queen.x, target.y - queen.y);
    assert_eq!(
        game.pointer_up(target.x, target.y),
        EventOutcome::Rejected(MoveError::RankGap)
    );
    assert_eq!(game.position(id(Suit::Hearts, Rank::Queen)), queen);
}

#[test]
fn drop_onto_a_tall_column_over_the_stock_mat() {
    let mut column: Vec<(Suit, Rank)> = Rank::ALL
        .iter()
        .map(|&rank| (Suit::Diamonds, rank))
        .collect();
    column.extend([
        (Suit::Clubs, Rank::Ace),
        (Suit::Clubs, Rank::Two),
        (Suit::Clubs, Rank::Three),
        (Suit::Spades, Rank::Two),
    ]);
    let mut game = game_with(&[
        (PileId::TABLEAU[0], column.as_slice()),
        (PileId::WASTE, &[(Suit::Hearts, Rank::Ace)]),
    ]);
    let ace = id(Suit::Hearts, Rank::Ace);
    let two = id(Suit::Spades, Rank::Two);
    assert_eq!(game.piles().len(PileId::TABLEAU[0]), 17);

    // The column's top card sits over the stock mat.
    let target = game.position(two);
    let stock_mat = game.layout().mat_rect(PileId::STOCK);
    assert!(stock_mat.overlaps(&game.layout().card_rect(target)));

    let start = game.position(ace);
    assert_eq!(game.pointer_down(start.x, start.y), EventOutcome::PickedUp(1));
    game.pointer_move(target.x - start.x, target.y - start.y);
    assert_eq!(
        game.pointer_up(target.x, target.y),
        EventOutcome::Dropped(DropOutcome::Moved {
            from: PileId::WASTE,
            to: PileId::TABLEAU[0],
            cards: 1,
        })
    );
    assert_eq!(game.piles().top(PileId::TABLEAU[0]), Some(ace));
    assert_eq!(game.piles().len(PileId::TABLEAU[0]), 18);
    assert!(close(
        game.position(ace),
        game.layout().card_position(PileId::TABLEAU[0], 17)
    ));
    assert_every_card_once(&game);
}

#[test]
fn pointer_down_while_holding_keeps_the_selection() {
    let mut game = game_with(&[
        (PileId::TABLEAU[0], &[(Suit::Hearts, Rank::Seven)]),
        (PileId::TABLEAU[1], &[(Suit::Spades, Rank::Eight)]),
    ]);
    let seven = id(Suit::Hearts, Rank::Seven);
    let eight = game.position(id(Suit::Spades, Rank::Eight));
    let start = game.position(seven);

    assert_eq!(game.pointer_down(start.x, start.y), EventOutcome::PickedUp(1));
    assert_eq!(game.pointer_down(eight.x, eight.y), EventOutcome::Ignored);
    assert_eq!(game.state(), InteractionState::Holding);
    assert_eq!(game.held().unwrap().cards(), &[seven]);
    assert_eq!(game.render_order().last(), Some(&seven));
}

#[test]
fn face_down_column_top_is_judged_by_rank_and_color() {
    let mut piles = arranged(&[
        (PileId::TABLEAU[0], &[(Suit::Spades, Rank::Eight)]),
        (
            PileId::WASTE,
            &[(Suit::Clubs, Rank::Seven), (Suit::Hearts, Rank::Seven)],
        ),
    ]);
    let eight = id(Suit::Spades, Rank::Eight);
    piles.turn_face_down(eight);
    let mut game = Game::from_piles(GameOptions::default(), piles, 1);

    game.pick_up(id(Suit::Hearts, Rank::Seven)).unwrap();
    assert_eq!(
        game.drop_on(PileId::TABLEAU[0]),
        Ok(DropOutcome::Moved {
            from: PileId::WASTE,
            to: PileId::TABLEAU[0],
            cards: 1,
        })
    );
    assert!(!game.card(eight).is_face_up());

    let mut piles = game.piles().clone();
    piles.move_to_pile(id(Suit::Hearts, Rank::Seven), PileId::TABLEAU[1]);
    let mut game = Game::from_piles(GameOptions::default(), piles, 1);

    game.pick_up(id(Suit::Clubs, Rank::Seven)).unwrap();
    assert_eq!(game.drop_on(PileId::TABLEAU[0]).unwrap_err(), MoveError::SameColor);
    assert_eq!(game.piles().top(PileId::TABLEAU[0]), Some(eight));
}

#[test]
fn zero_cards_to_draw_still_draws_one() {
    let options = GameOptions {
        cards_to_draw: 0,
        ..GameOptions::default()
    };
    let mut game = Game::new(options, 5);

    assert_eq!(game.draw_from_stock().unwrap(), 1);
    assert_eq!(game.piles().len(PileId::STOCK), 23);
    assert_eq!(GameOptions::default().with_cards_to_draw(0).cards_to_draw, 1);
}

#[test]
fn only_kings_start_empty_columns() {
    let mut game = game_with(&[(
        PileId::WASTE,
        &[(Suit::Hearts, Rank::Queen), (Suit::Spades, Rank::King)],
    )]);

    game.pick_up(id(Suit::Spades, Rank::King)).unwrap();
    game.drop_on(PileId::TABLEAU[6]).unwrap();

    game.pick_up(id(Suit::Hearts, Rank::Queen)).unwrap();
    assert_eq!(
        game.drop_on(PileId::TABLEAU[5]).unwrap_err(),
        MoveError::KingRequired
    );
    game.pick_up(id(Suit::Hearts, Rank::Queen)).unwrap();
    game.drop_on(PileId::TABLEAU[6]).unwrap();
    assert_eq!(game.piles().len(PileId::TABLEAU[6]), 2);
}

#[test]
fn foundations_build_from_ace() {
    let mut game = game_with(&[(
        PileId::WASTE,
        &[(Suit::Hearts, Rank::Two), (Suit::Hearts, Rank::Ace)],
    )]);

    game.pick_up(id(Suit::Hearts, Rank::Ace)).unwrap();
    game.drop_on(PileId::FOUNDATIONS[0]).unwrap();

    game.pick_up(id(Suit::Hearts, Rank::Two)).unwrap();
    assert_eq!(
        game.drop_on(PileId::FOUNDATIONS[1]).unwrap_err(),
        MoveError::AceRequired
    );
    game.pick_up(id(Suit::Hearts, Rank::Two)).unwrap();
    game.drop_on(PileId::FOUNDATIONS[0]).unwrap();

    assert_eq!(
        game.piles().pile(PileId::FOUNDATIONS[0]),
        &[id(Suit::Hearts, Rank::Ace), id(Suit::Hearts, Rank::Two)]
    );
    assert!(close(
        game.position(id(Suit::Hearts, Rank::Two)),
        game.layout().mat_center(PileId::FOUNDATIONS[0])
    ));
}

#[test]
fn runs_never_go_to_a_foundation() {
    let mut game = game_with(&[
        (PileId::FOUNDATIONS[0], &[(Suit::Spades, Rank::Ace)]),
        (
            PileId::TABLEAU[0],
            &[(Suit::Spades, Rank::Two), (Suit::Hearts, Rank::Ace)],
        ),
    ]);

    assert_eq!(game.pick_up(id(Suit::Spades, Rank::Two)).unwrap(), 2);
    assert_eq!(
        game.drop_on(PileId::FOUNDATIONS[0]).unwrap_err(),
        MoveError::MultipleToFoundation
    );
}

#[test]
fn foundation_pickup_follows_options() {
    let layout: &[(PileId, &[(Suit, Rank)])] =
        &[(PileId::FOUNDATIONS[2], &[(Suit::Clubs, Rank::Ace)])];
    let ace = id(Suit::Clubs, Rank::Ace);

    let mut game = Game::from_piles(GameOptions::default(), arranged(layout), 1);
    assert_eq!(game.pick_up(ace).unwrap(), 1);
    game.cancel_hold();

    let locked = GameOptions::default().with_foundation_pickup(false);
    let mut game = Game::from_piles(locked, arranged(layout), 1);
    assert_eq!(game.pick_up(ace).unwrap_err(), PickupError::FoundationLocked);
    let at = game.position(ace);
    assert_eq!(game.pointer_down(at.x, at.y), EventOutcome::Ignored);
    assert_eq!(game.state(), InteractionState::Idle);
}

#[test]
fn pickup_rejections() {
    let mut game = game_with(&[(
        PileId::WASTE,
        &[(Suit::Diamonds, Rank::Three), (Suit::Clubs, Rank::Four)],
    )]);

    assert_eq!(
        game.pick_up(id(Suit::Diamonds, Rank::Three)).unwrap_err(),
        PickupError::Covered
    );

    let stock_top = game.piles().top(PileId::STOCK).unwrap();
    assert_eq!(game.pick_up(stock_top).unwrap_err(), PickupError::StockCard);

    game.pick_up(id(Suit::Clubs, Rank::Four)).unwrap();
    assert_eq!(
        game.pick_up(id(Suit::Clubs, Rank::Four)).unwrap_err(),
        PickupError::AlreadyHolding
    );
    assert_eq!(game.draw_from_stock().unwrap_err(), DrawError::Holding);
    assert_eq!(game.recycle_waste().unwrap_err(), DrawError::Holding);

    assert!(game.cancel_hold());
    assert!(!game.cancel_hold());
    assert_eq!(
        game.drop_on(PileId::TABLEAU[0]).unwrap_err(),
        MoveError::NotHolding
    );
    assert_eq!(game.release().unwrap_err(), MoveError::NotHolding);
    assert!(!game.drag_by(1.0, 1.0));
}

#[test]
fn face_down_top_card_turns_over_on_press() {
    let mut game = Game::new(GameOptions::default(), 8);
    let column = PileId::TABLEAU[1];
    let buried = game.piles().pile(column)[0];
    let top = game.piles().top(column).unwrap();

    assert_eq!(game.pick_up(buried).unwrap_err(), PickupError::FaceDown);

    // Move the face-up top away to expose the face-down card.
    let mut piles = game.piles().clone();
    piles.move_to_pile(top, PileId::WASTE);
    let mut game = Game::from_piles(GameOptions::default(), piles, 8);

    let at = game.position(buried);
    assert_eq!(game.pointer_down(at.x, at.y), EventOutcome::Flipped(buried));
    assert!(game.card(buried).is_face_up());
    assert_eq!(game.state(), InteractionState::Idle);

    // A second press picks it up.
    assert_eq!(game.pointer_down(at.x, at.y), EventOutcome::PickedUp(1));
}

#[test]
fn restart_deals_a_fresh_idle_game() {
    let mut game = Game::new(GameOptions::default(), 31);
    let first = table(&game);

    let column = PileId::TABLEAU[6];
    game.pick_up(game.piles().top(column).unwrap()).unwrap();
    assert_eq!(
        game.handle_event(InputEvent::Key(Key::Restart)),
        EventOutcome::Restarted
    );
    assert_eq!(game.state(), InteractionState::Idle);
    assert_ne!(table(&game), first);
    assert_eq!(game.piles().len(PileId::STOCK), 24);
    assert_every_card_once(&game);

    game.restart_with_seed(31);
    assert_eq!(table(&game), first);
}

#[test]
fn full_foundations_win() {
    let mut piles = PileStore::stocked(build_deck());
    for (suit, foundation) in Suit::ALL.into_iter().zip(PileId::FOUNDATIONS) {
        for rank in Rank::ALL {
            piles.move_to_pile(id(suit, rank), foundation);
            piles.turn_face_up(id(suit, rank));
        }
    }
    let game = Game::from_piles(GameOptions::default(), piles, 1);
    assert!(game.is_won());
}

#[derive(Default)]
struct Recorder {
    mats: Vec<PileId>,
    cards: Vec<(CardId, TextureKey, bool)>,
}

impl Renderer for Recorder {
    fn draw_mat(&mut self, pile: PileId, _rect: Rect) {
        self.mats.push(pile);
    }

    fn draw_card(&mut self, id: CardId, texture: TextureKey, _center: Point, held: bool) {
        self.cards.push((id, texture, held));
    }
}

#[test]
fn render_draws_mats_then_cards_in_order() {
    let mut game = Game::new(GameOptions::default(), 17);
    let top = game.piles().top(PileId::TABLEAU[0]).unwrap();
    game.pick_up(top).unwrap();

    let mut recorder = Recorder::default();
    game.render(&mut recorder);

    assert_eq!(recorder.mats, PileId::all().collect::<Vec<_>>());
    assert_eq!(recorder.cards.len(), DECK_SIZE);
    let drawn: Vec<CardId> = recorder.cards.iter().map(|&(card, _, _)| card).collect();
    assert_eq!(drawn, game.render_order());

    let (last, texture, held) = *recorder.cards.last().unwrap();
    assert_eq!(last, top);
    assert!(held);
    assert_eq!(texture, game.card(top).texture());
    assert_eq!(
        recorder.cards.iter().filter(|&&(_, _, held)| held).count(),
        1
    );
    assert_eq!(
        recorder
            .cards
            .iter()
            .filter(|&&(_, texture, _)| texture == TextureKey::Back)
            .count(),
        24 + 21
    );
}

#[test]
fn random_play_keeps_every_card_in_one_pile() {
    for seed in 0..10 {
        let mut game = Game::new(GameOptions::default(), seed);
        let mut rng = ChaCha8Rng::seed_from_u64(seed + 1000);

        for _ in 0..400 {
            match rng.random_range(0..4) {
                0 => {
                    if game.draw_from_stock().is_err() {
                        let _ = game.recycle_waste();
                    }
                }
                1 => {
                    let card = game.piles().cards()[rng.random_range(0..DECK_SIZE)].id();
                    if game.pick_up(card).is_ok() {
                        let target = PileId::from_index(rng.random_range(0..13)).unwrap();
                        let _ = game.drop_on(target);
                    }
                }
                2 => {
                    let x = rng.random_range(0.0..1024.0);
                    let y = rng.random_range(0.0..768.0);
                    game.pointer_down(x, y);
                    let dx = rng.random_range(-200.0..200.0);
                    let dy = rng.random_range(-200.0..200.0);
                    game.pointer_move(dx, dy);
                    game.pointer_up(x, y);
                }
                _ => {
                    let column = PileId::TABLEAU[rng.random_range(0..7)];
                    if let Some(top) = game.piles().top(column) {
                        game.turn_over(top);
                    }
                }
            }

            assert_eq!(game.state(), InteractionState::Idle);
            assert_every_card_once(&game);
        }
    }
}
