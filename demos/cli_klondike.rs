//! CLI Klondike example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use klondrs::{CardId, DropOutcome, Game, GameOptions, PileId};

fn main() {
    println!("Klondike CLI example (type 'q' to quit)");
    println!("Piles: s = stock, w = waste, 1-7 = tableau, f1-f4 = foundations");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);

    loop {
        print_table(&game);

        if game.is_won() {
            println!("All foundations complete. You win!");
            break;
        }

        println!("Actions: d (draw), m <from> <depth> <to> (move), t <1-7> (turn over), r (restart), q (quit)");
        let line = prompt_line("Action: ");
        let words: Vec<&str> = line.split_whitespace().collect();

        match words.as_slice() {
            ["d" | "draw"] => {
                let result = game
                    .draw_from_stock()
                    .map(|drawn| format!("Drew {drawn} card(s)."))
                    .or_else(|_| {
                        game.recycle_waste()
                            .map(|count| format!("Turned {count} card(s) back into the stock."))
                    });
                match result {
                    Ok(message) => println!("{message}"),
                    Err(err) => println!("Draw error: {err}"),
                }
            }
            ["m" | "move", from, depth, to] => {
                let (Some(from), Some(to)) = (parse_pile(from), parse_pile(to)) else {
                    println!("Unknown pile.");
                    continue;
                };
                let Ok(depth) = depth.parse::<usize>() else {
                    println!("Depth is the number of cards to take from the top.");
                    continue;
                };
                move_cards(&mut game, from, depth, to);
            }
            ["t", column] => {
                let Some(pile) = parse_pile(column).filter(|pile| pile.is_tableau()) else {
                    println!("Unknown column.");
                    continue;
                };
                match game.piles().top(pile) {
                    Some(card) if game.turn_over(card) => {
                        println!("Turned over {}.", game.card(card));
                    }
                    _ => println!("Nothing to turn over."),
                }
            }
            ["r" | "restart"] => {
                game.restart();
                println!("New game dealt.");
            }
            ["q" | "quit"] => return,
            _ => println!("Unknown action."),
        }
    }
}

fn move_cards(game: &mut Game, from: PileId, depth: usize, to: PileId) {
    let cards = game.piles().pile(from);
    if depth == 0 || depth > cards.len() {
        println!("{from} has {} card(s).", cards.len());
        return;
    }
    let card = cards[cards.len() - depth];

    if let Err(err) = game.pick_up(card) {
        println!("Pick up error: {err}");
        return;
    }

    match game.drop_on(to) {
        Ok(DropOutcome::Moved { cards, .. }) => println!("Moved {cards} card(s) to {to}."),
        Ok(DropOutcome::Cancelled) => println!("Cards stay on {from}."),
        Err(err) => println!("Move error: {err}"),
    }
}

fn parse_pile(word: &str) -> Option<PileId> {
    match word {
        "s" => Some(PileId::STOCK),
        "w" => Some(PileId::WASTE),
        _ => {
            if let Some(rest) = word.strip_prefix('f') {
                let index = rest.parse::<usize>().ok()?.checked_sub(1)?;
                PileId::FOUNDATIONS.get(index).copied()
            } else {
                let index = word.parse::<usize>().ok()?.checked_sub(1)?;
                PileId::TABLEAU.get(index).copied()
            }
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn format_card(game: &Game, card: CardId) -> String {
    let card = game.card(card);
    if card.is_face_up() {
        card.to_string()
    } else {
        "##".to_string()
    }
}

fn format_top(game: &Game, pile: PileId) -> String {
    game.piles()
        .top(pile)
        .map_or_else(|| "[  ]".to_string(), |card| format!("[{}]", format_card(game, card)))
}

fn print_table(game: &Game) {
    let piles = game.piles();
    println!();
    println!(
        "Stock: {} card(s)   Waste: {} ({} card(s))",
        piles.len(PileId::STOCK),
        format_top(game, PileId::WASTE),
        piles.len(PileId::WASTE)
    );

    let foundations: Vec<String> = PileId::FOUNDATIONS
        .iter()
        .map(|&pile| format_top(game, pile))
        .collect();
    println!("Foundations: {}", foundations.join(" "));
    println!();

    for (column, &pile) in PileId::TABLEAU.iter().enumerate() {
        let cards: Vec<String> = piles
            .pile(pile)
            .iter()
            .map(|&card| format_card(game, card))
            .collect();
        println!("{}: {}", column + 1, cards.join(" "));
    }
    println!();
}
