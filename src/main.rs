/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    collections::BTreeSet,
    io::{self, Write},
};

use anyhow::Result;
use clap::Parser;
use portalchess::{Cli, Game, GameConfig, Square, Winner};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} encountered an error: {e}", env!("CARGO_PKG_NAME"));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = GameConfig::load(&cli.config)?;
    let mut game = Game::new(&config);

    play_interactively(&mut game)
}

/// Prints `label` and reads one trimmed input line. `None` on end of input.
fn prompt(label: &str) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

/// The console loop: render, select a piece, select a destination, repeat
/// until the game is over. Plain driver glue around the engine's queries and
/// [`Game::play_turn_piece`].
fn play_interactively(game: &mut Game) -> Result<()> {
    let mut notice: Option<String> = None;

    while !game.is_game_over() {
        let team_squares = game.board().positions_of(game.current_player());
        println!("{}", game.board().render_highlighted(&team_squares));

        if let Some(message) = notice.take() {
            println!("=== {message} ===");
            println!();
        }

        if game.is_king_under_check(game.current_player()) {
            println!("=== King is Under Check! ===");
            println!();
        }

        println!("=== Move {} ===", game.move_count() + 1);
        println!("Turn: {}", game.current_player());

        let Some(input) = prompt("Select piece (cN): ")? else {
            return Ok(());
        };
        let Ok(from) = input.parse::<Square>() else {
            notice = Some("Invalid Input".into());
            continue;
        };

        let Some(id) = game.board().piece_id_at(from) else {
            notice = Some("No Piece at Position".into());
            continue;
        };
        if game.board().piece(id).team != game.current_player() {
            notice = Some("That's Opponent's Piece".into());
            continue;
        }

        let moves = game.possible_moves(id);
        let mut highlight = moves.clone();
        highlight.insert(from);

        println!();
        println!("{}", game.board().render_highlighted(&highlight));

        println!("=== Selected {} ===", game.board().piece(id).kind);
        print!("Possible Moves: ");
        for destination in &moves {
            print!("{destination} ");
        }
        println!();

        let Some(input) = prompt("Select destination (cN): ")? else {
            return Ok(());
        };
        let Ok(to) = input.parse::<Square>() else {
            notice = Some("Invalid Input".into());
            continue;
        };
        println!();

        if !game.play_turn_piece(id, to) {
            notice = Some(game.turn_error().to_string());
        }
    }

    // Final board, highlighting the checking piece and the cornered king
    let mut highlight = BTreeSet::new();
    if let Some(checker) = game.checking_piece() {
        if let Some(piece) = game.board().get(checker) {
            highlight.insert(piece.position);
        }
    }
    if let Some(king) = game.board().king_of(game.current_player()) {
        highlight.insert(game.board().piece(king).position);
    }
    println!("{}", game.board().render_highlighted(&highlight));

    println!("=== Game Finished ===");
    match game.winner() {
        Some(Winner::Tie) | None => println!("No winner: Stalemate"),
        Some(winner) => println!("Winner: {winner}"),
    }
    println!("Turns played: {}", game.move_count() / 2);

    Ok(())
}
