use anyhow::Result;
use clap::Parser;
use log::info;

use std::io::{stdin, stdout, Write};

use connect4_engine::board::{Board, Player};
use connect4_engine::search::{Searcher, DEFAULT_DEPTH};
use connect4_engine::win::has_won;
use connect4_engine::WIDTH;

mod display;

#[derive(Parser)]
#[command(about = "Play Connect 4 against a minimax opponent")]
struct Args {
    /// Search depth of the AI in plies
    #[arg(short, long, default_value_t = DEFAULT_DEPTH, value_parser = clap::value_parser!(u32).range(1..))]
    depth: u32,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut board = Board::new();
    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    let mut ai_players = (false, false);

    // choose AI control of player 1
    loop {
        let mut buffer = String::new();
        print!("Is player 1 AI controlled? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => {
                ai_players.0 = true;
                break;
            }
            Some(_letter @ 'n') => break,
            _ => println!("Unknown answer given"),
        }
    }

    // choose AI control of player 2
    loop {
        let mut buffer = String::new();
        print!("Is player 2 AI controlled? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => {
                ai_players.1 = true;
                break;
            }
            Some(_letter @ 'n') => break,
            _ => println!("Unknown answer given"),
        }
    }

    let mut current = Player::One;

    // game loop
    loop {
        display::draw(&board).expect("Failed to draw board!");

        // end states
        if has_won(&board, Player::One) {
            println!("Player 1 wins!");
            break;
        }
        if has_won(&board, Player::Two) {
            println!("Player 2 wins!");
            break;
        }
        if board.is_full() {
            println!("Draw!");
            break;
        }

        let ai_turn = match current {
            Player::One => ai_players.0,
            Player::Two => ai_players.1,
        };

        if ai_turn {
            println!("AI is thinking...");
            stdout().flush().expect("Failed to flush to stdout!");

            // slow down play if both players are AI
            if ai_players == (true, true) {
                std::thread::sleep(std::time::Duration::new(3, 0));
            }

            let mut searcher = Searcher::new(current).with_depth(args.depth);
            board = searcher.choose_move(&board);
            info!(
                "player {:?} searched {} nodes at depth {}",
                current, searcher.node_count, args.depth
            );
        } else {
            print!("Move input > ");
            stdout().flush().expect("Failed to flush to stdout!");
            let mut input_str = String::new();
            stdin.read_line(&mut input_str)?;

            let column = match input_str.trim().parse::<usize>() {
                Err(_) => {
                    println!("Invalid number: {}", input_str.trim());
                    continue;
                }
                Ok(column @ 1..=WIDTH) => column - 1,
                Ok(column) => {
                    println!(
                        "Invalid move, column {} out of range. Columns must be between 1 and {}",
                        column, WIDTH
                    );
                    continue;
                }
            };

            match board.insert(current, column) {
                Ok(next) => board = next,
                // range is validated above, so only a full column remains
                Err(_) => {
                    println!("Invalid move, column {} full", column + 1);
                    // try the move again
                    continue;
                }
            }
        }

        current = current.opponent();
    }
    Ok(())
}
