//! Self-play driver: two engine tiers play one game and the final position,
//! move list and result are printed.

use std::error::Error;
use std::io::Write;

use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use parlor_chess::engines::difficulty::choose_move_with_rng;
use parlor_chess::utils::algebraic::{format_move_list, move_to_long_algebraic};
use parlor_chess::utils::fen_generator::generate_fen;
use parlor_chess::utils::fen_parser::parse_fen;
use parlor_chess::utils::render_game_state::render_game_state;
use parlor_chess::{create_initial_state, Color, Difficulty, GameState};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Tier playing white: easy, medium or hard
    #[arg(long, default_value = "medium")]
    white: Difficulty,

    /// Tier playing black: easy, medium or hard
    #[arg(long, default_value = "easy")]
    black: Difficulty,

    /// Stop after this many plies even if the game is undecided
    #[arg(long, default_value_t = 200)]
    max_plies: usize,

    /// Start from this FEN instead of the initial position
    #[arg(long)]
    fen: Option<String>,

    /// Seed for the random tier, for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
    .write_style(env_logger::WriteStyle::Never)
    .init();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let mut game: GameState = match &args.fen {
        Some(fen) => parse_fen(fen)?,
        None => create_initial_state(),
    };
    info!("white: {}, black: {}, start: {}", args.white, args.black, generate_fen(&game));

    for _ in 0..args.max_plies {
        if game.status.is_finished() {
            break;
        }
        let color = game.side_to_move;
        let difficulty = match color {
            Color::White => args.white,
            Color::Black => args.black,
        };

        let Some(mv) = choose_move_with_rng(&game, color, difficulty, &mut rng) else {
            break;
        };
        game = game.apply_generated_move(&mv)?;
        info!("{color} ({difficulty}): {} -> {}", move_to_long_algebraic(&mv), game.status);
    }

    println!("{}", render_game_state(&game));
    println!("{}", format_move_list(&game.move_history));
    println!("FEN: {}", generate_fen(&game));
    match game.winner {
        Some(winner) => println!("Result: {} ({winner} wins)", game.status),
        None if game.status.is_finished() => println!("Result: {}", game.status),
        None => println!("Result: unfinished after {} plies", game.move_history.len()),
    }

    Ok(())
}
