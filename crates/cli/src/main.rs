//! Headless harness for the parlor games.
//!
//! Runs batches of dots-and-boxes or stick games from the command line,
//! exercising the same engine surface a GUI would: sessions, move
//! validation, events, and the scripted opponents. Useful for eyeballing
//! the heuristic and for reproducible bug reports (everything is seeded).

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use parlor_core::{GameResult, Player};
use parlor_dots::{GameSession, Phase};
use parlor_nim::Nim;
use parlor_strategy::{Heuristic, Random, Strategy};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

/// Parlor games simulation tool.
#[derive(Parser)]
#[command(name = "parlor")]
#[command(about = "Simulate the parlor games without a GUI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate dots-and-boxes games between two computer players.
    Dots {
        /// Cells per side (minimum 4).
        #[arg(short, long, default_value = "4")]
        size: u8,

        /// Number of games to play.
        #[arg(short, long, default_value = "10")]
        games: usize,

        /// Random seed for reproducibility.
        #[arg(long, default_value = "42")]
        seed: u64,

        /// What player two plays.
        #[arg(short, long, value_enum, default_value_t = Opponent::Heuristic)]
        opponent: Opponent,

        /// Print the summary as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Simulate stick games: random first player vs the scripted opponent.
    Nim {
        /// Sticks in the pile.
        #[arg(long, default_value = "21")]
        sticks: u32,

        /// Maximum sticks taken per turn.
        #[arg(long, default_value = "3")]
        max_take: u32,

        /// Number of games to play.
        #[arg(short, long, default_value = "10")]
        games: usize,

        /// Random seed for reproducibility.
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Opponent {
    /// The three-tier heuristic.
    Heuristic,
    /// Uniform random over undrawn edges.
    Random,
}

/// Aggregate outcome of a simulation batch.
#[derive(Serialize, Debug, Default)]
struct Summary {
    games: usize,
    wins_one: usize,
    wins_two: usize,
    draws: usize,
}

impl Summary {
    fn record(&mut self, result: GameResult) {
        self.games += 1;
        match result {
            GameResult::Win(Player::One) => self.wins_one += 1,
            GameResult::Win(Player::Two) => self.wins_two += 1,
            GameResult::Draw => self.draws += 1,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Dots {
            size,
            games,
            seed,
            opponent,
            json,
        } => run_dots(size, games, seed, opponent, json),
        Commands::Nim {
            sticks,
            max_take,
            games,
            seed,
        } => run_nim(sticks, max_take, games, seed),
    }
}

fn run_dots(size: u8, games: usize, seed: u64, opponent: Opponent, json: bool) -> Result<()> {
    let mut summary = Summary::default();

    for game in 0..games {
        let game_seed = seed.wrapping_add(game as u64);
        let one = Heuristic::new(ChaCha8Rng::seed_from_u64(game_seed));
        let two: Box<dyn Strategy> = match opponent {
            Opponent::Heuristic => {
                Box::new(Heuristic::new(ChaCha8Rng::seed_from_u64(game_seed ^ 1)))
            }
            Opponent::Random => Box::new(Random::new(ChaCha8Rng::seed_from_u64(game_seed ^ 1))),
        };

        let result = play_dots(size, &one, two.as_ref())
            .with_context(|| format!("game {} (seed {})", game, game_seed))?;
        summary.record(result);
        if !json {
            println!("game {:>3}: {}", game, result);
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "{} games on a {}x{} board: player one {}, player two {}, draws {}",
            summary.games, size, size, summary.wins_one, summary.wins_two, summary.draws
        );
    }
    Ok(())
}

/// Plays one full session, driving both sides through the engine boundary:
/// player one through the human move path, player two as the computer.
fn play_dots(size: u8, one: &dyn Strategy, two: &dyn Strategy) -> Result<GameResult> {
    let mut session = GameSession::new(size, Player::One).context("configuring session")?;

    loop {
        match session.phase() {
            Phase::Terminal(result) => return Ok(result),
            Phase::AwaitingMove(Player::One) => {
                let edge = one
                    .select(session.board())
                    .context("no move available in a non-terminal session")?;
                let (a, b) = edge.endpoints();
                session.request_move(a, b)?;
            }
            Phase::AwaitingMove(Player::Two) => {
                let edge = two
                    .select(session.board())
                    .context("no move available in a non-terminal session")?;
                session.computer_move(edge)?;
            }
        }
    }
}

fn run_nim(sticks: u32, max_take: u32, games: usize, seed: u64) -> Result<()> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut summary = Summary::default();

    for game in 0..games {
        let mut nim =
            Nim::new(sticks, max_take).with_context(|| format!("configuring game {}", game))?;
        while !nim.is_finished() {
            // Player one takes at random; the scripted opponent answers
            let take = rng.gen_range(1..=nim.take_limit());
            nim.take(take)?;
            if !nim.is_finished() {
                nim.scripted_take(&mut rng)?;
            }
        }
        let winner = nim
            .winner()
            .context("finished game must have a winner")?;
        summary.record(GameResult::Win(winner));
        println!("game {:>3}: {} wins", game, winner);
    }

    println!(
        "{} games of {} sticks (take 1-{}): random player {}, scripted opponent {}",
        summary.games, sticks, max_take, summary.wins_one, summary.wins_two
    );
    Ok(())
}
