//! Terminal host for a two-player game.
//!
//! Cards are picked by typing their position. `new <dimension>` deals a new
//! board, `quit` leaves.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use concentration::{Board, GameConfig, GameResult, Selection, Session};

#[derive(Parser, Debug)]
#[command(name = "concentration", about = "Two-player memory matching in the terminal")]
struct Cli {
    /// TOML config file; flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board side length (even).
    #[arg(long)]
    dimension: Option<u32>,

    /// Milliseconds a turned pair stays face up.
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Fixed deal seed.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value = "Player 1")]
    player1: String,

    #[arg(long, default_value = "Player 2")]
    player2: String,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let source = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                GameConfig::from_toml_str(&source)?
            }
            None => GameConfig::default(),
        };
        if let Some(dimension) = self.dimension {
            config = config.with_dimension(dimension);
        }
        if let Some(ms) = self.delay_ms {
            config = config.with_flip_delay_ms(ms);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.game_config()?;
    let mut session = Session::start(config, [cli.player1.clone(), cli.player2.clone()])?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    print_table(&session);

    while let Some(line) = lines.next_line().await? {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => continue,
            ["quit"] | ["q"] => break,
            ["new", dimension] => match dimension.parse::<u32>() {
                Ok(dimension) => {
                    if let Err(err) = session.new_game(dimension) {
                        println!("{err}");
                    }
                }
                Err(_) => println!("Dimension must be a number."),
            },
            [index] => match index.parse::<usize>() {
                Ok(index) => play(&mut session, index).await,
                Err(_) => println!("Type a card number, `new <dimension>`, or `quit`."),
            },
            _ => println!("Type a card number, `new <dimension>`, or `quit`."),
        }

        print_table(&session);
        if let Some(result) = session.result() {
            announce(&session, result);
        }
    }

    Ok(())
}

async fn play(session: &mut Session, index: usize) {
    match session.select_at(index) {
        Ok(Selection::Evaluating) => {
            print_board(&session.board_snapshot());
            for event in session.settle().await {
                if let Some(outcome) = event.outcome() {
                    println!("{}", if outcome.matched { "Match!" } else { "No match." });
                }
            }
        }
        Ok(Selection::Pending) => {
            session.settle().await;
        }
        Ok(Selection::Ignored(reason)) => println!("Ignored: {reason:?}"),
        Err(err) => println!("{err}"),
    }
}

fn print_table(session: &Session) {
    print_board(&session.board_snapshot());
    println!("{}", session.scoreboard());
}

fn print_board(board: &Board) {
    let width = board.dimension() as usize;
    for row in board.cards().chunks(width) {
        let cells: Vec<String> = row
            .iter()
            .map(|card| {
                if card.matched {
                    "    ".to_string()
                } else if card.flipped {
                    format!("[{:>2}]", card.identity)
                } else {
                    format!("{:>4}", card.id.index())
                }
            })
            .collect();
        println!("{}", cells.join(" "));
    }
}

fn announce(session: &Session, result: GameResult) {
    match result {
        GameResult::Winner(id) => {
            println!("{} wins!", session.coordinator().player(id).name);
        }
        GameResult::Draw => println!("It's a draw."),
    }
    println!("Type `new <dimension>` to play again or `quit`.");
}
