use std::io;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::level_filters::LevelFilter;

use crate::config::{Animation, GameConfig, DEFAULT_FRAMES, DEFAULT_FRAME_DELAY};
use crate::core::terminal::TerminalContext;
use crate::game::state::{MAX_PLAYERS, MIN_PLAYERS};
use crate::game::Difficulty;
use crate::game_runner::{GameRunner, GameSummary};

#[derive(Debug, Parser)]
#[command(name = "laddersnake")]
#[command(about = "🐍 Snakes and ladders for 2-4 players in the terminal")]
#[command(version)]
pub struct Cli {
    /// Number of players (asked interactively when omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(i64::from(MIN_PLAYERS)..=i64::from(MAX_PLAYERS)))]
    pub players: Option<u8>,

    /// Snake and ladder pairs per kind (asked interactively when omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(i64::from(Difficulty::MIN)..=i64::from(Difficulty::MAX)))]
    pub difficulty: Option<u8>,

    /// Seed for a reproducible board and dice
    #[arg(long)]
    pub seed: Option<u64>,

    /// Frames of the dice animation (0 disables it)
    #[arg(long, default_value_t = DEFAULT_FRAMES)]
    pub frames: usize,

    /// Delay between animation frames, in milliseconds
    #[arg(long, default_value_t = DEFAULT_FRAME_DELAY.as_millis() as u64)]
    pub frame_delay_ms: u64,

    /// Plain output without ANSI colors
    #[arg(long)]
    pub no_color: bool,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn config(&self) -> GameConfig {
        GameConfig {
            players: self.players,
            difficulty: self.difficulty,
            seed: self.seed,
            animation: Animation {
                frames: self.frames,
                frame_delay: Duration::from_millis(self.frame_delay_ms),
            },
            color: !self.no_color,
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

/// Logs go to stderr so they never land inside the board on stdout.
fn init_tracing(level: LevelFilter, ansi: bool) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(ansi)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

pub fn run_cli() -> Result<GameSummary> {
    let cli = Cli::parse();
    let config = cli.config();
    init_tracing(cli.log_level(), config.color);

    let ctx = TerminalContext::stdout(config.color);
    let mut runner = GameRunner::new(io::stdin().lock(), ctx, config);
    runner.run()
}
