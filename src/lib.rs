pub mod core {
	pub mod prompt;
	pub mod renderer;
	pub mod terminal;
}

pub mod cli;
pub mod config;
pub mod game;
pub mod game_runner;

// Re-export for convenience
pub use crate::config::GameConfig;
pub use crate::game_runner::{GameRunner, GameSummary};
