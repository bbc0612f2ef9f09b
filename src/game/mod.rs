/// Snakes and ladders: board generation, dice, turn engine and rendering
pub mod board;
pub mod dice;
pub mod renderer;
pub mod state;

pub use board::{Board, BoardError, Difficulty, Feature, FeatureKind};
pub use dice::{GameRng, Roll};
pub use renderer::BoardRenderer;
pub use state::{GameState, TurnOutcome};
