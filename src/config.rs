/// Runtime settings for one game, assembled from command-line flags
use std::time::Duration;

pub const DEFAULT_FRAMES: usize = 5;
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    /// Redraws of the rolling line; 0 turns the animation off.
    pub frames: usize,
    pub frame_delay: Duration,
}

impl Animation {
    pub fn off() -> Self {
        Self {
            frames: 0,
            frame_delay: Duration::ZERO,
        }
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self {
            frames: DEFAULT_FRAMES,
            frame_delay: DEFAULT_FRAME_DELAY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Skip the player count prompt.
    pub players: Option<u8>,
    /// Skip the difficulty prompt.
    pub difficulty: Option<u8>,
    /// Fixed seed for board and dice; drawn at random when absent.
    pub seed: Option<u64>,
    pub animation: Animation,
    pub color: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: None,
            difficulty: None,
            seed: None,
            animation: Animation::default(),
            color: true,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_players(mut self, players: u8) -> Self {
        self.players = Some(players);
        self
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: u8) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_animation(mut self, animation: Animation) -> Self {
        self.animation = animation;
        self
    }

    #[must_use]
    pub fn plain(mut self) -> Self {
        self.color = false;
        self
    }
}
