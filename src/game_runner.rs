/// Game runner that handles setup prompts, the turn loop and rendering
use std::io::{BufRead, Write};
use std::thread;

use anyhow::{Result, bail};
use tracing::info;

use crate::config::GameConfig;
use crate::core::prompt::{read_bounded, read_line};
use crate::core::renderer::GameRenderer;
use crate::core::terminal::TerminalContext;
use crate::game::board::{Board, Difficulty};
use crate::game::dice::{face_for_frame, GameRng, Roll};
use crate::game::renderer::BoardRenderer;
use crate::game::state::{GameState, MAX_PLAYERS, MIN_PLAYERS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub winner: u8,
    pub turns: u32,
    pub seed: u64,
}

pub struct GameRunner<R, W: Write> {
    input: R,
    ctx: TerminalContext<W>,
    config: GameConfig,
    renderer: BoardRenderer,
}

impl<R: BufRead, W: Write> GameRunner<R, W> {
    pub fn new(input: R, ctx: TerminalContext<W>, config: GameConfig) -> Self {
        Self {
            input,
            ctx,
            config,
            renderer: BoardRenderer::new(),
        }
    }

    /// Set up and play one full game. Board and dice share one seeded stream.
    pub fn run(&mut self) -> Result<GameSummary> {
        let mut rng = match self.config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        info!(seed = rng.seed(), "starting game");

        let mut state = self.setup(&mut rng)?;
        let winner = self.play(&mut state, &mut rng)?;
        Ok(GameSummary {
            winner,
            turns: state.turns_played(),
            seed: rng.seed(),
        })
    }

    /// Greet, settle player count and difficulty, and lay out the board.
    pub fn setup(&mut self, rng: &mut GameRng) -> Result<GameState> {
        self.ctx.print_line("Welcome to Snake and Ladder Game!")?;

        let players = match self.config.players {
            Some(n) if (MIN_PLAYERS..=MAX_PLAYERS).contains(&n) => n,
            Some(n) => bail!("player count {n} is outside {MIN_PLAYERS}-{MAX_PLAYERS}"),
            None => read_bounded(
                &mut self.input,
                &mut self.ctx,
                &format!("Enter the number of players ({MIN_PLAYERS}-{MAX_PLAYERS}): "),
                MIN_PLAYERS..=MAX_PLAYERS,
            )?,
        };
        let level = match self.config.difficulty {
            Some(level) => level,
            None => read_bounded(
                &mut self.input,
                &mut self.ctx,
                &format!("Choose difficulty level ({}-{}): ", Difficulty::MIN, Difficulty::MAX),
                Difficulty::MIN..=Difficulty::MAX,
            )?,
        };
        let difficulty = Difficulty::try_from(level)?;
        info!(players, difficulty = level, "game configured");

        let board = Board::generate(difficulty, rng);
        Ok(GameState::new(board, players))
    }

    /// Round-robin turns until somebody lands on the finish. Returns the winner.
    pub fn play<D: Roll + ?Sized>(&mut self, state: &mut GameState, dice: &mut D) -> Result<u8> {
        loop {
            let player = state.current_player();
            self.ctx.empty_line()?;
            self.ctx.print_line(&format!("Player {player}'s turn. Press Enter to roll the dice."))?;
            self.ctx.flush()?;
            read_line(&mut self.input)?;

            self.animate_roll()?;
            let outcome = state.take_turn(dice);

            self.renderer.render_narrative(&outcome, &mut self.ctx)?;
            self.renderer.render(state, &mut self.ctx)?;
            self.renderer.render_status(&outcome, &mut self.ctx)?;

            if outcome.won {
                self.ctx.print_line(&format!("Congratulations! Player {player} won!"))?;
                self.ctx.flush()?;
                info!(winner = player, turns = state.turns_played(), "game won");
                return Ok(player);
            }
        }
    }

    fn animate_roll(&mut self) -> Result<()> {
        let animation = self.config.animation;
        if animation.frames == 0 {
            return Ok(());
        }
        self.ctx.print("Rolling the dice...")?;
        for frame in 1..=animation.frames {
            if !animation.frame_delay.is_zero() {
                thread::sleep(animation.frame_delay);
            }
            self.ctx.rewrite_line(&format!("Rolling the dice... {}", face_for_frame(frame)))?;
        }
        self.ctx.empty_line()?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.ctx.into_inner()
    }
}
