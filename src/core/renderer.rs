/// Renderer trait for drawing a game state through a terminal context
use std::io::{self, Write};

use crate::core::terminal::TerminalContext;

pub trait GameRenderer<State> {
    /// Render the current state. Rendering never mutates the game.
    fn render<W: Write>(&self, state: &State, ctx: &mut TerminalContext<W>) -> io::Result<()>;
}
