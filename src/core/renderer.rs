/// Generic game renderer trait
use std::io::{self, Write};

use crate::core::terminal::TerminalContext;

/// Presentation for a game's state. Renderers hold no game logic.
pub trait GameRenderer<State> {
    /// Draw the in-play view: board plus whatever the player needs to act
    fn render<W: Write>(&self, state: &State, ctx: &mut TerminalContext<W>) -> io::Result<()>;

    /// Draw the end-of-round view
    fn render_outcome<W: Write>(
        &self,
        state: &State,
        ctx: &mut TerminalContext<W>,
    ) -> io::Result<()>;
}
