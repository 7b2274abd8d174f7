/// Hangman-specific renderer
use std::io::{self, Write};

use crate::core::renderer::GameRenderer;
use crate::core::terminal::{TerminalColor, TerminalContext};
use crate::games::hangman::HangmanGame;

#[derive(Debug, Default, Clone, Copy)]
pub struct HangmanRenderer;

impl GameRenderer<HangmanGame> for HangmanRenderer {
    fn render<W: Write>(&self, game: &HangmanGame, ctx: &mut TerminalContext<W>) -> io::Result<()> {
        ctx.empty_line()?;
        ctx.print("The word ")?;
        ctx.print_colored_line(&spaced(&game.hidden_word()), TerminalColor::Cyan)?;

        let left = game.guesses_remaining();
        let color = if left <= 2 { TerminalColor::Red } else { TerminalColor::Default };
        ctx.print("Guesses left ")?;
        ctx.print_colored_line(&left.to_string(), color)?;
        ctx.flush()
    }

    fn render_outcome<W: Write>(
        &self,
        game: &HangmanGame,
        ctx: &mut TerminalContext<W>,
    ) -> io::Result<()> {
        if game.is_won() {
            ctx.print_colored_line("Game over! You won", TerminalColor::Green)?;
        } else {
            ctx.print_colored_line("Game over! You lost", TerminalColor::Red)?;
        }

        match game.revealed_word() {
            Ok(word) => ctx.print_line(&format!("The word was {}", word))?,
            Err(e) => ctx.print_colored_line(&e.to_string(), TerminalColor::Yellow)?,
        }
        ctx.flush()
    }
}

/// `c__` -> `c _ _` so blanks stay countable on screen
fn spaced(mask: &str) -> String {
    let mut out = String::with_capacity(mask.len() * 2);
    for (i, c) in mask.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}
