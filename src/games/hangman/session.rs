/// Interactive prompt loop driving the engine round after round
use std::io::Write;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

use crate::core::renderer::GameRenderer;
use crate::core::terminal::{TerminalColor, TerminalContext};
use crate::games::hangman::HangmanGame;
use crate::games::HANGMAN;

/// One parsed line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    Guess(char),
    Quit,
    Invalid,
}

/// Exactly one character is a guess; `:q` / `:quit` ends the session.
pub fn parse_line(line: &str) -> PlayerInput {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if matches!(line, ":q" | ":quit") {
        return PlayerInput::Quit;
    }

    let mut chars = line.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => PlayerInput::Guess(c),
        _ => PlayerInput::Invalid,
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub rounds: u64,
    pub wins: u64,
    pub losses: u64,
}

pub struct Session<R> {
    game: HangmanGame,
    renderer: R,
    max_rounds: Option<u64>,
}

impl<R: GameRenderer<HangmanGame>> Session<R> {
    pub fn new(game: HangmanGame, renderer: R) -> Self {
        Self {
            game,
            renderer,
            max_rounds: None,
        }
    }

    /// Stop after `n` rounds instead of playing forever
    pub fn with_max_rounds(mut self, n: Option<u64>) -> Self {
        self.max_rounds = n;
        self
    }

    /// Play until the round limit, `:quit`, or end of input.
    pub async fn run<I, W>(
        &mut self,
        input: I,
        ctx: &mut TerminalContext<W>,
    ) -> Result<SessionSummary>
    where
        I: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = input.lines();
        let mut summary = SessionSummary::default();

        let banner = format!("{} - {}", HANGMAN.name, HANGMAN.description);
        ctx.print_colored_line(&banner, TerminalColor::Cyan)?;
        ctx.print_line("Type one character per guess, :quit to leave")?;

        'rounds: loop {
            if self.max_rounds.is_some_and(|max| summary.rounds >= max) {
                break;
            }

            self.game
                .start_new_round()
                .await
                .context("could not start a new round")?;
            summary.rounds += 1;

            while self.game.is_active() {
                self.renderer.render(&self.game, ctx)?;
                ctx.print("Guess a letter: ")?;
                ctx.flush()?;

                let Some(line) = lines.next_line().await.context("failed to read input")? else {
                    debug!("input closed");
                    ctx.empty_line()?;
                    break 'rounds;
                };

                match parse_line(&line) {
                    PlayerInput::Quit => break 'rounds,
                    PlayerInput::Invalid => {
                        let hint = "Please enter a single character";
                        ctx.print_colored_line(hint, TerminalColor::Yellow)?;
                    }
                    PlayerInput::Guess(letter) => {
                        if !self.game.guess(letter)? {
                            let miss = format!("No '{}' in the word", letter);
                            ctx.print_colored_line(&miss, TerminalColor::Yellow)?;
                        }
                    }
                }
            }

            self.renderer.render_outcome(&self.game, ctx)?;
            if self.game.is_won() {
                summary.wins += 1;
            } else {
                summary.losses += 1;
            }
        }

        info!(
            rounds = summary.rounds,
            wins = summary.wins,
            losses = summary.losses,
            "session finished"
        );
        ctx.print_line(&format!(
            "Rounds played: {}  Won: {}  Lost: {}",
            summary.rounds, summary.wins, summary.losses
        ))?;
        ctx.flush()?;
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_characters_as_guesses() {
        assert_eq!(parse_line("a"), PlayerInput::Guess('a'));
        assert_eq!(parse_line("Z\r"), PlayerInput::Guess('Z'));
        assert_eq!(parse_line("é"), PlayerInput::Guess('é'));
        assert_eq!(parse_line(" "), PlayerInput::Guess(' '));
    }

    #[test]
    fn parses_quit_commands() {
        assert_eq!(parse_line(":q"), PlayerInput::Quit);
        assert_eq!(parse_line(":quit"), PlayerInput::Quit);
    }

    #[test]
    fn rejects_empty_and_multi_character_lines() {
        assert_eq!(parse_line(""), PlayerInput::Invalid);
        assert_eq!(parse_line("ab"), PlayerInput::Invalid);
        assert_eq!(parse_line("quit"), PlayerInput::Invalid);
    }
}
