/// Hangman: engine, renderer and the prompt loop that drives them
pub mod game;
pub mod renderer;
pub mod session;

pub use game::{GameError, HangmanGame, BLANK, EXTRA_ATTEMPTS};
pub use renderer::HangmanRenderer;
pub use session::{parse_line, PlayerInput, Session, SessionSummary};
