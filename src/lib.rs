pub mod core {
	pub mod renderer;
	pub mod terminal;
	pub mod words;
}

pub mod cli;
pub mod games;

// Re-export for convenience
pub use crate::core::words::{HttpWordSource, SourceError, StaticWordSource, WordSource};
pub use crate::games::hangman::{GameError, HangmanGame};
