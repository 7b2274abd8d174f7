pub mod hangman;

/// Metadata about a game
#[derive(Clone, Debug)]
pub struct GameInfo {
    pub name: &'static str,
    pub description: &'static str,
}

pub const HANGMAN: GameInfo = GameInfo {
    name: "Hangman",
    description: "Guess the word letter by letter before your guesses run out",
};
