use tracing::{debug, info};

use crate::core::words::{SourceError, WordSource, DEFAULT_BATCH_SIZE};

/// Character shown for letters that have not been guessed yet
pub const BLANK: char = '_';

/// Attempts granted on top of the word's own length
pub const EXTRA_ATTEMPTS: u32 = 5;

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("no words available: {0}")]
    SourceUnavailable(#[from] SourceError),
    #[error("cannot show the hidden word until the game is over")]
    GameStillActive,
    #[error("no guesses remaining")]
    NoGuessesRemaining,
}

/// Word length plus the extra attempts, pinned at `u32::MAX`
fn budget_for(len: usize) -> u32 {
    u32::try_from(len)
        .unwrap_or(u32::MAX)
        .saturating_add(EXTRA_ATTEMPTS)
}

/// Secret word, reveal mask and budget for one play-through
#[derive(Debug, Clone, Default)]
struct Round {
    word: Vec<char>,
    mask: Vec<char>,
    guesses: u32,
}

impl Round {
    fn new(word: &str) -> Self {
        let word: Vec<char> = word.chars().collect();
        let mask = vec![BLANK; word.len()];
        let guesses = budget_for(word.len());
        Self { word, mask, guesses }
    }

    fn has_blanks(&self) -> bool {
        self.mask.contains(&BLANK)
    }
}

/// Single-player hangman engine. Owns the word pool and the current round.
///
/// The engine never loops on its own; a caller starts rounds, submits guesses
/// and reads state back through the methods below.
pub struct HangmanGame {
    source: Box<dyn WordSource>,
    batch_size: usize,
    pool: Vec<String>,
    round: Round,
    rounds_started: u64,
}

impl HangmanGame {
    pub fn new(source: impl WordSource + 'static) -> Self {
        Self::with_batch_size(source, DEFAULT_BATCH_SIZE)
    }

    pub fn with_batch_size(source: impl WordSource + 'static, batch_size: usize) -> Self {
        Self {
            source: Box::new(source),
            batch_size: batch_size.max(1),
            pool: Vec::new(),
            round: Round::default(),
            rounds_started: 0,
        }
    }

    /// Pick the next word, refilling the pool from the source if it ran dry.
    ///
    /// Nothing is modified until the fetched batch is in hand, so a failed or
    /// dropped call leaves the engine exactly as it was.
    pub async fn start_new_round(&mut self) -> Result<(), GameError> {
        if self.pool.is_empty() {
            info!(batch_size = self.batch_size, "word pool empty, refilling");
            let batch: Vec<String> = self
                .source
                .fetch_words(self.batch_size)
                .await?
                .into_iter()
                .filter(|w| !w.is_empty())
                .collect();

            if batch.is_empty() {
                return Err(SourceError::Empty.into());
            }
            debug!(received = batch.len(), "word pool refilled");
            self.pool = batch;
        }

        let Some(word) = self.pool.pop() else {
            return Err(SourceError::Empty.into());
        };

        self.round = Round::new(&word);
        self.rounds_started += 1;
        info!(
            round = self.rounds_started,
            length = self.round.word.len(),
            pool_left = self.pool.len(),
            "round started"
        );
        Ok(())
    }

    /// The reveal mask, e.g. `c_t`. Empty before the first round.
    pub fn hidden_word(&self) -> String {
        self.round.mask.iter().collect()
    }

    pub fn revealed_word(&self) -> Result<String, GameError> {
        if self.is_active() {
            return Err(GameError::GameStillActive);
        }
        Ok(self.round.word.iter().collect())
    }

    pub fn guesses_remaining(&self) -> u32 {
        self.round.guesses
    }

    pub fn is_won(&self) -> bool {
        !self.round.has_blanks()
    }

    pub fn is_lost(&self) -> bool {
        self.round.guesses == 0 && self.round.has_blanks()
    }

    pub fn is_active(&self) -> bool {
        !self.round.mask.is_empty() && !self.is_won() && !self.is_lost()
    }

    /// Reveal every position holding `letter`. Returns whether the letter is
    /// in the word; a miss costs one guess.
    ///
    /// Only the budget is checked here. Guessing after a win is allowed and a
    /// miss still costs a guess.
    pub fn guess(&mut self, letter: char) -> Result<bool, GameError> {
        if self.round.guesses == 0 {
            return Err(GameError::NoGuessesRemaining);
        }

        let round = &mut self.round;
        let mut hit = false;
        for (slot, &c) in round.mask.iter_mut().zip(&round.word) {
            if c == letter {
                *slot = c;
                hit = true;
            }
        }

        if hit {
            debug!(%letter, "correct guess");
            return Ok(true);
        }

        round.guesses -= 1;
        debug!(%letter, left = round.guesses, "wrong guess");
        Ok(false)
    }

    /// Words still cached from the last refill
    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Rounds started successfully so far
    pub fn round_number(&self) -> u64 {
        self.rounds_started
    }
}

impl std::fmt::Debug for HangmanGame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HangmanGame")
            .field("batch_size", &self.batch_size)
            .field("pool_len", &self.pool.len())
            .field("hidden_word", &self.hidden_word())
            .field("guesses", &self.round.guesses)
            .finish()
    }
}
