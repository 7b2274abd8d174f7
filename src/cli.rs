use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::core::terminal::TerminalContext;
use crate::core::words::{
    HttpWordSource, StaticWordSource, WordSource, DEFAULT_API_URL, DEFAULT_BATCH_SIZE,
};
use crate::games::hangman::{HangmanGame, HangmanRenderer, Session, SessionSummary};

#[derive(Parser, Debug)]
#[command(name = "hangterm")]
#[command(about = "Terminal hangman with words fetched from a random-word API")]
#[command(version)]
pub struct Cli {
    /// Word API endpoint, queried as `<url>?number=<batch size>`
    #[arg(long, env = "HANGTERM_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Words requested per refill of the word pool
    #[arg(
        long,
        env = "HANGTERM_BATCH_SIZE",
        default_value_t = DEFAULT_BATCH_SIZE,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub batch_size: usize,

    /// Give up on the word API after this many seconds
    #[arg(long, env = "HANGTERM_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    /// Play offline with these words instead of the API (comma separated)
    #[arg(short, long, value_delimiter = ',')]
    pub words: Option<Vec<String>>,

    /// Number of rounds to play (default: until :quit or end of input)
    #[arg(short, long)]
    pub rounds: Option<u64>,
}

impl Cli {
    /// Build the engine over whichever word source the flags select
    pub fn build_game(&self) -> Result<HangmanGame> {
        let source: Box<dyn WordSource> = match &self.words {
            Some(words) => {
                info!(count = words.len(), "using offline word list");
                Box::new(StaticWordSource::new(words.iter().cloned()))
            }
            None => {
                info!(url = %self.api_url, "using word API");
                let timeout = Duration::from_secs(self.timeout_secs);
                let source = HttpWordSource::new(&self.api_url, timeout)
                    .context("failed to build HTTP client")?;
                Box::new(source)
            }
        };
        Ok(HangmanGame::with_batch_size(source, self.batch_size))
    }
}

pub async fn run_cli(cli: Cli) -> Result<SessionSummary> {
    let game = cli.build_game()?;
    let mut session = Session::new(game, HangmanRenderer).with_max_rounds(cli.rounds);

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut ctx = TerminalContext::stdout();
    session.run(stdin, &mut ctx).await
}
