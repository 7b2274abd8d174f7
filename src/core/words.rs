/// Word sources feeding the game engine's word pool
use std::time::Duration;

use async_trait::async_trait;
use rand::seq::SliceRandom;
use serde::Deserialize;
use tracing::{debug, warn};

/// Public random-word API used when no word list is given
pub const DEFAULT_API_URL: &str = "https://random-word-api.herokuapp.com/word";

/// Number of words requested per refill unless configured otherwise
pub const DEFAULT_BATCH_SIZE: usize = 100;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("word request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("word service answered with status {0}")]
    Status(u16),
    #[error("word service returned an unusable payload: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("word source has no words to offer")]
    Empty,
}

/// Narrow fetch contract the engine consumes: one request per refill
#[async_trait]
pub trait WordSource: Send + Sync {
    /// Request a batch of `n` candidate words
    async fn fetch_words(&self, n: usize) -> Result<Vec<String>, SourceError>;
}

#[async_trait]
impl<S: WordSource + ?Sized> WordSource for Box<S> {
    async fn fetch_words(&self, n: usize) -> Result<Vec<String>, SourceError> {
        (**self).fetch_words(n).await
    }
}

/// Body of a successful word API response
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct WordBatch(Vec<String>);

/// Decode a response body; anything but a JSON array of strings is rejected
pub fn parse_word_batch(body: &[u8]) -> Result<Vec<String>, SourceError> {
    let WordBatch(words) = serde_json::from_slice(body)?;
    Ok(words)
}

/// Fetches words from the random-word HTTP API
#[derive(Debug, Clone)]
pub struct HttpWordSource {
    client: reqwest::Client,
    api_url: String,
}

impl HttpWordSource {
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_url: api_url.into(),
        })
    }
}

#[async_trait]
impl WordSource for HttpWordSource {
    async fn fetch_words(&self, n: usize) -> Result<Vec<String>, SourceError> {
        debug!(url = %self.api_url, n, "requesting word batch");

        let response = self
            .client
            .get(&self.api_url)
            .query(&[("number", n)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "word service rejected request");
            return Err(SourceError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        parse_word_batch(&body)
    }
}

/// Offline source drawing from a fixed list
#[derive(Debug, Clone, Default)]
pub struct StaticWordSource {
    words: Vec<String>,
}

impl StaticWordSource {
    pub fn new<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl WordSource for StaticWordSource {
    async fn fetch_words(&self, n: usize) -> Result<Vec<String>, SourceError> {
        if self.words.is_empty() {
            return Err(SourceError::Empty);
        }

        let mut batch = self.words.clone();
        batch.shuffle(&mut rand::rng());
        batch.truncate(n);
        Ok(batch)
    }
}
