//! Capability traits for the scoring collaborators, plus the
//! implementations shipped with the crate.
//!
//! Build the provider clients once at startup and hand them to the
//! engine behind `Arc`; the engine keeps them for its whole lifetime.

pub mod embedding;
pub mod grammar;
pub mod sentiment;

pub use embedding::*;
pub use grammar::*;
pub use sentiment::*;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("missing API key: {env_var} is not set")]
    MissingApiKey { env_var: &'static str },

    #[error("malformed response: {reason}")]
    MalformedResponse { reason: String },
}

/// Text embedding. Returns one vector per input string, in input order.
#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, ProviderError>;
}

/// Grammar checking: how many issues a checker flags in `text`.
#[async_trait]
pub trait GrammarChecker: Send + Sync {
    async fn check(&self, text: &str) -> Result<usize, ProviderError>;
}

/// Sentiment analysis: compound polarity in [-1, 1].
#[async_trait]
pub trait SentimentAnalyzer: Send + Sync {
    async fn polarity(&self, text: &str) -> Result<f64, ProviderError>;
}
