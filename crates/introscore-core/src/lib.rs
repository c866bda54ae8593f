//! Introscore Core Library
//!
//! Rubric scoring for spoken self-introduction transcripts: eight fixed
//! criteria, each producing a score and a line of feedback, aggregated
//! into one structured report.

pub mod engine;
pub mod error;
pub mod format;
pub mod lexical;
pub mod metrics;
pub mod providers;
pub mod rubric;
pub mod scorers;
pub mod semantic;
pub mod transcript;
pub mod types;

// Re-export commonly used items at crate root
pub use engine::{DEFAULT_PROVIDER_TIMEOUT, ScoringEngine};
pub use error::{Result, ScoreError};
pub use format::format_report_readable;
pub use providers::{
    Embedder, GrammarChecker, HttpEmbedder, LanguageToolClient, LexiconSentiment, ProviderError,
    SentimentAnalyzer,
};
pub use transcript::Transcript;
pub use types::{Criterion, CriterionResult, ScoreReport};
