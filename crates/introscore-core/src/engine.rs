use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{Result, ScoreError};
use crate::providers::{Embedder, GrammarChecker, SentimentAnalyzer};
use crate::scorers;
use crate::transcript::Transcript;
use crate::types::{Criterion, CriterionResult, ScoreReport};

pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(30);

/// The rubric engine.
///
/// Holds the three scoring collaborators and the per-provider timeout.
/// Build one at startup, after the provider clients exist, and share it
/// for the life of the process; cloning the handle is cheap and the
/// engine keeps no per-evaluation state.
#[derive(Clone)]
pub struct ScoringEngine {
    inner: Arc<EngineInner>,
}

#[derive(Clone)]
struct EngineInner {
    embedder: Arc<dyn Embedder>,
    grammar: Arc<dyn GrammarChecker>,
    sentiment: Arc<dyn SentimentAnalyzer>,
    provider_timeout: Duration,
}

impl ScoringEngine {
    pub fn new(
        embedder: Arc<dyn Embedder>,
        grammar: Arc<dyn GrammarChecker>,
        sentiment: Arc<dyn SentimentAnalyzer>,
    ) -> Self {
        Self {
            inner: Arc::new(EngineInner {
                embedder,
                grammar,
                sentiment,
                provider_timeout: DEFAULT_PROVIDER_TIMEOUT,
            }),
        }
    }

    /// Replace the per-provider timeout. A provider that does not answer
    /// in time degrades its criterion instead of failing the report.
    pub fn with_provider_timeout(mut self, timeout: Duration) -> Self {
        Arc::make_mut(&mut self.inner).provider_timeout = timeout;
        self
    }

    /// Score a transcript against the full rubric.
    ///
    /// The five transcript-only criteria are computed inline. The three
    /// provider-bound ones (keywords, grammar, sentiment) run
    /// concurrently, each bounded by the provider timeout. A failing or
    /// slow collaborator degrades only its own criterion; invalid input
    /// fails the whole evaluation.
    pub async fn evaluate(&self, text: &str, duration_secs: f64) -> Result<ScoreReport> {
        let transcript = Transcript::new(text, duration_secs)?;
        debug!(
            word_count = transcript.word_count(),
            duration_secs, "scoring transcript"
        );

        let salutation = scorers::score_salutation(&transcript);
        let flow = scorers::score_flow(&transcript);
        let speech_rate = scorers::score_speech_rate(&transcript)?;
        let vocabulary = scorers::score_vocabulary(&transcript)?;
        let filler_words = scorers::score_filler_words(&transcript);

        let (keywords, grammar, sentiment) = tokio::join!(
            self.run_bounded(
                scorers::EMBEDDING_PROVIDER,
                scorers::score_keywords(&transcript, self.inner.embedder.as_ref()),
            ),
            self.run_bounded(
                scorers::GRAMMAR_PROVIDER,
                scorers::score_grammar(&transcript, self.inner.grammar.as_ref()),
            ),
            self.run_bounded(
                scorers::SENTIMENT_PROVIDER,
                scorers::score_sentiment(&transcript, self.inner.sentiment.as_ref()),
            ),
        );
        let (keywords, grammar, sentiment) = (keywords?, grammar?, sentiment?);

        let criteria = BTreeMap::from([
            (Criterion::Salutation, salutation),
            (Criterion::Keywords, keywords),
            (Criterion::Flow, flow),
            (Criterion::SpeechRate, speech_rate),
            (Criterion::Grammar, grammar),
            (Criterion::Vocabulary, vocabulary),
            (Criterion::FillerWords, filler_words),
            (Criterion::Sentiment, sentiment),
        ]);
        let overall_score = criteria.values().filter_map(|result| result.score).sum();

        debug!(overall_score, "transcript scored");
        Ok(ScoreReport {
            overall_score,
            criteria,
        })
    }

    /// Run one provider-bound scorer under the timeout, turning a
    /// collaborator failure into a degraded result for that criterion.
    async fn run_bounded<F>(&self, provider: &'static str, scorer: F) -> Result<CriterionResult>
    where
        F: Future<Output = Result<CriterionResult>>,
    {
        let outcome = match tokio::time::timeout(self.inner.provider_timeout, scorer).await {
            Ok(result) => result,
            Err(_) => Err(ScoreError::CollaboratorUnavailable {
                provider,
                reason: format!("no response within {:?}", self.inner.provider_timeout),
            }),
        };

        match outcome {
            Ok(result) => Ok(result),
            Err(ScoreError::CollaboratorUnavailable { provider, reason }) => {
                warn!(provider, reason = %reason, "criterion degraded");
                Ok(CriterionResult::unavailable(format!(
                    "Not scored: the {provider} service was unavailable ({reason})."
                )))
            }
            Err(other) => Err(other),
        }
    }
}
