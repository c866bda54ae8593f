use async_trait::async_trait;

use crate::providers::{ProviderError, SentimentAnalyzer};

/// Valence per lexicon word, on the usual -4..=4 scale.
const LEXICON: &[(&str, f64)] = &[
    ("love", 3.2),
    ("loved", 2.9),
    ("awesome", 3.1),
    ("great", 3.1),
    ("best", 3.2),
    ("beautiful", 2.9),
    ("amazing", 2.8),
    ("pleasure", 2.8),
    ("excellent", 2.7),
    ("happy", 2.7),
    ("wonderful", 2.7),
    ("fantastic", 2.6),
    ("passion", 2.4),
    ("passionate", 2.4),
    ("excited", 2.3),
    ("fun", 2.3),
    ("grateful", 2.3),
    ("enjoy", 2.2),
    ("enjoying", 2.2),
    ("exciting", 2.2),
    ("proud", 2.1),
    ("glad", 2.0),
    ("favorite", 2.0),
    ("pleased", 2.0),
    ("good", 1.9),
    ("thank", 1.9),
    ("thanks", 1.9),
    ("better", 1.9),
    ("hope", 1.9),
    ("nice", 1.8),
    ("interesting", 1.7),
    ("interested", 1.6),
    ("dream", 1.6),
    ("welcome", 1.5),
    ("nervous", -1.2),
    ("boring", -1.3),
    ("bored", -1.4),
    ("tired", -1.4),
    ("difficult", -1.5),
    ("unhappy", -1.8),
    ("worried", -1.8),
    ("stressed", -1.9),
    ("afraid", -2.0),
    ("sad", -2.1),
    ("fear", -2.2),
    ("angry", -2.3),
    ("bad", -2.5),
    ("hate", -2.7),
    ("awful", -2.9),
    ("horrible", -2.9),
    ("terrible", -3.1),
    ("worst", -3.1),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "cannot", "can't", "don't", "doesn't", "didn't", "isn't", "wasn't",
    "won't",
];

const BOOSTERS: &[&str] = &["very", "really", "extremely", "incredibly", "truly", "super"];

/// A negation within this many preceding tokens flips a word's valence.
const NEGATION_WINDOW: usize = 3;
const NEGATION_FACTOR: f64 = -0.74;
const BOOST_INCREMENT: f64 = 0.293;
/// Normalization constant for squashing the valence sum into (-1, 1).
const NORMALIZATION_ALPHA: f64 = 15.0;

/// Deterministic in-process sentiment analyzer over a compact valence
/// lexicon.
///
/// Produces a compound polarity the same shape as the VADER family:
/// per-token valences, booster-adjusted and negation-flipped, summed and
/// squashed by `sum / sqrt(sum^2 + alpha)`. Never fails and needs no
/// network, which keeps the sentiment criterion available even offline.
#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconSentiment;

impl LexiconSentiment {
    pub fn new() -> Self {
        Self
    }

    fn compound(text: &str) -> f64 {
        let tokens: Vec<String> = text
            .split_whitespace()
            .map(|token| {
                token
                    .replace('\u{2019}', "'")
                    .trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
                    .to_lowercase()
            })
            .collect();

        let mut total = 0.0;
        for (i, token) in tokens.iter().enumerate() {
            let Some(entry) = LEXICON.iter().find(|entry| entry.0 == token.as_str()) else {
                continue;
            };
            let mut valence = entry.1;
            if i > 0 && BOOSTERS.contains(&tokens[i - 1].as_str()) {
                valence += BOOST_INCREMENT * valence.signum();
            }
            let window_start = i.saturating_sub(NEGATION_WINDOW);
            if tokens[window_start..i]
                .iter()
                .any(|prior| NEGATIONS.contains(&prior.as_str()))
            {
                valence *= NEGATION_FACTOR;
            }
            total += valence;
        }

        total / (total * total + NORMALIZATION_ALPHA).sqrt()
    }
}

#[async_trait]
impl SentimentAnalyzer for LexiconSentiment {
    async fn polarity(&self, text: &str) -> Result<f64, ProviderError> {
        Ok(Self::compound(text))
    }
}
