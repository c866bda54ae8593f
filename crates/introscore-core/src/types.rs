use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The eight rubric criteria, in report order.
///
/// The derived `Ord` follows declaration order, so a
/// `BTreeMap<Criterion, _>` iterates (and serializes) in the order the
/// rubric lists them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Salutation,
    Keywords,
    Flow,
    SpeechRate,
    Grammar,
    Vocabulary,
    FillerWords,
    Sentiment,
}

impl Criterion {
    pub const ALL: [Criterion; 8] = [
        Criterion::Salutation,
        Criterion::Keywords,
        Criterion::Flow,
        Criterion::SpeechRate,
        Criterion::Grammar,
        Criterion::Vocabulary,
        Criterion::FillerWords,
        Criterion::Sentiment,
    ];

    /// Published per-criterion maximum. Display metadata only: the
    /// aggregator sums raw scores and never clamps to this.
    pub fn max_score(&self) -> u32 {
        match self {
            Criterion::Salutation => 5,
            Criterion::Keywords => 12,
            Criterion::Flow => 5,
            Criterion::SpeechRate => 10,
            Criterion::Grammar => 10,
            Criterion::Vocabulary => 10,
            Criterion::FillerWords => 15,
            Criterion::Sentiment => 15,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Criterion::Salutation => "Salutation",
            Criterion::Keywords => "Keywords",
            Criterion::Flow => "Flow",
            Criterion::SpeechRate => "Speech rate",
            Criterion::Grammar => "Grammar",
            Criterion::Vocabulary => "Vocabulary",
            Criterion::FillerWords => "Filler words",
            Criterion::Sentiment => "Sentiment",
        }
    }
}

/// Score and feedback for one criterion.
///
/// `score` is `None` only when the criterion's collaborating service was
/// unavailable; the feedback then says so instead of coaching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionResult {
    pub score: Option<u32>,
    pub feedback: String,
}

impl CriterionResult {
    pub fn scored(score: u32, feedback: impl Into<String>) -> Self {
        Self {
            score: Some(score),
            feedback: feedback.into(),
        }
    }

    pub fn unavailable(feedback: impl Into<String>) -> Self {
        Self {
            score: None,
            feedback: feedback.into(),
        }
    }
}

/// Aggregate result of one evaluation: every criterion's outcome plus the
/// sum of the scores that were produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub overall_score: u32,
    pub criteria: BTreeMap<Criterion, CriterionResult>,
}

impl ScoreReport {
    pub fn criterion(&self, criterion: Criterion) -> Option<&CriterionResult> {
        self.criteria.get(&criterion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn criteria_serialize_in_rubric_order() {
        let criteria: BTreeMap<Criterion, CriterionResult> = Criterion::ALL
            .into_iter()
            .map(|criterion| (criterion, CriterionResult::scored(1, "ok")))
            .collect();
        let report = ScoreReport {
            overall_score: 8,
            criteria,
        };

        // The serializer streams the map in iteration order, so the JSON
        // text carries the rubric order.
        let json = serde_json::to_string(&report).unwrap();
        let positions: Vec<usize> = [
            "\"salutation\"",
            "\"keywords\"",
            "\"flow\"",
            "\"speech_rate\"",
            "\"grammar\"",
            "\"vocabulary\"",
            "\"filler_words\"",
            "\"sentiment\"",
        ]
        .iter()
        .map(|key| json.find(key).unwrap())
        .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn unavailable_result_serializes_null_score() {
        let result = CriterionResult::unavailable("service down");
        let json = serde_json::to_value(&result).unwrap();
        assert!(json["score"].is_null());
        assert_eq!(json["feedback"], "service down");
    }

    #[test]
    fn report_round_trips_through_json() {
        let report = ScoreReport {
            overall_score: 9,
            criteria: BTreeMap::from([
                (Criterion::Salutation, CriterionResult::scored(4, "nice")),
                (Criterion::Grammar, CriterionResult::unavailable("down")),
                (Criterion::Sentiment, CriterionResult::scored(5, "warm")),
            ]),
        };

        let json = serde_json::to_string(&report).unwrap();
        let back: ScoreReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
