//! The eight criterion scorers.
//!
//! Each one consumes the transcript (plus a collaborator where the
//! rubric needs one) and produces a score with feedback. No scorer looks
//! at another criterion's result, which is what lets the engine run the
//! provider-bound ones concurrently.

use crate::error::{Result, ScoreError};
use crate::providers::{Embedder, GrammarChecker, SentimentAnalyzer};
use crate::transcript::Transcript;
use crate::types::CriterionResult;
use crate::{lexical, metrics, rubric, semantic};

pub(crate) const EMBEDDING_PROVIDER: &str = "embedding";
pub(crate) const GRAMMAR_PROVIDER: &str = "grammar";
pub(crate) const SENTIMENT_PROVIDER: &str = "sentiment";

/// Salutation tiers in priority order; the first matching tier wins.
pub fn score_salutation(transcript: &Transcript) -> CriterionResult {
    if lexical::contains_any(transcript.text(), rubric::EXCELLENT_OPENERS) {
        return CriterionResult::scored(
            rubric::SALUTATION_EXCELLENT_POINTS,
            "Excellent opening. An enthusiastic introduction sets the tone straight away.",
        );
    }
    if lexical::contains_any(transcript.text(), rubric::GOOD_SALUTATIONS) {
        return CriterionResult::scored(
            rubric::SALUTATION_GOOD_POINTS,
            "Good salutation. A line about how you feel would lift it further.",
        );
    }
    if lexical::starts_with_any(transcript.text(), rubric::SHORT_GREETINGS) {
        return CriterionResult::scored(
            rubric::SALUTATION_SHORT_POINTS,
            "A brief greeting works, but a fuller opening like \"good morning everyone\" lands better.",
        );
    }
    CriterionResult::scored(0, "No salutation found. Open with a greeting before introducing yourself.")
}

/// Split `concepts` into covered and missing by strict similarity
/// comparison. A similarity exactly at the bar does not count.
fn concept_hits<'a>(
    concepts: &[&'a str],
    sims: &[f32],
    threshold: f32,
) -> (Vec<&'a str>, Vec<&'a str>) {
    let mut covered = Vec::new();
    let mut missing = Vec::new();
    for (concept, sim) in concepts.iter().zip(sims) {
        if *sim > threshold {
            covered.push(*concept);
        } else {
            missing.push(*concept);
        }
    }
    (covered, missing)
}

/// Keyword coverage: essential and secondary concepts are detected
/// semantically, school and family mentions literally.
pub async fn score_keywords(
    transcript: &Transcript,
    embedder: &dyn Embedder,
) -> Result<CriterionResult> {
    let targets: Vec<&str> = rubric::ESSENTIAL_CONCEPTS
        .iter()
        .chain(rubric::SECONDARY_CONCEPTS)
        .copied()
        .collect();
    let sims = semantic::similarity_to_targets(embedder, transcript.text(), &targets)
        .await
        .map_err(|err| ScoreError::collaborator(EMBEDDING_PROVIDER, err))?;
    let (essential_sims, secondary_sims) = sims.split_at(rubric::ESSENTIAL_CONCEPTS.len());

    let (covered, missing) = concept_hits(
        rubric::ESSENTIAL_CONCEPTS,
        essential_sims,
        rubric::ESSENTIAL_SIMILARITY,
    );
    let (secondary_covered, _) = concept_hits(
        rubric::SECONDARY_CONCEPTS,
        secondary_sims,
        rubric::SECONDARY_SIMILARITY,
    );

    let mut score = covered.len() as u32 * rubric::ESSENTIAL_CONCEPT_POINTS
        + secondary_covered.len() as u32 * rubric::SECONDARY_CONCEPT_POINTS;
    if lexical::contains_any(transcript.text(), rubric::SCHOOL_KEYWORDS) {
        score += rubric::SCHOOL_POINTS;
    }
    if lexical::contains_any(transcript.text(), rubric::FAMILY_MEMBERS) {
        score += rubric::FAMILY_POINTS;
    }

    let feedback = if missing.is_empty() {
        "All the essential topics are covered. Strong content.".to_string()
    } else if covered.is_empty() {
        format!(
            "The essential topics are missing. Touch on your {}.",
            missing.join(", ")
        )
    } else {
        format!(
            "Mentions {}. Consider also touching on your {}.",
            covered.join(", "),
            missing.join(", ")
        )
    };

    Ok(CriterionResult::scored(score, feedback))
}

/// Structural flow: all four stages present earns the full five points,
/// anything less earns zero.
pub fn score_flow(transcript: &Transcript) -> CriterionResult {
    let text = transcript.text();
    let stages = [
        ("a greeting", lexical::contains_any(text, rubric::FLOW_SALUTATIONS)),
        ("basic details", lexical::contains_any(text, rubric::BASIC_DETAIL_KEYWORDS)),
        ("personal details", lexical::contains_any(text, rubric::ADDITIONAL_DETAIL_KEYWORDS)),
        ("a closing", lexical::contains_any(text, rubric::CLOSING_PHRASES)),
    ];

    let missing: Vec<&str> = stages
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        CriterionResult::scored(
            rubric::FLOW_POINTS,
            "Clear structure: greeting, basic details, personal details, and a closing are all there.",
        )
    } else {
        CriterionResult::scored(0, format!("The introduction is missing {}.", missing.join(", ")))
    }
}

pub fn score_speech_rate(transcript: &Transcript) -> Result<CriterionResult> {
    let wpm = metrics::words_per_minute(transcript.word_count(), transcript.duration_secs())?;
    let (score, feedback) = if wpm > rubric::WPM_FAST_CUTOFF {
        rubric::WPM_TOO_FAST
    } else {
        rubric::WPM_BANDS
            .iter()
            .find(|band| wpm >= band.min && wpm <= band.max)
            .map(|band| (band.score, band.feedback))
            .unwrap_or(rubric::WPM_DEFAULT)
    };
    Ok(CriterionResult::scored(
        score,
        format!("{feedback} ({wpm:.0} words per minute)"),
    ))
}

pub async fn score_grammar(
    transcript: &Transcript,
    checker: &dyn GrammarChecker,
) -> Result<CriterionResult> {
    let issues = checker
        .check(transcript.text())
        .await
        .map_err(|err| ScoreError::collaborator(GRAMMAR_PROVIDER, err))?;
    let quality = metrics::grammar_quality(issues, transcript.word_count())?;
    let band = rubric::pick_cutoff(rubric::GRAMMAR_BANDS, quality);

    let feedback = match issues {
        0 => band.feedback.to_string(),
        1 => format!("{} (1 issue flagged)", band.feedback),
        n => format!("{} ({n} issues flagged)", band.feedback),
    };
    Ok(CriterionResult::scored(band.score, feedback))
}

pub fn score_vocabulary(transcript: &Transcript) -> Result<CriterionResult> {
    let ratio = metrics::type_token_ratio(transcript.text())?;
    let band = rubric::pick_cutoff(rubric::VOCABULARY_BANDS, ratio);
    Ok(CriterionResult::scored(
        band.score,
        format!("{} ({:.0}% distinct words)", band.feedback, ratio * 100.0),
    ))
}

pub fn score_filler_words(transcript: &Transcript) -> CriterionResult {
    let count = metrics::filler_word_count(transcript.text());
    let rate = metrics::filler_word_rate(transcript.text());
    let band = rubric::pick_ceiling(rubric::FILLER_BANDS, rate);

    let feedback = match count {
        0 => band.feedback.to_string(),
        1 => format!("{} (1 filler word)", band.feedback),
        n => format!("{} ({n} filler words)", band.feedback),
    };
    CriterionResult::scored(band.score, feedback)
}

pub async fn score_sentiment(
    transcript: &Transcript,
    analyzer: &dyn SentimentAnalyzer,
) -> Result<CriterionResult> {
    let compound = analyzer
        .polarity(transcript.text())
        .await
        .map_err(|err| ScoreError::collaborator(SENTIMENT_PROVIDER, err))?;
    let band = rubric::pick_cutoff(rubric::SENTIMENT_BANDS, compound);
    Ok(CriterionResult::scored(band.score, band.feedback))
}
