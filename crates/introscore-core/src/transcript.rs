use crate::error::{Result, ScoreError};

/// Validated evaluation input.
///
/// Construction enforces the engine's preconditions, so every
/// `Transcript` holds at least one word and a positive, finite duration.
#[derive(Debug, Clone)]
pub struct Transcript {
    text: String,
    word_count: usize,
    duration_secs: f64,
}

impl Transcript {
    pub fn new(text: impl Into<String>, duration_secs: f64) -> Result<Self> {
        let text = text.into();
        if !duration_secs.is_finite() || duration_secs <= 0.0 {
            return Err(ScoreError::NonPositiveDuration {
                seconds: duration_secs,
            });
        }
        let word_count = text.split_whitespace().count();
        if word_count == 0 {
            return Err(ScoreError::EmptyTranscript);
        }
        Ok(Self {
            text,
            word_count,
            duration_secs,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of whitespace-separated tokens.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_text_with_words_and_positive_duration() {
        let transcript = Transcript::new("hello everyone, my name is Alex", 30.0).unwrap();
        assert_eq!(transcript.word_count(), 6);
        assert_eq!(transcript.duration_secs(), 30.0);
    }

    #[test]
    fn rejects_empty_text() {
        assert!(matches!(
            Transcript::new("", 30.0),
            Err(ScoreError::EmptyTranscript)
        ));
    }

    #[test]
    fn rejects_whitespace_only_text() {
        assert!(matches!(
            Transcript::new("   \n\t  ", 30.0),
            Err(ScoreError::EmptyTranscript)
        ));
    }

    #[test]
    fn rejects_zero_and_negative_duration() {
        assert!(matches!(
            Transcript::new("hello", 0.0),
            Err(ScoreError::NonPositiveDuration { .. })
        ));
        assert!(matches!(
            Transcript::new("hello", -12.5),
            Err(ScoreError::NonPositiveDuration { .. })
        ));
    }

    #[test]
    fn rejects_non_finite_duration() {
        assert!(matches!(
            Transcript::new("hello", f64::NAN),
            Err(ScoreError::NonPositiveDuration { .. })
        ));
        assert!(matches!(
            Transcript::new("hello", f64::INFINITY),
            Err(ScoreError::NonPositiveDuration { .. })
        ));
    }

    #[test]
    fn invalid_input_errors_are_flagged_as_such() {
        let err = Transcript::new("", 30.0).unwrap_err();
        assert!(err.is_invalid_input());
    }
}
