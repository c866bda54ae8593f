use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("invalid input: transcript contains no words")]
    EmptyTranscript,

    #[error("invalid input: duration must be a positive number of seconds, got {seconds}")]
    NonPositiveDuration { seconds: f64 },

    #[error("{provider} provider unavailable: {reason}")]
    CollaboratorUnavailable {
        provider: &'static str,
        reason: String,
    },
}

impl ScoreError {
    pub(crate) fn collaborator(provider: &'static str, reason: impl ToString) -> Self {
        Self::CollaboratorUnavailable {
            provider,
            reason: reason.to_string(),
        }
    }

    /// True for errors caused by the input itself rather than by a
    /// collaborating service.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::EmptyTranscript | Self::NonPositiveDuration { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ScoreError>;
