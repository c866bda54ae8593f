use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::providers::{GrammarChecker, ProviderError};

pub const DEFAULT_LANGUAGETOOL_URL: &str = "https://api.languagetool.org";

const CHECK_LANGUAGE: &str = "en-US";

/// Grammar checker backed by a LanguageTool server's `/v2/check` endpoint.
pub struct LanguageToolClient {
    client: reqwest::Client,
    base_url: String,
}

impl LanguageToolClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for LanguageToolClient {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGETOOL_URL)
    }
}

#[derive(Deserialize)]
struct CheckResponse {
    matches: Vec<serde_json::Value>,
}

#[async_trait]
impl GrammarChecker for LanguageToolClient {
    async fn check(&self, text: &str) -> Result<usize, ProviderError> {
        debug!(chars = text.len(), "checking grammar");

        let url = format!("{}/v2/check", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .post(&url)
            .form(&[("text", text), ("language", CHECK_LANGUAGE)])
            .send()
            .await?
            .error_for_status()?
            .json::<CheckResponse>()
            .await?;

        Ok(response.matches.len())
    }
}
