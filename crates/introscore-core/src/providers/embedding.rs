use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::providers::{Embedder, ProviderError};

pub const DEFAULT_EMBEDDINGS_URL: &str = "https://api.openai.com/v1/embeddings";
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";

const API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";

/// Embedding client for any OpenAI-compatible `/v1/embeddings` endpoint.
pub struct HttpEmbedder {
    client: reqwest::Client,
    api_url: String,
    model: String,
    api_key: String,
}

impl HttpEmbedder {
    pub fn new(
        api_url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.into(),
            model: model.into(),
            api_key: api_key.into(),
        }
    }

    /// Default endpoint and model, with the key read from `OPENAI_API_KEY`.
    pub fn from_env() -> Result<Self, ProviderError> {
        let api_key = std::env::var(API_KEY_ENV_VAR).map_err(|_| {
            ProviderError::MissingApiKey {
                env_var: API_KEY_ENV_VAR,
            }
        })?;
        Ok(Self::new(
            DEFAULT_EMBEDDINGS_URL,
            DEFAULT_EMBEDDING_MODEL,
            api_key,
        ))
    }
}

#[derive(Deserialize)]
struct EmbeddingsResponse {
    data: Vec<EmbeddingRow>,
}

#[derive(Deserialize)]
struct EmbeddingRow {
    index: usize,
    embedding: Vec<f32>,
}

#[async_trait]
impl Embedder for HttpEmbedder {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, ProviderError> {
        debug!(inputs = texts.len(), model = %self.model, "requesting embeddings");

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&serde_json::json!({
                "model": self.model,
                "input": texts,
            }))
            .send()
            .await?
            .error_for_status()?
            .json::<EmbeddingsResponse>()
            .await?;

        if response.data.len() != texts.len() {
            return Err(ProviderError::MalformedResponse {
                reason: format!(
                    "asked for {} embeddings, got {}",
                    texts.len(),
                    response.data.len()
                ),
            });
        }

        // The API is free to reorder rows; the index field is authoritative.
        let mut rows = response.data;
        rows.sort_by_key(|row| row.index);
        Ok(rows.into_iter().map(|row| row.embedding).collect())
    }
}
