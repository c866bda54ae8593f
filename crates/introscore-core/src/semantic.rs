//! Semantic concept detection: embed the transcript and its target
//! phrases in one batch, then compare with cosine similarity.

use crate::providers::{Embedder, ProviderError};

/// Cosine similarity of two vectors.
///
/// Returns 0.0 when either vector has zero magnitude or the dimensions
/// disagree, so degenerate inputs read as "no similarity" rather than
/// NaN.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// Similarity between `text` and each target phrase, in target order.
///
/// The transcript and all targets go out in a single provider call, so
/// the transcript is embedded exactly once per evaluation.
pub async fn similarity_to_targets(
    embedder: &dyn Embedder,
    text: &str,
    targets: &[&str],
) -> Result<Vec<f32>, ProviderError> {
    let mut inputs = Vec::with_capacity(targets.len() + 1);
    inputs.push(text.to_string());
    inputs.extend(targets.iter().map(|target| (*target).to_string()));

    let mut vectors = embedder.embed(&inputs).await?;
    if vectors.len() != inputs.len() {
        return Err(ProviderError::MalformedResponse {
            reason: format!(
                "expected {} embeddings, got {}",
                inputs.len(),
                vectors.len()
            ),
        });
    }

    let text_vector = vectors.remove(0);
    Ok(vectors
        .iter()
        .map(|vector| cosine_similarity(&text_vector, vector))
        .collect())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    #[test]
    fn identical_vectors_score_one() {
        let similarity = cosine_similarity(&[0.5, 0.5, 0.1], &[0.5, 0.5, 0.1]);
        assert!((similarity - 1.0).abs() < 1e-6);
    }

    #[test]
    fn orthogonal_vectors_score_zero() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
    }

    #[test]
    fn opposite_vectors_score_negative_one() {
        let similarity = cosine_similarity(&[1.0, 2.0], &[-1.0, -2.0]);
        assert!((similarity + 1.0).abs() < 1e-6);
    }

    #[test]
    fn zero_magnitude_scores_zero() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
    }

    #[test]
    fn mismatched_dimensions_score_zero() {
        assert_eq!(cosine_similarity(&[1.0, 0.0, 0.0], &[1.0, 0.0]), 0.0);
    }

    /// Embedder that returns a fixed vector per known input and records
    /// how many calls it served.
    struct RecordingEmbedder {
        calls: Mutex<Vec<usize>>,
    }

    #[async_trait]
    impl Embedder for RecordingEmbedder {
        async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, ProviderError> {
            self.calls.lock().unwrap().push(texts.len());
            Ok(texts
                .iter()
                .map(|text| match text.as_str() {
                    "i will tell you my name and age" => vec![1.0, 0.0],
                    "name" => vec![1.0, 0.0],
                    "age" => vec![0.8, 0.6],
                    _ => vec![0.0, 1.0],
                })
                .collect())
        }
    }

    #[tokio::test]
    async fn batches_text_and_targets_into_one_call() {
        let embedder = RecordingEmbedder {
            calls: Mutex::new(Vec::new()),
        };
        let sims = similarity_to_targets(
            &embedder,
            "i will tell you my name and age",
            &["name", "age", "goals"],
        )
        .await
        .unwrap();

        assert_eq!(sims.len(), 3);
        assert!((sims[0] - 1.0).abs() < 1e-6);
        assert!((sims[1] - 0.8).abs() < 1e-6);
        assert_eq!(sims[2], 0.0);

        let calls = embedder.calls.lock().unwrap();
        assert_eq!(*calls, vec![4], "one call carrying text plus targets");
    }

    /// Embedder that drops a row from its answer.
    struct ShortChangingEmbedder;

    #[async_trait]
    impl Embedder for ShortChangingEmbedder {
        async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, ProviderError> {
            Ok(vec![vec![1.0]; texts.len().saturating_sub(1)])
        }
    }

    #[tokio::test]
    async fn short_responses_are_malformed() {
        let result = similarity_to_targets(&ShortChangingEmbedder, "text", &["name"]).await;
        assert!(matches!(
            result,
            Err(ProviderError::MalformedResponse { .. })
        ));
    }
}
