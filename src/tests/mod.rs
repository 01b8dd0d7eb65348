//! Crate-level test helpers and model-backed scenarios.
//!
//! The scenarios in `model` download a real embedding model and are marked
//! #[ignore] by default.
//! Run with: cargo test -- --ignored


use crate::posts::Post;
use crate::semantic::{Embedder, EmbeddingError};

/// Deterministic bag-of-words embedder for tests.
///
/// Each dimension counts one vocabulary word (case-insensitive,
/// whitespace-separated), so cosine similarity reflects shared words.
pub struct KeywordEmbedder {
    vocabulary: Vec<&'static str>,
}

impl Default for KeywordEmbedder {
    fn default() -> Self {
        Self {
            vocabulary: vec![
                "yoga", "morning", "fitness", "workout", "pizza", "food", "recipe", "dinner",
            ],
        }
    }
}

impl Embedder for KeywordEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let text = text.to_lowercase();
        let mut vector = vec![0.0; self.vocabulary.len()];
        for token in text.split_whitespace() {
            if let Some(pos) = self.vocabulary.iter().position(|word| *word == token) {
                vector[pos] += 1.0;
            }
        }
        Ok(vector)
    }

    fn dimensions(&self) -> usize {
        self.vocabulary.len()
    }

    fn name(&self) -> &str {
        "keyword"
    }
}

/// Embedder whose every call fails.
pub struct FailingEmbedder;

impl Embedder for FailingEmbedder {
    fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Err(EmbeddingError::EmbeddingFailed("model unavailable".to_string()))
    }

    fn dimensions(&self) -> usize {
        0
    }

    fn name(&self) -> &str {
        "failing"
    }
}

/// Embedder whose batch call drops the last vector.
#[derive(Default)]
pub struct ShortBatchEmbedder {
    inner: KeywordEmbedder,
}

impl Embedder for ShortBatchEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.inner.embed(text)
    }

    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let mut embeddings = self.inner.embed_batch(texts)?;
        embeddings.pop();
        Ok(embeddings)
    }

    fn dimensions(&self) -> usize {
        self.inner.dimensions()
    }

    fn name(&self) -> &str {
        "short-batch"
    }
}

/// Embedder producing 2-dimension vectors for single texts and
/// 3-dimension vectors for batches.
pub struct MisshapedEmbedder;

impl Embedder for MisshapedEmbedder {
    fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Ok(vec![1.0, 0.0])
    }

    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        Ok(texts.iter().map(|_| vec![1.0, 0.0, 0.0]).collect())
    }

    fn dimensions(&self) -> usize {
        2
    }

    fn name(&self) -> &str {
        "misshaped"
    }
}

pub fn post(id: &str, title: &str, description: &str, filters: &[&str], kind: &str) -> Post {
    Post {
        post_id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        routines: None,
        filters: filters.iter().map(|f| f.to_string()).collect(),
        kind: kind.to_string(),
    }
}
