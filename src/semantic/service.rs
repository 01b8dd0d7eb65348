//! Post search service.
//!
//! Holds the embedding model for the lifetime of the process and runs the
//! rank pipeline for each request:
//! - Flatten posts into text
//! - Embed the prompt and the flattened posts
//! - Score by cosine similarity
//! - Keep the top results above the relevance threshold

use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;

use crate::posts::{Post, SearchHit, SearchRequest, SearchResponse};
use crate::semantic::embeddings::{Embedder, EmbeddingError};
use crate::semantic::ranking::{rank_all, select_top};
use crate::semantic::similarity::cosine_scores;
use crate::semantic::{MAX_RESULTS, SIMILARITY_THRESHOLD};

/// Errors that can occur while ranking posts.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("Embedding count mismatch: expected {expected}, got {got}")]
    EmbeddingCountMismatch { expected: usize, got: usize },

    #[error("Embedding dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
}

/// A post together with its similarity to the prompt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredPost {
    pub index: usize,
    #[serde(rename = "postId")]
    pub post_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub score: f32,
}

/// Ranks caller-supplied posts against a prompt.
///
/// Constructed once at startup and shared read-only between requests.
/// Nothing is cached between calls.
#[derive(Clone)]
pub struct PostSearchService {
    embedder: Arc<dyn Embedder>,
}

impl PostSearchService {
    pub fn new(embedder: Arc<dyn Embedder>) -> Self {
        Self { embedder }
    }

    /// Name of the embedding model in use.
    pub fn model_name(&self) -> &str {
        self.embedder.name()
    }

    /// Run a search request.
    ///
    /// An empty post list is answered with an informational message and
    /// never reaches the model.
    pub fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        if request.posts.is_empty() {
            return Ok(SearchResponse::no_posts());
        }

        let hits = self.top_hits(&request.prompt, &request.posts)?;
        Ok(SearchResponse::hits(hits))
    }

    /// At most `MAX_RESULTS` posts scoring at least `SIMILARITY_THRESHOLD`,
    /// best first.
    pub fn top_hits(&self, prompt: &str, posts: &[Post]) -> Result<Vec<SearchHit>, SearchError> {
        let scores = self.scores(prompt, posts)?;

        Ok(select_top(&scores, MAX_RESULTS, SIMILARITY_THRESHOLD)
            .into_iter()
            .map(|ranked| posts[ranked.index].hit())
            .collect())
    }

    /// Every post with its score, best first. No limit or threshold applied.
    pub fn score_all(&self, prompt: &str, posts: &[Post]) -> Result<Vec<ScoredPost>, SearchError> {
        let scores = self.scores(prompt, posts)?;

        Ok(rank_all(&scores)
            .into_iter()
            .map(|ranked| {
                let post = &posts[ranked.index];
                ScoredPost {
                    index: ranked.index,
                    post_id: post.post_id.clone(),
                    kind: post.kind.clone(),
                    score: ranked.score,
                }
            })
            .collect())
    }

    /// Cosine similarity of each post to the prompt, in input order.
    fn scores(&self, prompt: &str, posts: &[Post]) -> Result<Vec<f32>, SearchError> {
        if posts.is_empty() {
            return Ok(vec![]);
        }

        let started = Instant::now();

        let texts: Vec<String> = posts.iter().map(Post::flatten).collect();
        let post_embeddings = self.embedder.embed_batch(&texts)?;
        if post_embeddings.len() != posts.len() {
            return Err(SearchError::EmbeddingCountMismatch {
                expected: posts.len(),
                got: post_embeddings.len(),
            });
        }

        let prompt_embedding = self.embedder.embed(prompt)?;
        if let Some(mismatched) = post_embeddings
            .iter()
            .find(|embedding| embedding.len() != prompt_embedding.len())
        {
            return Err(SearchError::DimensionMismatch {
                expected: prompt_embedding.len(),
                got: mismatched.len(),
            });
        }

        let scores = cosine_scores(&prompt_embedding, &post_embeddings);

        log::debug!(
            "scored {} posts with '{}' in {:?}",
            posts.len(),
            self.embedder.name(),
            started.elapsed()
        );

        Ok(scores)
    }
}
