//! Semantic ranking of posts against a free-text prompt.
//!
//! This module provides local embedding-based ranking using fastembed-rs
//! and in-memory cosine similarity.
//!
//! # Architecture
//!
//! - `embeddings`: The `Embedder` seam and its fastembed implementation
//! - `similarity`: Cosine similarity primitive
//! - `ranking`: Ordering, limit and threshold selection
//! - `service`: High-level post search service

pub mod embeddings;
mod ranking;
mod service;
mod similarity;

pub use embeddings::{Embedder, EmbeddingError, EmbeddingModel};
pub use service::{PostSearchService, ScoredPost, SearchError};

/// Default embedding model name
pub const DEFAULT_MODEL: &str = "all-MiniLM-L6-v2";

/// Minimum similarity score for a post to be returned
pub const SIMILARITY_THRESHOLD: f32 = 0.5;

/// Maximum number of posts returned per search
pub const MAX_RESULTS: usize = 3;
