use serde::{Deserialize, Serialize};

/// A single scheduled step of a post, e.g. `{"time": "7am", "content": "yoga"}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Routine {
    pub time: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Post {
    #[serde(rename = "postId")]
    pub post_id: String,
    pub title: String,
    pub description: String,

    /// Optional on the wire; `null` and a missing field both mean "no routines".
    #[serde(default)]
    pub routines: Option<Vec<Routine>>,

    pub filters: Vec<String>,

    #[serde(rename = "type")]
    pub kind: String,
}

impl Post {
    /// Render the post as the single text blob handed to the embedding model.
    ///
    /// Fields are joined with one space in a fixed order:
    /// title, description, routines, filters, type.
    /// Empty fields are kept, so their separators remain.
    pub fn flatten(&self) -> String {
        let routine_text = self
            .routines
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|routine| format!("{} {}", routine.time, routine.content))
            .collect::<Vec<_>>()
            .join(" ");
        let filters_text = self.filters.join(" ");

        format!(
            "{} {} {} {} {}",
            self.title, self.description, routine_text, filters_text, self.kind
        )
    }

    pub fn hit(&self) -> SearchHit {
        SearchHit {
            post_id: self.post_id.clone(),
            kind: self.kind.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchRequest {
    pub prompt: String,
    pub posts: Vec<Post>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SearchHit {
    #[serde(rename = "postId")]
    pub post_id: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub results: Vec<SearchHit>,
}

pub const NO_POSTS_MESSAGE: &str = "No posts provided";

impl SearchResponse {
    pub fn no_posts() -> Self {
        Self {
            message: Some(NO_POSTS_MESSAGE.to_string()),
            results: vec![],
        }
    }

    pub fn hits(results: Vec<SearchHit>) -> Self {
        Self {
            message: None,
            results,
        }
    }
}
