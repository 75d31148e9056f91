use serde::{Deserialize, Serialize};

/// A display record for a single book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    pub title: String,
    pub author: String,
    /// Cover image URL, may be empty
    #[serde(default)]
    pub image_url: String,
}

impl BookRecord {
    #[inline]
    #[must_use]
    pub fn new(title: &str, author: &str, image_url: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            image_url: image_url.to_string(),
        }
    }
}
