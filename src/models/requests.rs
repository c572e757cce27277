//! Request DTOs for the page cache API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use super::Page;

/// Request body for storing a page (PUT /pages)
#[derive(Debug, Clone, Deserialize)]
pub struct PutPageRequest {
    /// Page title, used as the cache id
    pub title: String,
    /// Page text
    #[serde(default)]
    pub text: String,
}

impl PutPageRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.title.trim().is_empty() {
            return Some("Title cannot be empty".to_string());
        }
        None
    }
}

impl From<PutPageRequest> for Page {
    fn from(req: PutPageRequest) -> Self {
        Page::new(req.title, req.text)
    }
}
