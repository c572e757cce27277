//! Cached page type
//!
//! A page is identified by its title.

use serde::{Deserialize, Serialize};

use crate::cache::Identifiable;

/// A titled text page, the object held by the server's cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Page title, doubles as the cache id
    pub title: String,
    /// Page text
    pub text: String,
}

impl Page {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }
}

impl Identifiable for Page {
    fn id(&self) -> &str {
        &self.title
    }
}
