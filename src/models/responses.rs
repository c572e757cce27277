//! Response DTOs for the page cache API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;

use super::Page;

/// Response body for reading a page (GET /pages/:title)
#[derive(Debug, Clone, Serialize)]
pub struct PageResponse {
    pub title: String,
    pub text: String,
}

impl From<&Page> for PageResponse {
    fn from(page: &Page) -> Self {
        Self {
            title: page.title.clone(),
            text: page.text.clone(),
        }
    }
}

/// Response body for storing a page (PUT /pages)
#[derive(Debug, Clone, Serialize)]
pub struct PutPageResponse {
    /// Success message
    pub message: String,
    /// The title that was stored
    pub title: String,
}

impl PutPageResponse {
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            message: format!("Page '{}' cached successfully", title),
            title,
        }
    }
}

/// Response body for refreshing a page (POST /pages/:title/touch)
#[derive(Debug, Clone, Serialize)]
pub struct TouchResponse {
    pub title: String,
    /// false when the page was missing or already expired
    pub refreshed: bool,
}

impl TouchResponse {
    pub fn new(title: impl Into<String>, refreshed: bool) -> Self {
        Self {
            title: title.into(),
            refreshed,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub expirations: u64,
    pub refreshes: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Maximum number of entries
    pub capacity: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(stats: &CacheStats, capacity: usize) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            expirations: stats.expirations,
            refreshes: stats.refreshes,
            total_entries: stats.total_entries,
            capacity,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
