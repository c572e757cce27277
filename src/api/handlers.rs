//! API Handlers
//!
//! HTTP request handlers for each page cache endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::debug;

use crate::cache::BoundedExpiringCache;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{
    HealthResponse, Page, PageResponse, PutPageRequest, PutPageResponse, StatsResponse,
    TouchResponse,
};

/// Application state shared across all handlers.
///
/// The cache does its own locking, so handlers only need a shared reference.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<BoundedExpiringCache<Page>>,
}

impl AppState {
    /// Creates a new AppState around the given cache.
    pub fn new(cache: BoundedExpiringCache<Page>) -> Self {
        Self {
            cache: Arc::new(cache),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// # Errors
    /// `CacheError::InvalidConfig` if the configured capacity or TTL is zero.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = BoundedExpiringCache::new(config.capacity, config.ttl_duration())?;
        Ok(Self::new(cache))
    }
}

/// Handler for PUT /pages
///
/// Caches a page under its title, replacing any previous version.
pub async fn put_page_handler(
    State(state): State<AppState>,
    Json(req): Json<PutPageRequest>,
) -> Result<Json<PutPageResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let title = req.title.clone();
    if !state.cache.put(Page::from(req)) {
        return Err(CacheError::InvalidRequest(format!(
            "Page '{}' was rejected",
            title
        )));
    }
    debug!("Cached page '{}'", title);

    Ok(Json(PutPageResponse::new(title)))
}

/// Handler for GET /pages/:title
///
/// Returns 404 for pages that were never cached, were evicted, or have expired.
pub async fn get_page_handler(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Json<PageResponse>> {
    let page = state.cache.get(&title)?;

    Ok(Json(PageResponse::from(page.as_ref())))
}

/// Handler for POST /pages/:title/touch
pub async fn touch_page_handler(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Json<TouchResponse> {
    let refreshed = state.cache.touch(&title);

    Json(TouchResponse::new(title, refreshed))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.cache.stats();

    Json(StatsResponse::new(&stats, state.cache.capacity()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn test_state() -> AppState {
        AppState::new(BoundedExpiringCache::new(2, Duration::from_secs(300)).unwrap())
    }

    fn put_request(title: &str, text: &str) -> Json<PutPageRequest> {
        Json(PutPageRequest {
            title: title.to_string(),
            text: text.to_string(),
        })
    }

    #[tokio::test]
    async fn test_put_and_get_handler() {
        let state = test_state();

        let result = put_page_handler(State(state.clone()), put_request("Ferris", "a crab")).await;
        assert!(result.is_ok());

        let response = get_page_handler(State(state), Path("Ferris".to_string()))
            .await
            .unwrap();
        assert_eq!(response.title, "Ferris");
        assert_eq!(response.text, "a crab");
    }

    #[tokio::test]
    async fn test_get_unknown_page() {
        let result = get_page_handler(State(test_state()), Path("missing".to_string())).await;
        assert!(matches!(result, Err(CacheError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_put_blank_title_rejected() {
        let state = test_state();

        let result = put_page_handler(State(state.clone()), put_request("", "text")).await;
        assert!(matches!(result, Err(CacheError::InvalidRequest(_))));
        assert!(state.cache.is_empty());
    }

    #[tokio::test]
    async fn test_touch_handler() {
        let state = test_state();
        put_page_handler(State(state.clone()), put_request("Ferris", "a crab"))
            .await
            .unwrap();

        let hit = touch_page_handler(State(state.clone()), Path("Ferris".to_string())).await;
        assert!(hit.refreshed);

        let miss = touch_page_handler(State(state), Path("missing".to_string())).await;
        assert!(!miss.refreshed);
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = test_state();
        for title in ["a", "b", "c"] {
            put_page_handler(State(state.clone()), put_request(title, "text"))
                .await
                .unwrap();
        }

        let response = stats_handler(State(state)).await;
        assert_eq!(response.evictions, 1);
        assert_eq!(response.total_entries, 2);
        assert_eq!(response.capacity, 2);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }

    #[test]
    fn test_from_config_rejects_zero_capacity() {
        let config = Config {
            capacity: 0,
            ..Config::default()
        };
        assert!(matches!(
            AppState::from_config(&config),
            Err(CacheError::InvalidConfig(_))
        ));
    }
}
