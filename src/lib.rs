//! Page Cache - a bounded in-memory object cache
//!
//! Holds at most N objects, evicts the least recently used one when full, and
//! treats objects that have not been refreshed within a TTL as absent.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{BoundedExpiringCache, Identifiable};
pub use config::Config;
pub use error::CacheError;
pub use tasks::spawn_sweeper;
