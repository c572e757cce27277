//! Request and Response models for the page cache API
//!
//! This module defines the cached `Page` type and the DTOs used for
//! serializing/deserializing HTTP request and response bodies.

pub mod page;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use page::Page;
pub use requests::PutPageRequest;
pub use responses::{
    ErrorResponse, HealthResponse, PageResponse, PutPageResponse, StatsResponse, TouchResponse,
};
