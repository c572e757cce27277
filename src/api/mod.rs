//! API Module
//!
//! HTTP handlers and routing for the page cache REST API.
//!
//! # Endpoints
//! - `PUT /pages` - Cache a page
//! - `GET /pages/:title` - Read a cached page
//! - `POST /pages/:title/touch` - Restart a page's TTL
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
