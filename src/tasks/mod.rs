//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Expiry sweep: reclaims expired cache entries at configured intervals

mod sweeper;

pub use sweeper::spawn_sweeper;
