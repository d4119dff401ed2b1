//! Shared types for the Moliceiro Meals backend
//!
//! Common types used across crates: data models, the unified error
//! system, response structures and small utilities.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
