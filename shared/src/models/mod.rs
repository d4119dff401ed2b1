//! Data models
//!
//! Shared between meal-server and the frontend (via API). Internal
//! entities keep default field casing; API-facing view types are
//! camelCase to match the client contract.

pub mod meal;
pub mod reservation;
pub mod restaurant;
pub mod weather;

// Re-exports
pub use meal::*;
pub use reservation::*;
pub use restaurant::*;
pub use weather::*;
