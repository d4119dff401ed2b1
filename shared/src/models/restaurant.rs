//! Restaurant Model

use serde::{Deserialize, Serialize};

/// Restaurant entity
///
/// Owned by the catalog; the reservation engine only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub description: String,
}
