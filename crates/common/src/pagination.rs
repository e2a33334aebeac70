//! Pagination utilities shared by listing endpoints.
//!
//! Provides a simple `Pagination` struct and helpers to normalize inputs.

use serde::Deserialize;

/// Offset/limit pagination parameters as submitted by a caller.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct Pagination {
    /// maximum number of rows to return
    #[serde(default)]
    pub limit: Option<u64>,
    /// number of rows to skip
    #[serde(default)]
    pub offset: Option<u64>,
}

impl Pagination {
    /// Clamp to sane bounds and fill in defaults.
    pub fn normalize(self) -> (u64, u64) {
        let limit = self.limit.unwrap_or(10).clamp(1, 100);
        let offset = self.offset.unwrap_or(0);
        (limit, offset)
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { limit: None, offset: None } }
}
