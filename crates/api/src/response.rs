//! Shared response types for API handlers.

use serde::Serialize;

/// Confirmation envelope returned by signup and unregister.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
