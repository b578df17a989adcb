//! Shared response body types for API handlers.

use serde::Serialize;

/// `{ "message": ... }` body for confirmations and informational replies.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
