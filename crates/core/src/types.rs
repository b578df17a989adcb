use uuid::Uuid;

use crate::error::CoreError;

/// Record identifiers are store-generated UUIDs.
pub type DbId = Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Parse a path segment into a [`DbId`].
///
/// The API treats identifiers as opaque strings; the only thing checked here
/// is that the segment has the store's identifier format. Anything else is
/// reported as [`CoreError::InvalidIdentifier`] so callers can answer 400
/// before touching the store.
pub fn parse_id(raw: &str) -> Result<DbId, CoreError> {
    Uuid::parse_str(raw.trim())
        .map_err(|_| CoreError::InvalidIdentifier(format!("'{raw}' is not a valid project id")))
}
