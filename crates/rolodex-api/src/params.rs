use crate::ApiError;

/// Parses the `:id` path parameter. Any value that does not read as an
/// integer is treated as a missing id; resolution of the id against the
/// store (and the 404 that may follow) is the service's concern.
pub fn parse_contact_id(raw: &str) -> Result<i64, ApiError> {
    if raw.is_empty() {
        return Err(ApiError::missing_id());
    }
    raw.parse::<i64>().map_err(|_| ApiError::missing_id())
}
