#![forbid(unsafe_code)]
//! Wire contract shared by the rolodex server and clients: inbound payload
//! shape, error taxonomy, and the error-to-status mapping.

mod error_mapping;
mod errors;
mod params;
mod payload;

pub use error_mapping::status_for;
pub use errors::{ApiError, ApiErrorCode};
pub use params::parse_contact_id;
pub use payload::ContactPayload;

pub const CRATE_NAME: &str = "rolodex-api";

/// Base path of the contacts resource.
pub const CONTACTS_PATH: &str = "/api/v1/contacts";
