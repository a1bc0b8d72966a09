// SPDX-License-Identifier: Apache-2.0

use rolodex_store::StoreError;

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ServiceError {
    Validation(String),
    Conflict(String),
    NotFound(String),
    Store(String),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(msg)
            | Self::Conflict(msg)
            | Self::NotFound(msg)
            | Self::Store(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        // The unique index on contacts.email backstops the service's
        // check-then-insert window; a constraint failure is a conflict,
        // not an internal error.
        if value.0.contains("UNIQUE constraint failed: contacts.email") {
            Self::Conflict("contact with this email already exists".to_string())
        } else {
            Self::Store(value.0)
        }
    }
}
