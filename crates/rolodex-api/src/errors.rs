// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ApiErrorCode {
    MissingField,
    DuplicateEmail,
    ContactNotFound,
    Internal,
}

/// An API-level failure. `message` is the exact text the wire contract
/// promises; only the message crosses the wire, in a `{"message": ...}`
/// body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub code: ApiErrorCode,
    pub message: String,
}

impl ApiError {
    #[must_use]
    pub fn new(code: ApiErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn missing_fields() -> Self {
        Self::new(ApiErrorCode::MissingField, "Please provide all fields")
    }

    #[must_use]
    pub fn missing_id() -> Self {
        Self::new(ApiErrorCode::MissingField, "Please provide contact ID")
    }

    #[must_use]
    pub fn duplicate_email() -> Self {
        Self::new(
            ApiErrorCode::DuplicateEmail,
            "Contact with this email already exists",
        )
    }

    #[must_use]
    pub fn not_found() -> Self {
        Self::new(ApiErrorCode::ContactNotFound, "Contact not found")
    }

    #[must_use]
    pub fn internal() -> Self {
        Self::new(ApiErrorCode::Internal, "Server Error")
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
