// SPDX-License-Identifier: Apache-2.0

use crate::{ApiError, ApiErrorCode};

#[must_use]
pub fn status_for(error: &ApiError) -> u16 {
    match error.code {
        ApiErrorCode::MissingField | ApiErrorCode::DuplicateEmail => 400,
        ApiErrorCode::ContactNotFound => 404,
        _ => 500,
    }
}
