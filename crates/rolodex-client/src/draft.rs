// SPDX-License-Identifier: Apache-2.0

use rolodex_model::{ContactDraft, ContactFields};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DraftError {
    MissingFields,
    InvalidPhoneNumber,
}

impl std::fmt::Display for DraftError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFields => f.write_str("all fields are required"),
            Self::InvalidPhoneNumber => f.write_str("phone number should be 10 digits long"),
        }
    }
}

impl std::error::Error for DraftError {}

/// Add-form rules: every field present and the phone number exactly ten
/// digits.
pub fn validate_new_draft(draft: &ContactDraft) -> Result<ContactFields, DraftError> {
    let fields = draft.validate().map_err(|_| DraftError::MissingFields)?;
    if fields.phone_number.len() != 10 || !fields.phone_number.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(DraftError::InvalidPhoneNumber);
    }
    Ok(fields)
}

/// Edit-form rules: the edit form checks only the length of the phone
/// number, not that it is numeric.
pub fn validate_edit_draft(draft: &ContactDraft) -> Result<ContactFields, DraftError> {
    let fields = draft.validate().map_err(|_| DraftError::MissingFields)?;
    if fields.phone_number.len() != 10 {
        return Err(DraftError::InvalidPhoneNumber);
    }
    Ok(fields)
}
