// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FieldError {
    Empty(&'static str),
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty(name) => write!(f, "{name} must not be empty"),
        }
    }
}

impl std::error::Error for FieldError {}

/// A single address-book record. `id` is assigned by the store on insert and
/// never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Contact {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub company: String,
    pub job_title: String,
}

/// The six descriptive fields of a contact, validated non-empty.
///
/// `phone_number` is free text at this layer; form-level rules (ten digits)
/// live with the clients that enforce them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub company: String,
    pub job_title: String,
}

impl ContactFields {
    pub fn parse(
        first_name: &str,
        last_name: &str,
        email: &str,
        phone_number: &str,
        company: &str,
        job_title: &str,
    ) -> Result<Self, FieldError> {
        if first_name.is_empty() {
            return Err(FieldError::Empty("first_name"));
        }
        if last_name.is_empty() {
            return Err(FieldError::Empty("last_name"));
        }
        if email.is_empty() {
            return Err(FieldError::Empty("email"));
        }
        if phone_number.is_empty() {
            return Err(FieldError::Empty("phone_number"));
        }
        if company.is_empty() {
            return Err(FieldError::Empty("company"));
        }
        if job_title.is_empty() {
            return Err(FieldError::Empty("job_title"));
        }
        Ok(Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            phone_number: phone_number.to_string(),
            company: company.to_string(),
            job_title: job_title.to_string(),
        })
    }

    #[must_use]
    pub fn into_contact(self, id: i64) -> Contact {
        Contact {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone_number: self.phone_number,
            company: self.company,
            job_title: self.job_title,
        }
    }
}

/// Unvalidated form input for create and update. A missing field and an
/// empty field are rejected the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub company: Option<String>,
    pub job_title: Option<String>,
}

impl ContactDraft {
    #[must_use]
    pub fn from_contact(contact: &Contact) -> Self {
        Self {
            first_name: Some(contact.first_name.clone()),
            last_name: Some(contact.last_name.clone()),
            email: Some(contact.email.clone()),
            phone_number: Some(contact.phone_number.clone()),
            company: Some(contact.company.clone()),
            job_title: Some(contact.job_title.clone()),
        }
    }

    pub fn validate(&self) -> Result<ContactFields, FieldError> {
        ContactFields::parse(
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or(""),
            self.email.as_deref().unwrap_or(""),
            self.phone_number.as_deref().unwrap_or(""),
            self.company.as_deref().unwrap_or(""),
            self.job_title.as_deref().unwrap_or(""),
        )
    }
}
