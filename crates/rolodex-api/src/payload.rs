// SPDX-License-Identifier: Apache-2.0

use rolodex_model::{ContactDraft, ContactFields};
use serde::{Deserialize, Serialize};

/// Inbound body for create and update. The wire contract names the six
/// fields in PascalCase; edit clients also post the row id in the body,
/// which the server ignores (the path parameter is authoritative).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    #[serde(rename = "FirstName", default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(rename = "LastName", default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(rename = "Email", default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "PhoneNumber", default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(rename = "Company", default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(rename = "JobTitle", default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl ContactPayload {
    #[must_use]
    pub fn from_fields(fields: &ContactFields) -> Self {
        Self {
            first_name: Some(fields.first_name.clone()),
            last_name: Some(fields.last_name.clone()),
            email: Some(fields.email.clone()),
            phone_number: Some(fields.phone_number.clone()),
            company: Some(fields.company.clone()),
            job_title: Some(fields.job_title.clone()),
            id: None,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn into_draft(self) -> ContactDraft {
        ContactDraft {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone_number: self.phone_number,
            company: self.company,
            job_title: self.job_title,
        }
    }
}
