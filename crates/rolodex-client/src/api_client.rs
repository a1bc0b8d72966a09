// SPDX-License-Identifier: Apache-2.0

use reqwest::{Client, StatusCode};
use rolodex_api::{ContactPayload, CONTACTS_PATH};
use rolodex_model::{Contact, ContactFields};
use tracing::error;

/// Environment variable naming the externally reachable API base URL.
pub const API_URL_ENV: &str = "ROLODEX_API_URL";

#[derive(Debug)]
pub struct ClientError(pub String);

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::error::Error for ClientError {}

/// HTTP client for the contacts API. Every method checks for the 200
/// success path and reports anything else as a [`ClientError`]; callers
/// log failures and surface no further state.
#[derive(Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Reads the base URL from `ROLODEX_API_URL`. When it is unset the
    /// call is aborted up front, matching the form handlers that refuse
    /// to fire without a configured host.
    pub fn from_env() -> Result<Self, ClientError> {
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Ok(Self::new(url)),
            _ => {
                error!("{API_URL_ENV} is not set; aborting API call");
                Err(ClientError(format!("{API_URL_ENV} is not set")))
            }
        }
    }

    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn contacts_url(&self) -> String {
        format!("{}{CONTACTS_PATH}", self.base_url)
    }

    fn contact_url(&self, id: i64) -> String {
        format!("{}{CONTACTS_PATH}/{id}", self.base_url)
    }

    pub async fn list_contacts(&self) -> Result<Vec<Contact>, ClientError> {
        let url = self.contacts_url();
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError(e.to_string()))?;
        if resp.status() != StatusCode::OK {
            return Err(ClientError(format!("GET {url} returned {}", resp.status())));
        }
        resp.json::<Vec<Contact>>()
            .await
            .map_err(|e| ClientError(e.to_string()))
    }

    pub async fn create_contact(&self, fields: &ContactFields) -> Result<Contact, ClientError> {
        let url = self.contacts_url();
        let resp = self
            .http
            .post(&url)
            .json(&ContactPayload::from_fields(fields))
            .send()
            .await
            .map_err(|e| ClientError(e.to_string()))?;
        if resp.status() != StatusCode::OK {
            return Err(ClientError(format!(
                "POST {url} returned {}",
                resp.status()
            )));
        }
        resp.json::<Contact>()
            .await
            .map_err(|e| ClientError(e.to_string()))
    }

    pub async fn update_contact(
        &self,
        id: i64,
        fields: &ContactFields,
    ) -> Result<Contact, ClientError> {
        let url = self.contact_url(id);
        // The edit form also posts the row id in the body; the server
        // ignores it in favour of the path parameter.
        let resp = self
            .http
            .put(&url)
            .json(&ContactPayload::from_fields(fields).with_id(id))
            .send()
            .await
            .map_err(|e| ClientError(e.to_string()))?;
        if resp.status() != StatusCode::OK {
            return Err(ClientError(format!("PUT {url} returned {}", resp.status())));
        }
        resp.json::<Contact>()
            .await
            .map_err(|e| ClientError(e.to_string()))
    }

    pub async fn delete_contact(&self, id: i64) -> Result<(), ClientError> {
        let url = self.contact_url(id);
        let resp = self
            .http
            .delete(&url)
            .send()
            .await
            .map_err(|e| ClientError(e.to_string()))?;
        if resp.status() != StatusCode::OK {
            return Err(ClientError(format!(
                "DELETE {url} returned {}",
                resp.status()
            )));
        }
        Ok(())
    }
}
