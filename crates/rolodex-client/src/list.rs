// SPDX-License-Identifier: Apache-2.0

use crate::{ApiClient, ClientError};
use rolodex_model::{Contact, ContactFields};
use tracing::error;

/// Canonical in-memory contact list. Every successful mutation is followed
/// by an unconditional full refetch; the client never patches rows in
/// place, so "last fetch wins" is the only reconciliation rule.
pub struct ContactList {
    client: ApiClient,
    rows: Vec<Contact>,
}

impl ContactList {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            rows: Vec::new(),
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[Contact] {
        &self.rows
    }

    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        match self.client.list_contacts().await {
            Ok(rows) => {
                self.rows = rows;
                Ok(())
            }
            Err(e) => {
                error!("error getting contacts: {e}");
                Err(e)
            }
        }
    }

    pub async fn add(&mut self, fields: &ContactFields) -> Result<Contact, ClientError> {
        let created = match self.client.create_contact(fields).await {
            Ok(contact) => contact,
            Err(e) => {
                error!("error adding contact: {e}");
                return Err(e);
            }
        };
        self.refresh().await?;
        Ok(created)
    }

    pub async fn edit(&mut self, id: i64, fields: &ContactFields) -> Result<Contact, ClientError> {
        let updated = match self.client.update_contact(id, fields).await {
            Ok(contact) => contact,
            Err(e) => {
                error!("error updating contact: {e}");
                return Err(e);
            }
        };
        self.refresh().await?;
        Ok(updated)
    }

    pub async fn remove(&mut self, id: i64) -> Result<(), ClientError> {
        if let Err(e) = self.client.delete_contact(id).await {
            error!("error deleting record: {e}");
            return Err(e);
        }
        self.refresh().await
    }
}
