// SPDX-License-Identifier: Apache-2.0

use crate::{ContactStore, StoreError};
use async_trait::async_trait;
use rolodex_model::{Contact, ContactFields};
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicU64, Ordering};
use tokio::sync::Mutex;

/// In-memory store for tests. Counts calls so tests can assert that
/// validation failures never reach the store, and can be switched into a
/// failing mode to drive the unexpected-error path.
pub struct MemoryStore {
    rows: Mutex<Vec<Contact>>,
    next_id: AtomicI64,
    pub calls: AtomicU64,
    pub fail_all: AtomicBool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
            calls: AtomicU64::new(0),
            fail_all: AtomicBool::new(false),
        }
    }
}

impl MemoryStore {
    fn observe(&self) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        if self.fail_all.load(Ordering::Relaxed) {
            return Err(StoreError("store unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ContactStore for MemoryStore {
    async fn insert(&self, fields: &ContactFields) -> Result<Contact, StoreError> {
        self.observe()?;
        let mut rows = self.rows.lock().await;
        if rows.iter().any(|c| c.email == fields.email) {
            // Mirrors the SQLite unique index on email.
            return Err(StoreError(
                "UNIQUE constraint failed: contacts.email".to_string(),
            ));
        }
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let contact = fields.clone().into_contact(id);
        rows.push(contact.clone());
        Ok(contact)
    }

    async fn list(&self) -> Result<Vec<Contact>, StoreError> {
        self.observe()?;
        Ok(self.rows.lock().await.clone())
    }

    async fn get(&self, id: i64) -> Result<Option<Contact>, StoreError> {
        self.observe()?;
        Ok(self.rows.lock().await.iter().find(|c| c.id == id).cloned())
    }

    async fn update(
        &self,
        id: i64,
        fields: &ContactFields,
    ) -> Result<Option<Contact>, StoreError> {
        self.observe()?;
        let mut rows = self.rows.lock().await;
        match rows.iter_mut().find(|c| c.id == id) {
            Some(row) => {
                *row = fields.clone().into_contact(id);
                Ok(Some(row.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        self.observe()?;
        let mut rows = self.rows.lock().await;
        let before = rows.len();
        rows.retain(|c| c.id != id);
        Ok(rows.len() < before)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Contact>, StoreError> {
        self.observe()?;
        Ok(self
            .rows
            .lock()
            .await
            .iter()
            .find(|c| c.email == email)
            .cloned())
    }
}
