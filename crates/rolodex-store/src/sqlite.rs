// SPDX-License-Identifier: Apache-2.0

use crate::{ContactStore, StoreError};
use async_trait::async_trait;
use rolodex_model::{Contact, ContactFields};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use tokio::sync::Mutex;

// AUTOINCREMENT keeps deleted ids retired, so a created contact always gets
// an id never seen before. The unique index on email backstops the
// service's pre-insert existence check.
const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS contacts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    phone_number TEXT NOT NULL,
    company TEXT NOT NULL,
    job_title TEXT NOT NULL
);";

const COLUMNS: &str = "id, first_name, last_name, email, phone_number, company, job_title";

fn contact_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Contact> {
    Ok(Contact {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        email: row.get(3)?,
        phone_number: row.get(4)?,
        company: row.get(5)?,
        job_title: row.get(6)?,
    })
}

/// Process-wide SQLite handle. Opened once at startup, injected into the
/// service, and closed explicitly on shutdown.
pub struct SqliteStore {
    conn: Mutex<Option<Connection>>,
}

impl SqliteStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let conn = Connection::open(path).map_err(|e| StoreError(e.to_string()))?;
        Self::bootstrap(conn)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(|e| StoreError(e.to_string()))?;
        Self::bootstrap(conn)
    }

    fn bootstrap(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(SCHEMA)
            .map_err(|e| StoreError(e.to_string()))?;
        Ok(Self {
            conn: Mutex::new(Some(conn)),
        })
    }

    /// Releases the connection. Any operation after `close` fails with a
    /// closed-store error.
    pub async fn close(&self) -> Result<(), StoreError> {
        let mut guard = self.conn.lock().await;
        match guard.take() {
            Some(conn) => conn
                .close()
                .map_err(|(_, e)| StoreError(e.to_string())),
            None => Ok(()),
        }
    }
}

fn closed() -> StoreError {
    StoreError("contacts store is closed".to_string())
}

#[async_trait]
impl ContactStore for SqliteStore {
    async fn insert(&self, fields: &ContactFields) -> Result<Contact, StoreError> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(closed)?;
        let mut stmt = conn
            .prepare_cached(
                "INSERT INTO contacts (first_name, last_name, email, phone_number, company, job_title) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6) \
                 RETURNING id, first_name, last_name, email, phone_number, company, job_title",
            )
            .map_err(|e| StoreError(e.to_string()))?;
        stmt.query_row(
            params![
                fields.first_name,
                fields.last_name,
                fields.email,
                fields.phone_number,
                fields.company,
                fields.job_title
            ],
            contact_from_row,
        )
        .map_err(|e| StoreError(e.to_string()))
    }

    async fn list(&self) -> Result<Vec<Contact>, StoreError> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(closed)?;
        let mut stmt = conn
            .prepare_cached(&format!("SELECT {COLUMNS} FROM contacts"))
            .map_err(|e| StoreError(e.to_string()))?;
        let mapped = stmt
            .query_map([], contact_from_row)
            .map_err(|e| StoreError(e.to_string()))?;
        mapped
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| StoreError(e.to_string()))
    }

    async fn get(&self, id: i64) -> Result<Option<Contact>, StoreError> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(closed)?;
        let mut stmt = conn
            .prepare_cached(&format!("SELECT {COLUMNS} FROM contacts WHERE id = ?1"))
            .map_err(|e| StoreError(e.to_string()))?;
        stmt.query_row(params![id], contact_from_row)
            .optional()
            .map_err(|e| StoreError(e.to_string()))
    }

    async fn update(
        &self,
        id: i64,
        fields: &ContactFields,
    ) -> Result<Option<Contact>, StoreError> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(closed)?;
        let mut stmt = conn
            .prepare_cached(
                "UPDATE contacts SET first_name = ?1, last_name = ?2, email = ?3, \
                 phone_number = ?4, company = ?5, job_title = ?6 WHERE id = ?7 \
                 RETURNING id, first_name, last_name, email, phone_number, company, job_title",
            )
            .map_err(|e| StoreError(e.to_string()))?;
        stmt.query_row(
            params![
                fields.first_name,
                fields.last_name,
                fields.email,
                fields.phone_number,
                fields.company,
                fields.job_title,
                id
            ],
            contact_from_row,
        )
        .optional()
        .map_err(|e| StoreError(e.to_string()))
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(closed)?;
        let affected = conn
            .execute("DELETE FROM contacts WHERE id = ?1", params![id])
            .map_err(|e| StoreError(e.to_string()))?;
        Ok(affected > 0)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Contact>, StoreError> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(closed)?;
        let mut stmt = conn
            .prepare_cached(&format!("SELECT {COLUMNS} FROM contacts WHERE email = ?1"))
            .map_err(|e| StoreError(e.to_string()))?;
        stmt.query_row(params![email], contact_from_row)
            .optional()
            .map_err(|e| StoreError(e.to_string()))
    }
}
