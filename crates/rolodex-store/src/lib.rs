#![forbid(unsafe_code)]
//! Contact persistence: the `ContactStore` trait, the process-wide SQLite
//! implementation, and an in-memory test double.

use async_trait::async_trait;
use rolodex_model::{Contact, ContactFields};

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

pub const CRATE_NAME: &str = "rolodex-store";

#[derive(Debug)]
pub struct StoreError(pub String);

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::error::Error for StoreError {}

/// Persistent contact storage. One statement per operation; the store's
/// native per-statement transactionality is the only write coordination.
#[async_trait]
pub trait ContactStore: Send + Sync + 'static {
    /// Inserts a new row and returns it with the store-assigned id.
    async fn insert(&self, fields: &ContactFields) -> Result<Contact, StoreError>;
    /// All rows in the store's natural order.
    async fn list(&self) -> Result<Vec<Contact>, StoreError>;
    async fn get(&self, id: i64) -> Result<Option<Contact>, StoreError>;
    /// Overwrites all six descriptive fields; `None` when `id` does not
    /// resolve to a row.
    async fn update(&self, id: i64, fields: &ContactFields)
        -> Result<Option<Contact>, StoreError>;
    /// `true` when a row was removed.
    async fn delete(&self, id: i64) -> Result<bool, StoreError>;
    /// Exact, case-sensitive email match.
    async fn find_by_email(&self, email: &str) -> Result<Option<Contact>, StoreError>;
}
