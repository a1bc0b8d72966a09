#![forbid(unsafe_code)]
//! Contact business rules: field validation, email uniqueness, and CRUD
//! orchestration over a [`ContactStore`].

use rolodex_model::{Contact, ContactDraft};
use rolodex_store::ContactStore;
use std::sync::Arc;

mod error;

pub use error::ServiceError;

pub const CRATE_NAME: &str = "rolodex-service";

pub struct ContactService {
    store: Arc<dyn ContactStore>,
}

impl ContactService {
    #[must_use]
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self { store }
    }

    /// Validates the draft, rejects duplicate emails, and inserts.
    ///
    /// The existence check and the insert are separate statements; two
    /// concurrent creates with the same email can both pass the check, and
    /// only the store's unique index keeps the second from committing.
    pub async fn create(&self, draft: &ContactDraft) -> Result<Contact, ServiceError> {
        let fields = draft
            .validate()
            .map_err(|e| ServiceError::Validation(e.to_string()))?;
        if self.store.find_by_email(&fields.email).await?.is_some() {
            return Err(ServiceError::Conflict(
                "contact with this email already exists".to_string(),
            ));
        }
        Ok(self.store.insert(&fields).await?)
    }

    /// All contacts, store natural order, no filtering.
    pub async fn list(&self) -> Result<Vec<Contact>, ServiceError> {
        Ok(self.store.list().await?)
    }

    /// Overwrites all six fields of an existing contact. Partial updates
    /// are not supported.
    pub async fn update(&self, id: i64, draft: &ContactDraft) -> Result<Contact, ServiceError> {
        let fields = draft
            .validate()
            .map_err(|e| ServiceError::Validation(e.to_string()))?;
        match self.store.update(id, &fields).await? {
            Some(contact) => Ok(contact),
            None => Err(ServiceError::NotFound("contact not found".to_string())),
        }
    }

    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if self.store.delete(id).await? {
            Ok(())
        } else {
            Err(ServiceError::NotFound("contact not found".to_string()))
        }
    }
}
