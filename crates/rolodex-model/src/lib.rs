#![forbid(unsafe_code)]
//! Rolodex domain model SSOT.

mod contact;

pub use contact::{Contact, ContactDraft, ContactFields, FieldError};

pub const CRATE_NAME: &str = "rolodex-model";
