//! # Storage Layer
//!
//! The whole contact collection lives in one JSON document. Every operation
//! reads it in full and every mutation rewrites it in full, so the storage
//! interface is just [`ContactStore::load`] and [`ContactStore::save`].
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, a JSON array in a single file
//!   (`db/contacts.json` by default). A missing or blank file reads as an
//!   empty collection.
//! - [`memory::InMemoryStore`]: keeps the collection in a `Vec`, for tests.
//!
//! ## Storage Format
//!
//! ```text
//! [{"id":"1","name":"Ada","email":"ada@example.com","phone":"555-0100"}, ...]
//! ```
//!
//! Ids are written as strings; see [`crate::model::ContactId`].
//!
//! There is no locking. Two processes mutating the same file race and the
//! last writer wins.

use crate::error::Result;
use crate::model::Contact;

pub mod fs;
pub mod memory;

/// Abstract interface for the persisted contact collection.
pub trait ContactStore {
    /// Read the full collection, in insertion order.
    fn load(&self) -> Result<Vec<Contact>>;

    /// Replace the full collection.
    fn save(&mut self, contacts: &[Contact]) -> Result<()>;
}
