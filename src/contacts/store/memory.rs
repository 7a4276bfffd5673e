use super::ContactStore;
use crate::error::{ContactsError, Result};
use crate::model::Contact;
use std::io;
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    contacts: Vec<Contact>,
    saves: usize,
    read_only: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            contacts,
            ..Self::default()
        }
    }

    /// Makes every `save` fail with a write error, leaving the contents untouched.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Number of times the collection has been rewritten.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl ContactStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Contact>> {
        Ok(self.contacts.clone())
    }

    fn save(&mut self, contacts: &[Contact]) -> Result<()> {
        if self.read_only {
            return Err(ContactsError::Write {
                path: PathBuf::from("<memory>"),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "store is read-only"),
            });
        }
        self.contacts = contacts.to_vec();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::ContactId;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Appends `count` contacts with consecutive ids continuing the collection.
        pub fn with_contacts(mut self, count: usize) -> Self {
            for _ in 0..count {
                let id = ContactId::next_after(&self.store.contacts).unwrap();
                self.store.contacts.push(Contact::new(
                    id,
                    format!("Contact {}", id),
                    format!("contact{}@example.com", id),
                    format!("555-01{:02}", id.value()),
                ));
            }
            self
        }

        pub fn with_contact(mut self, id: u64, name: &str) -> Self {
            self.store.contacts.push(Contact::new(
                ContactId::new(id),
                name,
                format!("{}@example.com", name.to_lowercase()),
                "555-0199",
            ));
            self
        }
    }
}
