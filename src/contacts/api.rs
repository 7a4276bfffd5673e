//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for contact operations, whatever the UI.
//!
//! It dispatches to `commands/*.rs`, normalizes raw text ids into
//! [`ContactId`]s, and returns `Result<CmdResult>`. It does no printing and
//! holds no state besides the store.
//!
//! `ContactsApi<S: ContactStore>` is generic over the storage backend:
//! `ContactsApi<FileStore>` in production, `ContactsApi<InMemoryStore>` in tests.

use crate::commands;
use crate::error::{ContactsError, Result};
use crate::model::ContactId;
use crate::store::ContactStore;

pub struct ContactsApi<S: ContactStore> {
    store: S,
}

impl<S: ContactStore> ContactsApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list_contacts(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn get_contact_by_id(&self, id: &str) -> Result<commands::CmdResult> {
        let parsed = parse_id(id)?;
        commands::get::run(&self.store, parsed).map_err(|e| with_raw_id(e, id))
    }

    pub fn add_contact(
        &mut self,
        name: &str,
        email: &str,
        phone: &str,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, name, email, phone)
    }

    pub fn remove_contact(&mut self, id: &str) -> Result<commands::CmdResult> {
        let parsed = parse_id(id)?;
        commands::remove::run(&mut self.store, parsed).map_err(|e| with_raw_id(e, id))
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn parse_id(input: &str) -> Result<ContactId> {
    if input.trim().is_empty() {
        return Err(ContactsError::Validation(
            "Contact id should not be empty".to_string(),
        ));
    }
    input.parse().map_err(|_| {
        ContactsError::Validation(format!(
            "Contact id must be a positive integer, got \"{}\"",
            input
        ))
    })
}

/// Not-found errors name the id exactly as it was given, not its normalized form.
fn with_raw_id(error: ContactsError, input: &str) -> ContactsError {
    match error {
        ContactsError::NotFound(_) => ContactsError::NotFound(input.to_string()),
        other => other,
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Contact;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn api_with(count: usize) -> ContactsApi<InMemoryStore> {
        ContactsApi::new(StoreFixture::new().with_contacts(count).store)
    }

    #[test]
    fn list_returns_every_contact() {
        let api = api_with(3);
        assert_eq!(api.list_contacts().unwrap().listed_contacts.len(), 3);
    }

    #[test]
    fn get_treats_padded_text_ids_numerically() {
        let api = api_with(3);
        for input in ["2", "02", " 2 "] {
            let result = api.get_contact_by_id(input).unwrap();
            assert_eq!(result.affected_contacts[0].id, ContactId::new(2));
        }
    }

    #[test]
    fn empty_id_is_a_validation_error() {
        let mut api = api_with(1);
        let err = api.get_contact_by_id("").unwrap_err();
        assert!(matches!(err, ContactsError::Validation(_)));

        let err = api.remove_contact("   ").unwrap_err();
        assert_eq!(err.to_string(), "Contact id should not be empty");
    }

    #[test]
    fn non_numeric_id_is_a_validation_error() {
        let api = api_with(1);
        let err = api.get_contact_by_id("abc").unwrap_err();
        assert!(matches!(err, ContactsError::Validation(ref m) if m.contains("\"abc\"")));
    }

    #[test]
    fn not_found_echoes_the_id_as_typed() {
        let mut api = api_with(1);
        let err = api.get_contact_by_id("02").unwrap_err();
        assert_eq!(err.to_string(), "Contact with ID - \"02\", was not found.");

        let err = api.remove_contact("007").unwrap_err();
        assert!(matches!(err, ContactsError::NotFound(ref raw) if raw == "007"));
    }

    #[test]
    fn fractional_and_exponent_ids_are_rejected() {
        let api = api_with(1);
        for input in ["1.0", "1e0"] {
            let err = api.get_contact_by_id(input).unwrap_err();
            assert!(matches!(err, ContactsError::Validation(_)), "{input}");
        }
    }

    #[test]
    fn add_then_get_round_trips() {
        let mut api = ContactsApi::new(InMemoryStore::new());
        let added = api
            .add_contact("A", "a@x.com", "1")
            .unwrap()
            .affected_contacts
            .remove(0);
        assert_eq!(added, Contact::new(ContactId::new(1), "A", "a@x.com", "1"));

        let fetched = api.get_contact_by_id(&added.id.to_string()).unwrap();
        assert_eq!(fetched.affected_contacts[0], added);
    }

    #[test]
    fn remove_returns_the_id_and_persists() {
        let mut api = api_with(2);
        let result = api.remove_contact("1").unwrap();

        assert_eq!(result.removed_ids, vec![ContactId::new(1)]);
        assert_eq!(api.store().save_count(), 1);
        assert!(matches!(
            api.get_contact_by_id("1").unwrap_err(),
            ContactsError::NotFound(_)
        ));
    }
}
