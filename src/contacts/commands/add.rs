use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ContactsError, Result};
use crate::model::{Contact, ContactId};
use crate::store::ContactStore;
use tracing::info;

fn require(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ContactsError::Validation(format!(
            "Contact {} should not be empty",
            field
        )));
    }
    Ok(())
}

pub fn run<S: ContactStore>(
    store: &mut S,
    name: &str,
    email: &str,
    phone: &str,
) -> Result<CmdResult> {
    require("name", name)?;
    require("email", email)?;
    require("phone", phone)?;

    let mut contacts = store.load()?;
    let contact = Contact::new(ContactId::next_after(&contacts)?, name, email, phone);
    contacts.push(contact.clone());
    store.save(&contacts)?;
    info!(id = %contact.id, "contact added");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact added with ID - \"{}\".",
        contact.id
    )));
    Ok(result.with_affected_contacts(vec![contact]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{get, list};
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn first_contact_gets_id_one() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "A", "a@x.com", "1").unwrap();

        assert_eq!(result.affected_contacts[0].id, ContactId::new(1));
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn appends_after_last_contact() {
        let mut fixture = StoreFixture::new().with_contact(1, "A");
        let result = run(&mut fixture.store, "B", "b@x.com", "2").unwrap();

        assert_eq!(
            result.affected_contacts[0],
            Contact::new(ContactId::new(2), "B", "b@x.com", "2")
        );
        let listed = list::run(&fixture.store).unwrap().listed_contacts;
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[1].name, "B");
    }

    #[test]
    fn added_contact_can_be_fetched() {
        let mut fixture = StoreFixture::new().with_contacts(4);
        let added = run(&mut fixture.store, "Grace", "grace@example.com", "555-0199")
            .unwrap()
            .affected_contacts
            .remove(0);

        let fetched = get::find(&fixture.store, added.id).unwrap();
        assert_eq!(fetched, added);
    }

    #[test]
    fn write_failure_propagates_and_keeps_prior_contents() {
        let seeded = StoreFixture::new().with_contacts(2).store;
        let before = seeded.load().unwrap();
        let mut store = InMemoryStore::with_contacts(before.clone()).read_only();

        let err = run(&mut store, "C", "c@x.com", "3").unwrap_err();

        assert!(matches!(err, ContactsError::Write { .. }));
        assert_eq!(store.load().unwrap(), before);
    }

    #[test]
    fn exhausted_id_space_is_reported_without_saving() {
        let mut store = InMemoryStore::with_contacts(vec![Contact::new(
            ContactId::new(u64::MAX),
            "Last",
            "last@x.com",
            "9",
        )]);

        let err = run(&mut store, "B", "b@x.com", "2").unwrap_err();

        assert!(matches!(err, ContactsError::Validation(_)));
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn reports_first_empty_field() {
        let mut store = InMemoryStore::new();

        let err = run(&mut store, "", "", "").unwrap_err();
        assert_eq!(err.to_string(), "Contact name should not be empty");

        let err = run(&mut store, "A", "", "").unwrap_err();
        assert_eq!(err.to_string(), "Contact email should not be empty");

        let err = run(&mut store, "A", "a@x.com", "").unwrap_err();
        assert!(matches!(err, ContactsError::Validation(_)));
        assert_eq!(err.to_string(), "Contact phone should not be empty");

        assert_eq!(store.save_count(), 0);
    }
}
