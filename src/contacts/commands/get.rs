use crate::commands::CmdResult;
use crate::error::{ContactsError, Result};
use crate::model::{Contact, ContactId};
use crate::store::ContactStore;

/// First contact in `store` whose id equals `id`.
pub fn find<S: ContactStore>(store: &S, id: ContactId) -> Result<Contact> {
    store
        .load()?
        .into_iter()
        .find(|c| c.id == id)
        .ok_or_else(|| ContactsError::NotFound(id.to_string()))
}

pub fn run<S: ContactStore>(store: &S, id: ContactId) -> Result<CmdResult> {
    let contact = find(store, id)?;
    Ok(CmdResult::default().with_affected_contacts(vec![contact]))
}
