use crate::args::Cli;
use contacts::api::{CmdResult, ContactsApi};
use contacts::error::{ContactsError, Result};
use contacts::store::ContactStore;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    Get,
    Add,
    Remove,
}

impl FromStr for Action {
    type Err = ContactsError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "list" => Ok(Action::List),
            "get" => Ok(Action::Get),
            "add" => Ok(Action::Add),
            "remove" => Ok(Action::Remove),
            other => Err(ContactsError::UnknownAction(Some(other.to_string()))),
        }
    }
}

/// Maps the parsed action to exactly one store operation.
///
/// Unknown or missing actions fail before the store is touched.
pub fn invoke_action<S: ContactStore>(
    api: &mut ContactsApi<S>,
    cli: &Cli,
) -> Result<(Action, CmdResult)> {
    let action: Action = cli
        .action
        .as_deref()
        .ok_or(ContactsError::UnknownAction(None))?
        .parse()?;
    debug!(?action, "dispatching");

    let id = cli.id.as_deref().unwrap_or_default();
    let result = match action {
        Action::List => api.list_contacts()?,
        Action::Get => api.get_contact_by_id(id)?,
        Action::Add => api.add_contact(
            cli.name.as_deref().unwrap_or_default(),
            cli.email.as_deref().unwrap_or_default(),
            cli.phone.as_deref().unwrap_or_default(),
        )?,
        Action::Remove => api.remove_contact(id)?,
    };
    Ok((action, result))
}
