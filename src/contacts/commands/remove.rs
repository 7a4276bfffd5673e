use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ContactId;
use crate::store::ContactStore;
use tracing::info;

use super::get;

pub fn run<S: ContactStore>(store: &mut S, id: ContactId) -> Result<CmdResult> {
    let removed = get::find(store, id)?;

    let remaining: Vec<_> = store
        .load()?
        .into_iter()
        .filter(|c| c.id != id)
        .collect();
    store.save(&remaining)?;
    info!(%id, "contact removed");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact with ID - \"{}\", was successfully deleted.",
        id
    )));
    Ok(result
        .with_affected_contacts(vec![removed])
        .with_removed_ids(vec![id]))
}
