use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContactsError {
    #[error("{0}")]
    Validation(String),

    /// Carries the id as the caller wrote it.
    #[error("Contact with ID - \"{0}\", was not found.")]
    NotFound(String),

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown action type!{}", quoted_token(.0))]
    UnknownAction(Option<String>),
}

fn quoted_token(token: &Option<String>) -> String {
    match token {
        Some(t) => format!(" (\"{}\")", t),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, ContactsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_id() {
        let err = ContactsError::NotFound("42".into());
        assert_eq!(err.to_string(), "Contact with ID - \"42\", was not found.");
    }

    #[test]
    fn unknown_action_includes_token_when_present() {
        let err = ContactsError::UnknownAction(Some("purge".into()));
        assert_eq!(err.to_string(), "Unknown action type! (\"purge\")");
        let err = ContactsError::UnknownAction(None);
        assert_eq!(err.to_string(), "Unknown action type!");
    }
}
