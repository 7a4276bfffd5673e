use super::ContactStore;
use crate::error::{ContactsError, Result};
use crate::model::Contact;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct FileStore {
    path: PathBuf,
    pretty: bool,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pretty: false,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| ContactsError::Write {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }
        Ok(())
    }
}

impl ContactStore for FileStore {
    fn load(&self) -> Result<Vec<Contact>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "contacts file missing, starting empty");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(ContactsError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let contacts: Vec<Contact> =
            serde_json::from_str(&content).map_err(|source| ContactsError::Parse {
                path: self.path.clone(),
                source,
            })?;
        debug!(path = %self.path.display(), count = contacts.len(), "loaded contacts");
        Ok(contacts)
    }

    fn save(&mut self, contacts: &[Contact]) -> Result<()> {
        self.ensure_parent_dir()?;

        let encoded = if self.pretty {
            serde_json::to_string_pretty(contacts)
        } else {
            serde_json::to_string(contacts)
        };
        let content = encoded.map_err(|e| ContactsError::Write {
            path: self.path.clone(),
            source: e.into(),
        })?;

        fs::write(&self.path, content).map_err(|source| ContactsError::Write {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), count = contacts.len(), "saved contacts");
        Ok(())
    }
}
