use crate::error::{ContactsError, Result};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Store-assigned contact identifier.
///
/// Persisted as a JSON string (`"7"`) but compared as a number, so `"07"`
/// and `7` name the same contact. Text only appears at the serde and
/// command-line edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContactId(u64);

impl ContactId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// Id for a contact appended to `contacts`: the last record's id plus one,
    /// or 1 for an empty collection. Falls back to the largest id plus one if
    /// the collection was reordered by hand and last+1 is already taken.
    /// Fails once the id space is exhausted.
    pub fn next_after(contacts: &[Contact]) -> Result<Self> {
        let exhausted = |after: u64| {
            ContactsError::Validation(format!("No contact id left after \"{}\"", after))
        };

        let candidate = match contacts.last() {
            Some(last) => last.id.0.checked_add(1).ok_or_else(|| exhausted(last.id.0))?,
            None => 1,
        };
        if contacts.iter().any(|c| c.id.0 == candidate) {
            let max = contacts.iter().map(|c| c.id.0).max().unwrap_or(0);
            return max.checked_add(1).map(Self).ok_or_else(|| exhausted(max));
        }
        Ok(Self(candidate))
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ContactId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl Serialize for ContactId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ContactId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct IdVisitor;

        impl Visitor<'_> for IdVisitor {
            type Value = ContactId;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a numeric string or an unsigned integer")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<ContactId, E> {
                Ok(ContactId(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<ContactId, E> {
                u64::try_from(v)
                    .map(ContactId)
                    .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<ContactId, E> {
                v.parse()
                    .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Contact {
    pub fn new(
        id: ContactId,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}
