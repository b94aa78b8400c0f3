use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A single record held by a [`super::RecordCollection`].
///
/// `id` is the primary key. The other fields are plain searchable
/// attributes and may repeat across records.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: u32,
    pub value: u64,
    pub name: String,
    pub description: String,
}

impl Record {
    pub fn new(id: u32, value: u64, name: impl Into<String>, description: impl Into<String>) -> Record {
        Record {
            id,
            value,
            name: name.into(),
            description: description.into(),
        }
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | {} | {} | {}",
            self.id, self.value, self.name, self.description
        )
    }
}

/// Mutable access to the non-key attributes of a stored [`Record`].
///
/// The primary key is readable but cannot be reassigned, so handing this out
/// never puts the index out of step with the storage.
pub struct RecordMut<'a>(&'a mut Record);

impl<'a> RecordMut<'a> {
    pub(super) fn new(record: &'a mut Record) -> RecordMut<'a> {
        RecordMut(record)
    }

    pub fn id(&self) -> u32 {
        self.0.id
    }

    pub fn set_value(&mut self, value: u64) {
        self.0.value = value;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.0.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.0.description = description.into();
    }
}
