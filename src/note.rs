//! Note records and the identifier generators used to create them.

use serde::Deserialize;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Unique identifier of a note, assigned once at creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NoteId(Uuid);

impl NoteId {
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for NoteId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl Display for NoteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source of identifiers for new notes.
///
/// Sessions own a generator rather than reaching for a global one, so tests can
/// swap in [`SequentialIdGenerator`] and get predictable identifiers.
pub trait IdGenerator {
    fn next_id(&mut self) -> NoteId;
}

/// Random (v4) UUIDs. This is what the binary uses.
#[derive(Debug, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&mut self) -> NoteId {
        NoteId(Uuid::new_v4())
    }
}

/// Counts up from a starting value, one identifier per call.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: u128,
}

impl SequentialIdGenerator {
    #[must_use]
    pub fn starting_at(start: u128) -> Self {
        Self { next: start }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> NoteId {
        let id = NoteId(Uuid::from_u128(self.next));
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// A title/body pair with an identifier that never changes after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Note {
    id: NoteId,
    pub title: String,
    pub body: String,
}

impl Note {
    /// Creates a note with a fresh identifier from `ids`.
    ///
    /// No validation happens here; callers decide what content is acceptable.
    pub fn create(ids: &mut dyn IdGenerator, title: String, body: String) -> Self {
        Self {
            id: ids.next_id(),
            title,
            body,
        }
    }

    #[must_use]
    pub fn id(&self) -> NoteId {
        self.id
    }
}

/// Content used to populate a session when it starts.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct NoteSeed {
    pub title: String,
    pub body: String,
}

impl NoteSeed {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn into_note(self, ids: &mut dyn IdGenerator) -> Note {
        Note::create(ids, self.title, self.body)
    }
}
