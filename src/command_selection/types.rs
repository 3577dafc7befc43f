//! Type definitions for the choices a user makes at the prompts.

use std::fmt::{Display, Formatter};
use std::num::IntErrorKind;

/// One of the commands accepted at the `YOU: ` prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandChoice {
    AddNote,
    EditNote,
    DeleteNote,
    DisplayNotes,
}

impl CommandChoice {
    /// All commands in the order they are listed in the banner.
    pub const ALL: [CommandChoice; 4] = [
        CommandChoice::AddNote,
        CommandChoice::EditNote,
        CommandChoice::DeleteNote,
        CommandChoice::DisplayNotes,
    ];

    /// Matches a raw input line against the command keys.
    ///
    /// The match is exact, so `" 1"` or `"1 "` is not a command.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|choice| choice.key() == input)
    }

    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            CommandChoice::AddNote => "1",
            CommandChoice::EditNote => "2",
            CommandChoice::DeleteNote => "3",
            CommandChoice::DisplayNotes => "4",
        }
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            CommandChoice::AddNote => "Add new note",
            CommandChoice::EditNote => "Edit note",
            CommandChoice::DeleteNote => "Delete note",
            CommandChoice::DisplayNotes => "Display all notes",
        }
    }
}

impl Display for CommandChoice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.key(), self.description())
    }
}

/// Result of reading a 1-based note index against the current list length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexChoice {
    /// 0-based position of an existing note.
    Position(usize),
    /// A number, but not one that names a note.
    OutOfRange,
    /// Not a number at all (including empty input).
    Unparseable,
}

impl IndexChoice {
    /// Converts user input to a 0-based position in a list of `len` notes.
    ///
    /// Surrounding whitespace, a leading sign and single `_` separators between
    /// digits (`1_0`) are accepted. Numbers too large to represent count as out
    /// of range rather than unparseable.
    #[must_use]
    pub fn parse(input: &str, len: usize) -> Self {
        let Some(digits) = strip_digit_separators(input.trim()) else {
            return IndexChoice::Unparseable;
        };

        let number = match digits.parse::<i64>() {
            Ok(number) => number,
            Err(e) => {
                return match e.kind() {
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                        IndexChoice::OutOfRange
                    }
                    _ => IndexChoice::Unparseable,
                }
            }
        };

        let position = number
            .checked_sub(1)
            .and_then(|position| usize::try_from(position).ok());

        match position {
            Some(position) if position < len => IndexChoice::Position(position),
            _ => IndexChoice::OutOfRange,
        }
    }
}

/// Removes `_` separators, or returns `None` if one is not between two digits.
fn strip_digit_separators(input: &str) -> Option<String> {
    let bytes = input.as_bytes();
    let mut stripped = String::with_capacity(input.len());

    for (i, c) in input.char_indices() {
        if c != '_' {
            stripped.push(c);
            continue;
        }

        let after_digit = i > 0 && bytes[i - 1].is_ascii_digit();
        let before_digit = bytes.get(i + 1).is_some_and(u8::is_ascii_digit);
        if !(after_digit && before_digit) {
            return None;
        }
    }

    Some(stripped)
}
