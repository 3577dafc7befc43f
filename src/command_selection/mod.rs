//! Reading commands and note indexes from the user.
//!
//! All prompting goes through [`Console`], which wraps any buffered reader and
//! writer so a session can run against stdin/stdout or in-memory buffers.

pub mod input;
pub mod types;

pub use input::Console;
pub use types::{CommandChoice, IndexChoice};

/// Prompt shown before each command is read
pub const COMMAND_PROMPT: &str = "YOU: ";
/// Prompt shown when edit or delete asks which note to use
pub const INDEX_PROMPT: &str = "Index: ";
