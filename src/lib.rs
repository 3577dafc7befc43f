//! Notes CLI Library
//!
//! An interactive, in-memory note taker. A session keeps an ordered list of
//! notes for as long as the process runs and lets the user add, edit, delete
//! and list them with single-character commands.
//!
//! # Architecture
//!
//! - [`note`]: the note record and identifier generators
//! - [`session`]: the command loop and the four note operations
//! - [`command_selection`]: console prompting and parsing of user choices
//! - [`config`], [`cli_args`], [`file_handling`]: startup configuration
//! - [`error`]: error type shared by all of the above
//!
//! # Examples
//!
//! Running a session against in-memory input:
//!
//! ```
//! use std::io::Cursor;
//! use notes_cli::command_selection::Console;
//! use notes_cli::config::SessionConfig;
//! use notes_cli::note::SequentialIdGenerator;
//! use notes_cli::session::Session;
//!
//! let console = Console::new(Cursor::new(b"3\n1\n".to_vec()), Vec::new());
//! let mut session = Session::new(
//!     SessionConfig::default(),
//!     Box::new(SequentialIdGenerator::default()),
//!     console,
//! );
//! session.run()?;
//!
//! assert_eq!(session.notes().len(), 1);
//! assert_eq!(session.notes()[0].title, "Title2");
//! # Ok::<(), notes_cli::error::Error>(())
//! ```

pub mod cli_args;
pub mod command_selection;
pub mod config;
pub mod error;
pub mod file_handling;
pub mod note;
pub mod session;
