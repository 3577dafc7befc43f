//! The interactive note session.
//!
//! A [`Session`] owns the notes and the console. [`Session::run`] prints the
//! instructions and then reads and dispatches commands until the input ends.

use std::io::{BufRead, Write};

use log::{debug, info, warn};

use crate::command_selection::{
    CommandChoice, Console, IndexChoice, COMMAND_PROMPT, INDEX_PROMPT,
};
use crate::config::{RetryPolicy, SessionConfig};
use crate::error::{Error, Result};
use crate::note::{IdGenerator, Note};

const ABORTING: &str = "Aborting operation...";

pub struct Session<R, W> {
    author: String,
    notes: Vec<Note>,
    ids: Box<dyn IdGenerator>,
    retry_policy: RetryPolicy,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Builds a session from `config`, creating the seed notes with `ids`.
    pub fn new(
        config: SessionConfig,
        mut ids: Box<dyn IdGenerator>,
        console: Console<R, W>,
    ) -> Self {
        let notes = config
            .seed_notes
            .into_iter()
            .map(|seed| seed.into_note(&mut *ids))
            .collect();

        Self {
            author: config.author,
            notes,
            ids,
            retry_policy: config.retry_policy,
            console,
        }
    }

    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    #[must_use]
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Prints the welcome banner and the list of commands.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn display_instructions(&mut self) -> Result<()> {
        self.console.say("Welcome To Notes!")?;
        self.console.say("Here are the commands:")?;
        for choice in CommandChoice::ALL {
            self.console.say(choice)?;
        }
        Ok(())
    }

    /// Runs the command loop until the input is closed.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing the console fails. Running out of
    /// input is not an error.
    pub fn run(&mut self) -> Result<()> {
        info!(
            "Starting notes session for `{}` with {} notes",
            self.author,
            self.notes.len()
        );
        self.display_instructions()?;

        loop {
            match self.step() {
                Ok(()) => {}
                Err(Error::InputClosed) => {
                    info!("Input closed, ending session with {} notes", self.notes.len());
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn step(&mut self) -> Result<()> {
        let user_input = self.console.prompt(COMMAND_PROMPT)?;
        self.select_option(&user_input)
    }

    /// Runs the operation named by `user_input`, or complains if there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails while the operation runs.
    pub fn select_option(&mut self, user_input: &str) -> Result<()> {
        let Some(choice) = CommandChoice::parse(user_input) else {
            debug!("Unrecognized command `{}`", user_input);
            return self.console.say("Please pick a valid option.");
        };

        match choice {
            CommandChoice::AddNote => self.add_note(),
            CommandChoice::EditNote => self.edit_note(),
            CommandChoice::DeleteNote => self.delete_note(),
            CommandChoice::DisplayNotes => self.show_notes(),
        }
    }

    /// Asks for a title and body and appends a new note.
    ///
    /// Only a note with both fields empty is rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails.
    pub fn add_note(&mut self) -> Result<()> {
        let title = self.console.prompt("Title: ")?;
        let body = self.console.prompt("Body: ")?;

        if title.is_empty() && body.is_empty() {
            return self.console.say("You have to enter a real value.");
        }

        let note = Note::create(&mut *self.ids, title, body);
        debug!("Adding note {}", note.id());
        self.notes.push(note);

        self.console.say("Note was added!")
    }

    /// Lets the user pick a note and replaces its title and body.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails.
    pub fn edit_note(&mut self) -> Result<()> {
        let Some(position) = self.select_index("edit")? else {
            return Ok(());
        };

        let new_title = self.console.prompt("New Title: ")?;
        let new_body = self.console.prompt("New Body: ")?;

        let note = &mut self.notes[position];
        note.title = new_title;
        note.body = new_body;
        debug!("Updated note {} at position {}", note.id(), position + 1);

        self.console.say("Note was updated!")
    }

    /// Lets the user pick a note and removes it.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails.
    pub fn delete_note(&mut self) -> Result<()> {
        let Some(position) = self.select_index("delete")? else {
            return Ok(());
        };

        let removed = self.notes.remove(position);
        debug!("Deleted note {} at position {}", removed.id(), position + 1);

        self.console.say("Note was deleted!")
    }

    /// Prints every note with its 1-based position.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn show_notes(&mut self) -> Result<()> {
        if self.notes.is_empty() {
            return self.console.say("No notes...");
        }

        for (index, note) in self.notes.iter().enumerate() {
            self.console
                .say(format_args!("[{}] {}: {}", index + 1, note.title, note.body))?;
        }

        Ok(())
    }

    /// Shows the notes and reads an index until it names a note.
    ///
    /// Returns `None` when the operation should be abandoned, either because the
    /// input was not a number or because the retry policy ran out.
    fn select_index(&mut self, action: &str) -> Result<Option<usize>> {
        let mut retries = 0;

        loop {
            self.console
                .say(format_args!("Which note would you like to {action}?"))?;
            self.show_notes()?;

            let input = self.console.prompt(INDEX_PROMPT)?;
            match IndexChoice::parse(&input, self.notes.len()) {
                IndexChoice::Position(position) => return Ok(Some(position)),
                IndexChoice::Unparseable => {
                    self.console.say("Index cannot be empty...")?;
                    self.console.say(ABORTING)?;
                    return Ok(None);
                }
                IndexChoice::OutOfRange => {
                    self.console.say("Please select a valid index...")?;

                    if !self.retry_policy.allows_retry(retries) {
                        warn!("Giving up on {} after {} retries", action, retries);
                        self.console.say(ABORTING)?;
                        return Ok(None);
                    }

                    retries += 1;
                    debug!(
                        "Index `{}` out of range, retry {} for {}",
                        input, retries, action
                    );
                }
            }
        }
    }
}
