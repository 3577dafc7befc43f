//! Command-line argument parsing.
//!
//! Every argument is optional. Without any, the session starts with the
//! default author and sample notes.

use clap::Parser;

use crate::config::{expand_seed_path, RetryPolicy, SessionConfig, DEFAULT_AUTHOR};
use crate::error::Result;
use crate::file_handling;

/// Command-line arguments for the `notes` binary.
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Author label for this session.
    #[arg(long, short = 'a', default_value = DEFAULT_AUTHOR)]
    pub author: String,

    /// Path to a YAML file with the notes to start with.
    ///
    /// Replaces the sample notes. The file is only read, never written.
    #[arg(long, short = 's')]
    pub seed_path: Option<String>,

    /// Start without the sample notes.
    ///
    /// Has no effect when `--seed-path` is given.
    #[arg(long, short = 'n', action)]
    pub no_samples: bool,

    /// Give up on edit or delete after this many invalid indexes.
    ///
    /// If not provided, the index is asked for until a usable one is entered.
    #[arg(long, short = 'r')]
    pub max_index_retries: Option<usize>,
}

impl Args {
    /// Builds the session configuration, reading the seed file if one was given.
    ///
    /// # Errors
    ///
    /// Returns an error if the seed file cannot be read or parsed.
    pub fn session_config(&self) -> Result<SessionConfig> {
        let mut config = SessionConfig {
            author: self.author.clone(),
            retry_policy: RetryPolicy::from_max_retries(self.max_index_retries),
            ..SessionConfig::default()
        };

        if let Some(seed_path) = &self.seed_path {
            config.seed_notes = file_handling::get_seed_notes(&expand_seed_path(seed_path))?;
        } else if self.no_samples {
            config.seed_notes.clear();
        }

        Ok(config)
    }
}
