//! Session defaults and path utilities.
//!
//! With no command-line arguments the session starts with the sample author
//! and notes below and retries invalid indexes for as long as the user keeps
//! entering them.

use crate::note::NoteSeed;

/// Author label used when none is given on the command line
pub const DEFAULT_AUTHOR: &str = "Bob";

/// Notes a session starts with when no seed file is given.
#[must_use]
pub fn sample_notes() -> Vec<NoteSeed> {
    vec![
        NoteSeed::new("Title1", "Hello there, Bob!!"),
        NoteSeed::new("Title2", "More text"),
    ]
}

/// How many times edit and delete re-prompt after an out-of-range index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RetryPolicy {
    #[default]
    Unlimited,
    /// Number of retries allowed after the first attempt.
    Limited(usize),
}

impl RetryPolicy {
    #[must_use]
    pub fn from_max_retries(max_retries: Option<usize>) -> Self {
        match max_retries {
            Some(max) => RetryPolicy::Limited(max),
            None => RetryPolicy::Unlimited,
        }
    }

    /// Whether another attempt may follow `retries_so_far` retries.
    #[must_use]
    pub fn allows_retry(&self, retries_so_far: usize) -> bool {
        match self {
            RetryPolicy::Unlimited => true,
            RetryPolicy::Limited(max) => retries_so_far < *max,
        }
    }
}

/// Everything needed to start a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub author: String,
    pub seed_notes: Vec<NoteSeed>,
    pub retry_policy: RetryPolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            author: DEFAULT_AUTHOR.to_string(),
            seed_notes: sample_notes(),
            retry_policy: RetryPolicy::default(),
        }
    }
}

/// Expands shell variables like `~` in the seed notes path.
pub fn expand_seed_path(seed_path: &str) -> String {
    shellexpand::tilde(seed_path).to_string()
}
