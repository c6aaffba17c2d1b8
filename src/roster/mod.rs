use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::Path;

use crate::errors::{self, ScrapeError};

/// The pool's participants, in the order they were listed
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    participants: Vec<String>,
}

impl Roster {
    /// Load the roster from a file with one participant per line
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let contents = fs::read_to_string(path).with_context(|| errors::roster_context(&display))?;

        let roster = Self::parse(&contents);
        if roster.is_empty() {
            return Err(ScrapeError::EmptyRoster { path: display }.into());
        }

        info!("Loaded {} participants from {}", roster.len(), display);
        Ok(roster)
    }

    /// Blank and whitespace-only lines are skipped
    pub fn parse(contents: &str) -> Self {
        let participants = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self { participants }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.participants.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Roster {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            participants: iter.into_iter().map(Into::into).collect(),
        }
    }
}
