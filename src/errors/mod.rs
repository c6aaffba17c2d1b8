use thiserror::Error;

/// Failures that abort a report run
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Invalid date '{input}' for stage. Must be YYYYMMDD.")]
    InvalidDate { input: String },

    #[error("No participants found in roster {path}")]
    EmptyRoster { path: String },

    #[error("Results service returned {status} for participant '{participant}' ({url})")]
    Transport {
        participant: String,
        status: u16,
        url: String,
    },

    #[error("No preformatted results block in response for participant '{participant}'")]
    MissingBlock { participant: String },

    #[error("Results block for participant '{participant}' has no {grammar} line at index {index} ({line_count} lines)")]
    MissingLine {
        participant: String,
        grammar: Grammar,
        index: usize,
        line_count: usize,
    },

    #[error("{grammar} line for participant '{participant}' did not match: {line:?}")]
    LineMismatch {
        participant: String,
        grammar: Grammar,
        line: String,
    },
}

/// The two fixed line formats found in a results block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
    Stage,
    Overall,
}

impl std::fmt::Display for Grammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Grammar::Stage => write!(f, "stage result"),
            Grammar::Overall => write!(f, "overall result"),
        }
    }
}

/// Add context to fetch errors
pub fn fetch_context(participant: &str, url: &str) -> String {
    format!("Failed to fetch results for '{}' from: {}", participant, url)
}

/// Add context to roster errors
pub fn roster_context(path: &str) -> String {
    format!("Failed to read roster file: {}", path)
}

impl ScrapeError {
    /// Process exit code for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            ScrapeError::InvalidDate { .. } => 2,
            _ => 1,
        }
    }
}
