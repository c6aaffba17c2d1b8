pub mod grammar;
pub mod layout;

pub use grammar::LineGrammar;
pub use layout::{BlockLayout, EXTENDED_BLOCK_LINE_COUNT};

use anyhow::Result;

use crate::domain::{OverallLine, StageLine};
use crate::errors::{Grammar, ScrapeError};

/// The preformatted text returned by the results service for one participant
#[derive(Debug, Clone)]
pub struct ResultBlock<'a> {
    participant: &'a str,
    lines: Vec<&'a str>,
    layout: BlockLayout,
}

impl<'a> ResultBlock<'a> {
    pub fn new(participant: &'a str, text: &'a str) -> Self {
        let lines: Vec<&str> = text.split('\n').collect();
        let layout = BlockLayout::for_line_count(lines.len());
        Self {
            participant,
            lines,
            layout,
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn stage_line(&self, grammar: &LineGrammar) -> Result<StageLine> {
        let line = self.line_at(self.layout.stage_line, Grammar::Stage)?;
        grammar
            .parse_stage(line)
            .ok_or_else(|| self.mismatch(Grammar::Stage, line).into())
    }

    pub fn overall_line(&self, grammar: &LineGrammar) -> Result<OverallLine> {
        let line = self.line_at(self.layout.overall_line, Grammar::Overall)?;
        grammar
            .parse_overall(line)
            .ok_or_else(|| self.mismatch(Grammar::Overall, line).into())
    }

    fn line_at(&self, index: usize, grammar: Grammar) -> Result<&'a str, ScrapeError> {
        self.lines
            .get(index)
            .copied()
            .ok_or_else(|| ScrapeError::MissingLine {
                participant: self.participant.to_string(),
                grammar,
                index,
                line_count: self.lines.len(),
            })
    }

    fn mismatch(&self, grammar: Grammar, line: &str) -> ScrapeError {
        ScrapeError::LineMismatch {
            participant: self.participant.to_string(),
            grammar,
            line: line.to_string(),
        }
    }
}
