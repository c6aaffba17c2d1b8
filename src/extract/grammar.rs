use anyhow::{Context, Result};
use regex::{Captures, Regex};
use std::str::FromStr;

use crate::domain::{OverallLine, StageLine};

const STAGE_RESULT_PATTERN: &str =
    r"^\s*(?P<stage_rank>\d+)\.\s*(?P<stage_points>\d+) (?P<name>.+) \((?P<country>[^()]*)\)$";

const OVERALL_RESULT_PATTERN: &str = concat!(
    r"^\s*(?P<rank>\d+)\.\s*\((?P<previous_rank>\d+)\)",
    r"\s*(?P<overall_points>\d+)\s*\((?P<stage_delta>[+-]?\d+),(?P<points_behind>[+-]?\d+)\)",
    r"\s*(?P<name>.+?)\s*\((?P<country>[^()]+)\)$",
);

/// Matches the two fixed-format result lines of a results block
pub struct LineGrammar {
    stage_regex: Regex,
    overall_regex: Regex,
}

impl LineGrammar {
    pub fn new() -> Result<Self> {
        Ok(Self {
            stage_regex: Regex::new(STAGE_RESULT_PATTERN)
                .context("Failed to compile stage result regex")?,
            overall_regex: Regex::new(OVERALL_RESULT_PATTERN)
                .context("Failed to compile overall result regex")?,
        })
    }

    /// `<stage_rank>. <stage_points> <name> (<country>)`
    pub fn parse_stage(&self, line: &str) -> Option<StageLine> {
        let caps = self.stage_regex.captures(line.trim_end())?;
        Some(StageLine {
            stage_rank: number(&caps, "stage_rank")?,
            stage_points: number(&caps, "stage_points")?,
            name: text(&caps, "name")?,
            country: text(&caps, "country")?,
        })
    }

    /// `<rank>.(<previous_rank>) <points>(<stage_delta>,<points_behind>) <name> (<country>)`
    pub fn parse_overall(&self, line: &str) -> Option<OverallLine> {
        let caps = self.overall_regex.captures(line.trim_end())?;
        Some(OverallLine {
            rank: number(&caps, "rank")?,
            previous_rank: number(&caps, "previous_rank")?,
            overall_points: number(&caps, "overall_points")?,
            stage_delta: number(&caps, "stage_delta")?,
            points_behind: number(&caps, "points_behind")?,
            name: text(&caps, "name")?,
            country: text(&caps, "country")?,
        })
    }
}

fn number<T: FromStr>(caps: &Captures, group: &str) -> Option<T> {
    caps.name(group)?.as_str().parse().ok()
}

fn text(caps: &Captures, group: &str) -> Option<String> {
    Some(caps.name(group)?.as_str().trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grammar() -> LineGrammar {
        LineGrammar::new().unwrap()
    }

    #[test]
    fn test_stage_line_fields() {
        let line = grammar().parse_stage("1. 50 Alice (USA)").unwrap();
        assert_eq!(line.stage_rank, 1);
        assert_eq!(line.stage_points, 50);
        assert_eq!(line.name, "Alice");
        assert_eq!(line.country, "USA");
    }

    #[test]
    fn test_stage_line_ignores_leading_whitespace() {
        let grammar = grammar();
        let expected = grammar.parse_stage("12. 7 Jan de Vries (NED)").unwrap();
        for padding in ["", " ", "    ", "\t  "] {
            let line = format!("{}12. 7 Jan de Vries (NED)", padding);
            assert_eq!(grammar.parse_stage(&line), Some(expected.clone()));
        }
        assert_eq!(expected.name, "Jan de Vries");
    }

    #[test]
    fn test_stage_line_allows_extra_space_after_rank() {
        let line = grammar().parse_stage(" 104.   0 Bob (FRA)\r").unwrap();
        assert_eq!(line.stage_rank, 104);
        assert_eq!(line.stage_points, 0);
        assert_eq!(line.name, "Bob");
    }

    #[test]
    fn test_stage_line_rejects_overall_format() {
        assert!(grammar().parse_stage("1.(2) 300(+10,0) Alice (USA)").is_none());
        assert!(grammar().parse_stage("Stage results for 2024-07-01").is_none());
        assert!(grammar().parse_stage("").is_none());
    }

    #[test]
    fn test_overall_line_fields() {
        let line = grammar().parse_overall("1.(2) 300(+10,0) Alice (USA)").unwrap();
        assert_eq!(line.rank, 1);
        assert_eq!(line.previous_rank, 2);
        assert_eq!(line.overall_points, 300);
        assert_eq!(line.stage_delta, 10);
        assert_eq!(line.points_behind, 0);
        assert_eq!(line.name, "Alice");
        assert_eq!(line.country, "USA");
    }

    #[test]
    fn test_overall_line_signed_fields_and_spacing() {
        let line = grammar()
            .parse_overall("  3. (1)  250 (-5,50)  Bob Smith (FRA)")
            .unwrap();
        assert_eq!(line.rank, 3);
        assert_eq!(line.previous_rank, 1);
        assert_eq!(line.overall_points, 250);
        assert_eq!(line.stage_delta, -5);
        assert_eq!(line.points_behind, 50);
        assert_eq!(line.name, "Bob Smith");
        assert_eq!(line.country, "FRA");
    }

    #[test]
    fn test_overall_line_rejects_stage_format() {
        assert!(grammar().parse_overall("1. 50 Alice (USA)").is_none());
    }

    #[test]
    fn test_out_of_range_number_does_not_match() {
        assert!(grammar().parse_stage("99999999999. 5 Alice (USA)").is_none());
    }
}
