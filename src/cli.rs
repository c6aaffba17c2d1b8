use chrono::{Datelike, Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::errors::ScrapeError;
use crate::ranking::SortKey;
use crate::services::ReportRequest;

const DATE_FORMAT: &str = "%Y%m%d";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Pool standings for the Tour de France game at http://ifarm.nl/tdf"
)]
pub struct Cli {
    /// File containing the pool's participants, one per line
    #[arg(short, long, global = true, default_value = "players.txt")]
    pub file: PathBuf,

    /// Report
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Results of a single stage
    Stage {
        /// Date of the stage, YYYYMMDD (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Display order
        #[arg(short, long, value_enum, default_value_t = SortKey::Rank)]
        sort: SortKey,
    },
    /// Overall classification after a stage
    Overall {
        /// Date of the stage, YYYYMMDD (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Display order
        #[arg(short, long, value_enum, default_value_t = SortKey::Rank)]
        sort: SortKey,
        /// Show only the pool-relevant columns
        #[arg(short, long)]
        pool_only: bool,
    },
    /// Each participant's team selection
    Teams {
        /// Year of the race (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,
    },
}

impl Command {
    /// Validate the arguments, filling in today's date and year where omitted
    pub fn into_request(self, today: NaiveDate) -> Result<ReportRequest, ScrapeError> {
        match self {
            Command::Stage { date, sort } => Ok(ReportRequest::Stage {
                date: stage_date(date.as_deref(), today)?,
                sort,
            }),
            Command::Overall {
                date,
                sort,
                pool_only,
            } => Ok(ReportRequest::Overall {
                date: stage_date(date.as_deref(), today)?,
                sort,
                pool_only,
            }),
            Command::Teams { year } => Ok(ReportRequest::Teams {
                year: year.unwrap_or_else(|| today.year()),
            }),
        }
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn stage_date(input: Option<&str>, today: NaiveDate) -> Result<NaiveDate, ScrapeError> {
    match input {
        Some(input) => parse_stage_date(input),
        None => Ok(today),
    }
}

/// A real calendar date written as exactly eight digits, YYYYMMDD
pub fn parse_stage_date(input: &str) -> Result<NaiveDate, ScrapeError> {
    let invalid = || ScrapeError::InvalidDate {
        input: input.to_string(),
    };

    if input.len() != 8 || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| invalid())
}
