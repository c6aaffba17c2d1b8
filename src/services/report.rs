use anyhow::Result;
use chrono::NaiveDate;
use log::info;

use crate::config::settings::AppConfig;
use crate::extract::LineGrammar;
use crate::fetchers::ResultsClient;
use crate::ranking::SortKey;
use crate::report::{self, ReportKind};
use crate::roster::Roster;

/// A fully validated report to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportRequest {
    Stage {
        date: NaiveDate,
        sort: SortKey,
    },
    Overall {
        date: NaiveDate,
        sort: SortKey,
        pool_only: bool,
    },
    Teams {
        year: i32,
    },
}

pub struct ReportService {
    client: ResultsClient,
    grammar: LineGrammar,
    roster: Roster,
}

impl ReportService {
    pub fn new(config: &AppConfig, roster: Roster) -> Result<Self> {
        Ok(Self {
            client: ResultsClient::new(&config.scraper)?,
            grammar: LineGrammar::new()?,
            roster,
        })
    }

    /// Fetch every participant in turn and render the report
    pub async fn run(&mut self, request: ReportRequest) -> Result<String> {
        info!("=== Building {:?} ===", request);

        let rendered = match request {
            ReportRequest::Stage { date, sort } => {
                self.ranked_report(ReportKind::Stage, date, sort).await?
            }
            ReportRequest::Overall {
                date,
                sort,
                pool_only,
            } => {
                self.ranked_report(ReportKind::Overall { pool_only }, date, sort)
                    .await?
            }
            ReportRequest::Teams { year } => {
                let blocks = self.client.fetch_team_blocks(&self.roster, year).await?;
                report::render_teams(&blocks)
            }
        };

        info!("=== Report Complete ===");
        Ok(rendered)
    }

    async fn ranked_report(
        &mut self,
        kind: ReportKind,
        date: NaiveDate,
        sort: SortKey,
    ) -> Result<String> {
        let blocks = self.client.fetch_result_blocks(&self.roster, date).await?;
        info!("  → Fetched {} result blocks", blocks.len());
        report::render_report(kind, &blocks, &self.grammar, sort)
    }
}
