pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod extract;
pub mod fetchers;
pub mod http;
pub mod rate_limiter;
pub mod ranking;
pub mod report;
pub mod roster;
pub mod services;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::config::settings::AppConfig;
use crate::roster::Roster;
use crate::services::{ReportRequest, ReportService};

pub fn interpret() -> Cli {
    Cli::parse()
}

/// Validate the request, load the roster, then fetch and render the report
pub fn handle_report(cli: Cli) -> Result<String> {
    let request = cli.command.into_request(cli::today())?;
    let roster = Roster::load(&cli.file)?;
    let config = AppConfig::from_env();
    run_report(&config, roster, request)
}

pub fn run_report(config: &AppConfig, roster: Roster, request: ReportRequest) -> Result<String> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let mut service = ReportService::new(config, roster)?;
        service.run(request).await
    })
}
