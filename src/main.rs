use anyhow::Result;

use tdf_pool::errors::ScrapeError;
use tdf_pool::{handle_report, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(exit_code(&e));
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    let rendered = handle_report(cli)?;
    print!("{rendered}");
    Ok(())
}

fn exit_code(error: &anyhow::Error) -> i32 {
    error
        .downcast_ref::<ScrapeError>()
        .map_or(1, ScrapeError::exit_code)
}
