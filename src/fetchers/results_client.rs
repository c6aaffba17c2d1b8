use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use log::{debug, info};
use regex::Regex;
use scraper::{Html, Selector};

use crate::config::ScraperSettings;
use crate::domain::ParticipantBlock;
use crate::errors::{self, ScrapeError};
use crate::http::RateLimitedClient;
use crate::roster::Roster;

const RESULT_LINES_PATH: &str = "/cgi-bin/getlines.cgi";
const TEAM_PATH: &str = "/cgi-bin/getpart.cgi";

/// Client for the ifarm.nl results service
pub struct ResultsClient {
    client: RateLimitedClient,
    base_url: String,
    pre_selector: Selector,
    pre_open_tag: Regex,
}

impl ResultsClient {
    pub fn new(settings: &ScraperSettings) -> Result<Self> {
        let client = RateLimitedClient::new(
            settings.user_agent,
            settings.timeout_secs,
            settings.rate_limit_ms,
        )?;
        let pre_selector = Selector::parse("pre")
            .map_err(|e| anyhow!("Failed to parse pre selector: {e}"))?;
        let pre_open_tag = Regex::new(r"(?i)<pre\b[^>]*>")?;

        Ok(Self {
            client,
            base_url: settings.base_url.clone(),
            pre_selector,
            pre_open_tag,
        })
    }

    /// Stage and overall result lines of every participant for one stage date
    pub async fn fetch_result_blocks(
        &mut self,
        roster: &Roster,
        date: NaiveDate,
    ) -> Result<Vec<ParticipantBlock>> {
        let date = date.format("%Y%m%d").to_string();
        info!("Fetching results for {} participants on {}", roster.len(), date);

        let mut blocks = Vec::with_capacity(roster.len());
        for participant in roster.iter() {
            let form = [("DATE", date.clone()), ("SEARCH", participant.to_string())];
            blocks.push(self.fetch_block(RESULT_LINES_PATH, participant, &form).await?);
        }
        Ok(blocks)
    }

    /// Team selection of every participant for one race year
    pub async fn fetch_team_blocks(
        &mut self,
        roster: &Roster,
        year: i32,
    ) -> Result<Vec<ParticipantBlock>> {
        info!("Fetching teams for {} participants in {}", roster.len(), year);

        let mut blocks = Vec::with_capacity(roster.len());
        for participant in roster.iter() {
            let form = [("SEARCH", participant.to_string()), ("YEAR", year.to_string())];
            blocks.push(self.fetch_block(TEAM_PATH, participant, &form).await?);
        }
        Ok(blocks)
    }

    async fn fetch_block(
        &mut self,
        path: &str,
        participant: &str,
        form: &[(&str, String)],
    ) -> Result<ParticipantBlock> {
        let url = format!("{}{}", self.base_url, path);
        info!("  → {}", participant);

        let response = self
            .client
            .post_form(&url, form)
            .await
            .with_context(|| errors::fetch_context(participant, &url))?;

        Self::check_response_status(&response, participant, &url)?;

        let body = response
            .text()
            .await
            .with_context(|| errors::fetch_context(participant, &url))?;

        let text = self.extract_block(&body, participant)?;
        debug!("Results block for {}:\n{}", participant, text);

        Ok(ParticipantBlock {
            participant: participant.to_string(),
            text,
        })
    }

    fn check_response_status(
        response: &reqwest::Response,
        participant: &str,
        url: &str,
    ) -> Result<(), ScrapeError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Transport {
                participant: participant.to_string(),
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(())
    }

    /// Text of the first `<pre>` element, with entities decoded.
    ///
    /// The HTML parser drops a newline directly after `<pre>`; it is put back
    /// so the block keeps its leading empty line and its line offsets.
    fn extract_block(&self, body: &str, participant: &str) -> Result<String, ScrapeError> {
        let html = Html::parse_document(body);
        let text = html
            .select(&self.pre_selector)
            .next()
            .map(|pre| pre.text().collect::<String>())
            .ok_or_else(|| ScrapeError::MissingBlock {
                participant: participant.to_string(),
            })?;

        if self.opens_with_newline(body) {
            Ok(format!("\n{text}"))
        } else {
            Ok(text)
        }
    }

    fn opens_with_newline(&self, body: &str) -> bool {
        self.pre_open_tag.find(body).is_some_and(|tag| {
            let rest = &body[tag.end()..];
            rest.starts_with('\n') || rest.starts_with("\r\n")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ResultsClient {
        ResultsClient::new(&ScraperSettings::default()).unwrap()
    }

    #[test]
    fn test_extract_block_returns_pre_text() {
        let body = r#"
            <html>
                <body>
                    <h1>TdF game</h1>
                    <pre>Results for Alice
Stage:
  1. 50 Alice (USA)</pre>
                </body>
            </html>
        "#;

        let text = client().extract_block(body, "Alice").unwrap();
        assert_eq!(text, "Results for Alice\nStage:\n  1. 50 Alice (USA)");
    }

    #[test]
    fn test_extract_block_decodes_entities_and_strips_tags() {
        let body = "<pre>Team of <b>Bob</b> &amp; co</pre>";
        let text = client().extract_block(body, "Bob").unwrap();
        assert_eq!(text, "Team of Bob & co");
    }

    #[test]
    fn test_newline_after_pre_tag_is_kept() {
        let body = "<pre>\nResults for Alice\n  1. 50 Alice (USA)\nOverall:\n  1.(2) 300(+10,0) Alice (USA)\n---\n</pre>";
        let text = client().extract_block(body, "Alice").unwrap();

        assert!(text.starts_with("\nResults for Alice\n"));
        assert_eq!(text.split('\n').count(), 7);
        assert_eq!(text.split('\n').nth(2), Some("  1. 50 Alice (USA)"));
    }

    #[test]
    fn test_newline_after_pre_tag_with_attributes() {
        let body = "<PRE class=\"lines\">\r\nTeam of Bob\r\n  Evenepoel</PRE>";
        let text = client().extract_block(body, "Bob").unwrap();
        assert_eq!(text, "\nTeam of Bob\n  Evenepoel");
    }

    #[test]
    fn test_missing_pre_is_reported() {
        let err = client()
            .extract_block("<html><body>Not found</body></html>", "Carol")
            .unwrap_err();
        assert!(matches!(
            err,
            ScrapeError::MissingBlock { participant } if participant == "Carol"
        ));
    }
}
