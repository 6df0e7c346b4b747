//! Team stats parser, used for rosters.
//!
//! URL: http://espn.go.com/nba/team/stats/_/name/ABBREV/TEAM-NAME

use anyhow::Result;
use scraper::Html;

use super::selector;
use crate::error::ScrapeError;

const STATS_CONTAINER: &str = "div.mod-container.mod-table";

/// Parser for team stats pages
pub struct RosterParser;

impl RosterParser {
    /// Names of every player linked from the first stats table, in page
    /// order, duplicates included
    pub fn parse(html: &str) -> Result<Vec<String>> {
        let document = Html::parse_document(html);
        let container_selector = selector(STATS_CONTAINER)?;
        let table_selector = selector("table")?;
        let player_selector = selector("a[href*='player']")?;

        let container = document
            .select(&container_selector)
            .next()
            .ok_or_else(|| ScrapeError::structure(STATS_CONTAINER))?;
        let table = container
            .select(&table_selector)
            .next()
            .ok_or_else(|| ScrapeError::structure("div.mod-table table"))?;

        Ok(table
            .select(&player_selector)
            .map(|elem| elem.text().collect::<String>())
            .collect())
    }
}
