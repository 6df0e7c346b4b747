//! ESPN NBA scraper.
//!
//! Builds page URLs, fetches them through a [`Fetcher`] and hands the HTML
//! to the parsers.

pub mod fetcher;
pub mod parsers;

pub use fetcher::{Fetcher, HttpFetcher};

use anyhow::Result;
use std::fmt::Display;
use tracing::info;

use crate::config::ScraperConfig;
use crate::types::{AttemptLog, GameIdSet, PlayEvent, Roster};
use parsers::{PlayByPlayParser, RosterParser, ScheduleParser};

/// Base URL for NBA pages
pub const BASE_URL: &str = "http://espn.go.com/nba";

/// URL slug for a team display name ("San Antonio Spurs" -> "san-antonio-spurs")
pub fn team_slug(team_name: &str) -> String {
    team_name
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Build regular and post season schedule URLs
/// URL: BASE/team/schedule/_/name/ABBREV/[year/YEAR/]seasontype/2/TEAM-NAME
pub fn schedule_urls(
    base: &str,
    team_abbrev: &str,
    team_name: &str,
    end_year: Option<u32>,
) -> (String, String) {
    let mut url_base = format!("{}/team/schedule/_/name/{}/", base, team_abbrev);
    if let Some(year) = end_year {
        url_base.push_str(&format!("year/{}/", year));
    }
    season_urls(&url_base, team_name)
}

/// Build regular and post season stats URLs
/// URL: BASE/team/stats/_/name/ABBREV/[seasontype/2/]TEAM-NAME
pub fn stats_urls(base: &str, team_abbrev: &str, team_name: &str) -> (String, String) {
    let url_base = format!("{}/team/stats/_/name/{}/", base, team_abbrev);
    season_urls(&url_base, team_name)
}

fn season_urls(url_base: &str, team_name: &str) -> (String, String) {
    let slug = team_slug(team_name);
    (
        format!("{}seasontype/2/{}", url_base, slug),
        format!("{}{}", url_base, slug),
    )
}

/// Build play-by-play URL
/// URL: BASE/playbyplay?gameId=GAMEID
pub fn play_by_play_url(base: &str, game_id: impl Display) -> String {
    format!("{}/playbyplay?gameId={}", base, game_id)
}

/// Fetch-and-parse entry points bound to one site root
pub struct Scraper<F> {
    fetcher: F,
    base_url: String,
}

impl Scraper<HttpFetcher> {
    pub fn from_config(config: &ScraperConfig) -> Result<Self> {
        Ok(Self::new(HttpFetcher::new(config)?, &config.base_url))
    }
}

impl<F: Fetcher> Scraper<F> {
    pub fn new(fetcher: F, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { fetcher, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Game ids for the regular and post season of the season ending in
    /// `end_year` (latest season when `None`)
    pub fn get_game_ids(
        &self,
        team_abbrev: &str,
        team_name: &str,
        end_year: Option<u32>,
    ) -> Result<GameIdSet> {
        let (regular_url, post_url) =
            schedule_urls(&self.base_url, team_abbrev, team_name, end_year);

        let regular = ScheduleParser::parse(&self.fetcher.fetch(&regular_url)?)?;
        let post = ScheduleParser::parse(&self.fetcher.fetch(&post_url)?)?;
        info!(
            "{}: {} regular season, {} post season games",
            team_abbrev,
            regular.len(),
            post.len()
        );

        Ok(GameIdSet { regular, post })
    }

    /// Players on the latest season's regular and post season stats pages
    pub fn get_roster(&self, team_abbrev: &str, team_name: &str) -> Result<Roster> {
        let (regular_url, post_url) = stats_urls(&self.base_url, team_abbrev, team_name);

        let mut roster = Roster::new();
        for url in [regular_url, post_url] {
            let html = self.fetcher.fetch(&url)?;
            roster.extend(RosterParser::parse(&html)?);
        }
        info!("{}: {} players on roster", team_abbrev, roster.len());

        Ok(roster)
    }

    /// Signed shot attempt sequences for `team_abbrev` in one game
    pub fn get_game_data(&self, game_id: impl Display, team_abbrev: &str) -> Result<AttemptLog> {
        let url = play_by_play_url(&self.base_url, game_id);
        let html = self.fetcher.fetch(&url)?;
        PlayByPlayParser::attempt_log(&html, team_abbrev)
    }

    /// Every decoded play of one game
    pub fn get_game_events(&self, game_id: impl Display) -> Result<Vec<PlayEvent>> {
        let url = play_by_play_url(&self.base_url, game_id);
        let html = self.fetcher.fetch(&url)?;
        PlayByPlayParser::events(&html)
    }
}
