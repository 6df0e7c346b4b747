//! Play-by-play page parser.
//!
//! URL: http://espn.go.com/nba/playbyplay?gameId=GAMEID
//!
//! Each data row of the play table carries four cells:
//! time, possession logo, play description, running score.
//! Quarter header rows carry `th` cells only and decode to no items.

use anyhow::Result;
use scraper::{ElementRef, Html};
use tracing::debug;

use super::classify::{is_make, player, point_attempt};
use super::selector;
use crate::error::ScrapeError;
use crate::types::{AttemptLog, PlayEvent, ShotOutcome};

/// Container wrapping every quarter's play table
pub const PLAYS_CONTAINER: &str = "div#gamepackage-qtrs-wrap";

const TEXT_CELL: usize = 2;
const LOGO_CELL: usize = 1;
const SCORE_CELL: usize = 3;

/// All rows of the play-by-play, in document (chronological) order
pub fn game_log(document: &Html) -> Result<Vec<ElementRef<'_>>> {
    let container_selector = selector(PLAYS_CONTAINER)?;
    let row_selector = selector("tr")?;

    let container = document
        .select(&container_selector)
        .next()
        .ok_or_else(|| ScrapeError::structure(PLAYS_CONTAINER))?;

    Ok(container.select(&row_selector).collect())
}

/// Cells of one log entry; empty for header rows
pub fn play_items_from_log_entry(entry: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    match selector("td") {
        Ok(td) => entry.select(&td).collect(),
        Err(_) => Vec::new(),
    }
}

fn cell<'a, 'b>(items: &'b [ElementRef<'a>], index: usize) -> Result<&'b ElementRef<'a>> {
    items.get(index).ok_or_else(|| {
        ScrapeError::MissingCell {
            index,
            found: items.len(),
        }
        .into()
    })
}

/// Human-readable play description
pub fn play_text(items: &[ElementRef<'_>]) -> Result<String> {
    Ok(cell(items, TEXT_CELL)?.text().collect())
}

/// Team code of the side in possession, taken from the logo filename
/// (".../teamlogos/nba/500/sa.png&h=100" -> "sa")
pub fn possession(items: &[ElementRef<'_>]) -> Result<String> {
    let img_selector = selector("img")?;
    let img = cell(items, LOGO_CELL)?
        .select(&img_selector)
        .next()
        .ok_or_else(|| ScrapeError::structure("td img"))?;

    let src = img
        .value()
        .attr("src")
        .ok_or_else(|| ScrapeError::MissingAttribute {
            element: "img".to_string(),
            attribute: "src".to_string(),
        })?;

    let filename = src.rsplit('/').next().unwrap_or(src);
    let code = filename.split(".png").next().unwrap_or(filename);
    Ok(code.to_string())
}

/// Numeric tokens of the score cell, (away, home) by convention
pub fn score(items: &[ElementRef<'_>]) -> Result<Vec<u32>> {
    let text: String = cell(items, SCORE_CELL)?.text().collect();
    Ok(text
        .split_whitespace()
        .filter(|token| token.chars().all(|c| c.is_ascii_digit()))
        .filter_map(|token| token.parse().ok())
        .collect())
}

/// Parser for play-by-play pages
pub struct PlayByPlayParser;

impl PlayByPlayParser {
    /// Signed attempt sequences for `team`'s possessions
    pub fn attempt_log(html: &str, team: &str) -> Result<AttemptLog> {
        let document = Html::parse_document(html);
        Self::attempt_log_from_document(&document, team)
    }

    pub fn attempt_log_from_document(document: &Html, team: &str) -> Result<AttemptLog> {
        let team = team.to_lowercase();
        let mut log = AttemptLog::new();
        let mut skipped = 0usize;

        for entry in game_log(document)? {
            let items = play_items_from_log_entry(entry);
            if items.is_empty() || possession(&items)? != team {
                skipped += 1;
                continue;
            }

            let text = play_text(&items)?;
            let Some(value) = is_make(&text).signed(point_attempt(&text)) else {
                skipped += 1;
                continue;
            };

            log.record(&player(&text), value);
        }

        debug!(
            "{}: {} attempts recorded, {} rows skipped",
            team,
            log.team().len(),
            skipped
        );

        Ok(log)
    }

    /// Every data row decoded, both teams
    pub fn events(html: &str) -> Result<Vec<PlayEvent>> {
        let document = Html::parse_document(html);
        let mut events = Vec::new();

        for entry in game_log(&document)? {
            let items = play_items_from_log_entry(entry);
            if items.is_empty() {
                continue;
            }
            events.push(Self::decode_event(&items)?);
        }

        Ok(events)
    }

    fn decode_event(items: &[ElementRef<'_>]) -> Result<PlayEvent> {
        let description = play_text(items)?;
        let outcome = is_make(&description);
        let (points, shooter) = match outcome {
            ShotOutcome::NotAShot => (None, None),
            _ => (Some(point_attempt(&description)), Some(player(&description))),
        };

        Ok(PlayEvent {
            possession: possession(items)?,
            score: score(items)?,
            outcome,
            points,
            player: shooter,
            description,
        })
    }
}
