//! HTML parsers for ESPN NBA pages.

pub mod classify;
pub mod play_by_play;
pub mod schedule;
pub mod stats;

pub use classify::{is_make, player, point_attempt};
pub use play_by_play::{
    game_log, play_items_from_log_entry, play_text, possession, score, PlayByPlayParser,
};
pub use schedule::ScheduleParser;
pub use stats::RosterParser;

use anyhow::{anyhow, Result};
use scraper::Selector;

pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow!("invalid selector `{}`: {}", css, e))
}
