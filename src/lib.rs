//! Shot attempt sequences from ESPN NBA pages.
//!
//! ```no_run
//! use shotlog::{config::ScraperConfig, espn::Scraper};
//!
//! # fn main() -> anyhow::Result<()> {
//! let scraper = Scraper::from_config(&ScraperConfig::default())?;
//! let log = scraper.get_game_data(400827900, "sa")?;
//! println!("{:?}", log.team());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod espn;
pub mod types;

pub use error::ScrapeError;
pub use espn::{Fetcher, HttpFetcher, Scraper};
pub use types::{AttemptLog, GameIdSet, PlayEvent, Roster, ShootingLine, ShotOutcome};
