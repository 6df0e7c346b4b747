//! CLI commands for shotlog.

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::espn::Scraper;
use crate::types::{AttemptLog, TEAM_KEY};

#[derive(Parser)]
#[command(name = "shotlog")]
#[command(version, about = "Shot attempt sequences from ESPN NBA play-by-play", long_about = None)]
pub struct Cli {
    /// Site root override (default from config)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List regular and post season game ids for a team
    GameIds {
        /// Team abbreviation (sa, okc, ...)
        abbrev: String,

        /// Team display name ("San Antonio Spurs")
        team_name: String,

        /// Season end year; latest season if omitted
        #[arg(short, long)]
        year: Option<u32>,
    },

    /// List players on a team's latest roster
    Roster {
        abbrev: String,
        team_name: String,
    },

    /// Signed shot attempt sequences for one team in one game
    GameData {
        /// ESPN game id
        game_id: String,

        /// Team abbreviation, case-insensitive
        team: String,

        /// Output format (json, table)
        #[arg(short, long, default_value = "json")]
        format: String,
    },

    /// Decoded play-by-play log for one game
    Events {
        game_id: String,
    },
}

fn build_scraper(base_url: Option<String>) -> anyhow::Result<Scraper<crate::espn::HttpFetcher>> {
    let mut config = AppConfig::load()?;
    if let Some(url) = base_url {
        config.scraper.base_url = url;
    }
    tracing::debug!("Scraper config: {:?}", config.scraper);
    Scraper::from_config(&config.scraper)
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let scraper = build_scraper(cli.base_url)?;

    match cli.command {
        Commands::GameIds {
            abbrev,
            team_name,
            year,
        } => {
            let ids = scraper.get_game_ids(&abbrev, &team_name, year)?;
            println!("{}", serde_json::to_string_pretty(&ids)?);
        }
        Commands::Roster { abbrev, team_name } => {
            let roster = scraper.get_roster(&abbrev, &team_name)?;
            println!("{}", serde_json::to_string_pretty(&roster)?);
        }
        Commands::GameData {
            game_id,
            team,
            format,
        } => {
            let log = scraper.get_game_data(&game_id, &team)?;
            match format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&log)?),
                "table" => print_table(&game_id, &team, &log),
                _ => {
                    eprintln!("Unknown format: {}. Using JSON.", format);
                    println!("{}", serde_json::to_string_pretty(&log)?);
                }
            }
        }
        Commands::Events { game_id } => {
            let events = scraper.get_game_events(&game_id)?;
            println!("{}", serde_json::to_string_pretty(&events)?);
        }
    }

    Ok(())
}

/// Print per-player shooting lines, team total last
fn print_table(game_id: &str, team: &str, log: &AttemptLog) {
    println!("Game {} ({})", game_id, team.to_lowercase());
    println!();
    println!(
        "  {:24} {:>5} {:>5} {:>7} {:>7} {:>7} {:>6}",
        "Player", "FGM-A", "PTS", "FT", "2PT", "3PT", "FG%"
    );
    println!("  {}", "-".repeat(70));

    let summary = log.summary();
    let rows = summary
        .iter()
        .filter(|(k, _)| k.as_str() != TEAM_KEY)
        .chain(summary.get_key_value(TEAM_KEY));

    for (name, line) in rows {
        println!(
            "  {:24} {:>5} {:>5} {:>7} {:>7} {:>7} {:>5.1}%",
            name,
            format!("{}-{}", line.makes, line.attempts),
            line.points,
            format!("{}-{}", line.ft_made, line.ft_attempted),
            format!("{}-{}", line.fg2_made, line.fg2_attempted),
            format!("{}-{}", line.fg3_made, line.fg3_attempted),
            line.fg_pct() * 100.0
        );
    }
}
