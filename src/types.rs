//! Data model for scraped games, rosters and shot attempts.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Reserved attempt log key holding the whole team's sequence
pub const TEAM_KEY: &str = "team";

/// Result of classifying a play description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotOutcome {
    Made,
    Missed,
    /// Substitutions, timeouts, rebounds, turnovers, ...
    NotAShot,
}

impl ShotOutcome {
    /// Signed attempt record for a shot of `value` points.
    ///
    /// Positive for a make, negative for a miss, `None` when the play
    /// was not a shot attempt.
    pub fn signed(self, value: i32) -> Option<i32> {
        match self {
            ShotOutcome::Made => Some(value),
            ShotOutcome::Missed => Some(-value),
            ShotOutcome::NotAShot => None,
        }
    }
}

/// Per-player signed attempt sequences for one team in one game.
///
/// Always contains [`TEAM_KEY`], which holds every recorded attempt in
/// chronological order regardless of shooter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    into = "BTreeMap<String, Vec<i32>>",
    from = "BTreeMap<String, Vec<i32>>"
)]
pub struct AttemptLog {
    entries: BTreeMap<String, Vec<i32>>,
}

impl Default for AttemptLog {
    fn default() -> Self {
        Self::new()
    }
}

impl AttemptLog {
    pub fn new() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(TEAM_KEY.to_string(), Vec::new());
        Self { entries }
    }

    /// Append `value` to the player's sequence, creating it on first
    /// attempt, and to the team sequence.
    pub fn record(&mut self, player: &str, value: i32) {
        self.entries
            .entry(player.to_string())
            .or_default()
            .push(value);
        self.entries
            .entry(TEAM_KEY.to_string())
            .or_default()
            .push(value);
    }

    pub fn get(&self, key: &str) -> Option<&[i32]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn team(&self) -> &[i32] {
        self.get(TEAM_KEY).unwrap_or(&[])
    }

    /// Player sequences, excluding the team key
    pub fn players(&self) -> impl Iterator<Item = (&str, &[i32])> {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() != TEAM_KEY)
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of keys, team included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.team().is_empty()
    }

    /// Shooting summary for every key, team included
    pub fn summary(&self) -> BTreeMap<String, ShootingLine> {
        self.entries
            .iter()
            .map(|(k, v)| (k.clone(), ShootingLine::from_attempts(v)))
            .collect()
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<i32>> {
        self.entries
    }
}

impl From<BTreeMap<String, Vec<i32>>> for AttemptLog {
    fn from(mut entries: BTreeMap<String, Vec<i32>>) -> Self {
        entries.entry(TEAM_KEY.to_string()).or_default();
        Self { entries }
    }
}

impl From<AttemptLog> for BTreeMap<String, Vec<i32>> {
    fn from(log: AttemptLog) -> Self {
        log.entries
    }
}

/// Made/attempted counts folded from a signed attempt sequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShootingLine {
    pub attempts: u32,
    pub makes: u32,
    pub points: u32,
    pub ft_made: u32,
    pub ft_attempted: u32,
    pub fg2_made: u32,
    pub fg2_attempted: u32,
    pub fg3_made: u32,
    pub fg3_attempted: u32,
}

impl ShootingLine {
    pub fn from_attempts(attempts: &[i32]) -> Self {
        let mut line = Self::default();
        for &value in attempts {
            let made = value > 0;
            let points = value.unsigned_abs();
            let (m, a) = match points {
                1 => (&mut line.ft_made, &mut line.ft_attempted),
                3 => (&mut line.fg3_made, &mut line.fg3_attempted),
                _ => (&mut line.fg2_made, &mut line.fg2_attempted),
            };
            *a += 1;
            line.attempts += 1;
            if made {
                *m += 1;
                line.makes += 1;
                line.points += points;
            }
        }
        line
    }

    /// Field goal percentage (free throws excluded), 0.0 with no attempts
    pub fn fg_pct(&self) -> f64 {
        let attempted = self.fg2_attempted + self.fg3_attempted;
        if attempted == 0 {
            return 0.0;
        }
        (self.fg2_made + self.fg3_made) as f64 / attempted as f64
    }
}

/// Game ids for one team's season, in schedule order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameIdSet {
    pub regular: Vec<String>,
    pub post: Vec<String>,
}

/// Player names across regular and post season stats pages
pub type Roster = BTreeSet<String>;

/// One decoded row of a play-by-play table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayEvent {
    pub possession: String,
    pub description: String,
    /// Numeric tokens of the score cell, (away, home) by convention
    pub score: Vec<u32>,
    pub outcome: ShotOutcome,
    /// Shot value; present only for shot attempts
    pub points: Option<i32>,
    /// Acting player; present only for shot attempts
    pub player: Option<String>,
}

impl PlayEvent {
    /// Signed attempt record, if this event is a shot attempt
    pub fn attempt(&self) -> Option<i32> {
        self.points.and_then(|p| self.outcome.signed(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_log_has_team_key() {
        let log = AttemptLog::new();
        assert_eq!(log.get(TEAM_KEY), Some(&[][..]));
        assert_eq!(log.len(), 1);
        assert!(log.is_empty());
    }

    #[test]
    fn test_record_appends_to_player_and_team() {
        let mut log = AttemptLog::new();
        log.record("Kawhi Leonard", 3);
        log.record("Tim Duncan", -1);
        log.record("Kawhi Leonard", -2);

        assert_eq!(log.get("Kawhi Leonard"), Some(&[3, -2][..]));
        assert_eq!(log.get("Tim Duncan"), Some(&[-1][..]));
        assert_eq!(log.team(), &[3, -1, -2]);

        let player_total: usize = log.players().map(|(_, v)| v.len()).sum();
        assert_eq!(player_total, log.team().len());
    }

    #[test]
    fn test_serializes_as_flat_map() {
        let mut log = AttemptLog::new();
        log.record("Tim Duncan", 2);
        let json = serde_json::to_value(&log).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "team": [2], "Tim Duncan": [2] })
        );
    }

    #[test]
    fn test_deserialize_restores_team_key() {
        let log: AttemptLog = serde_json::from_str(r#"{"Tony Parker": [2, -2]}"#).unwrap();
        assert_eq!(log.team(), &[] as &[i32]);
        assert_eq!(log.get("Tony Parker"), Some(&[2, -2][..]));
    }

    #[test]
    fn test_signed_outcome() {
        assert_eq!(ShotOutcome::Made.signed(3), Some(3));
        assert_eq!(ShotOutcome::Missed.signed(1), Some(-1));
        assert_eq!(ShotOutcome::NotAShot.signed(2), None);
    }

    #[test]
    fn test_shooting_line() {
        let line = ShootingLine::from_attempts(&[3, -3, 2, -2, 1, 1, -1]);
        assert_eq!(line.attempts, 7);
        assert_eq!(line.makes, 4);
        assert_eq!(line.points, 7);
        assert_eq!((line.ft_made, line.ft_attempted), (2, 3));
        assert_eq!((line.fg2_made, line.fg2_attempted), (1, 2));
        assert_eq!((line.fg3_made, line.fg3_attempted), (1, 2));
        assert!((line.fg_pct() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_shooting_line_empty() {
        let line = ShootingLine::from_attempts(&[]);
        assert_eq!(line, ShootingLine::default());
        assert_eq!(line.fg_pct(), 0.0);
    }

    #[test]
    fn test_summary_includes_team() {
        let mut log = AttemptLog::new();
        log.record("Danny Green", 3);
        let summary = log.summary();
        assert_eq!(summary[TEAM_KEY].points, 3);
        assert_eq!(summary["Danny Green"].fg3_made, 1);
    }
}
