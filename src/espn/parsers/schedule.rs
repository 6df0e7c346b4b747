//! Team schedule parser.
//!
//! Extracts game ids from the score links of a schedule page.
//! URL: http://espn.go.com/nba/team/schedule/_/name/ABBREV/TEAM-NAME

use anyhow::Result;
use scraper::Html;

use super::selector;
use crate::error::ScrapeError;

/// Parser for schedule pages
pub struct ScheduleParser;

impl ScheduleParser {
    /// Game ids in schedule order.
    ///
    /// Each `li.score` links to a recap whose last path segment is the id
    /// (`/nba/recap/_/id/400827900` -> `400827900`).
    pub fn parse(html: &str) -> Result<Vec<String>> {
        let document = Html::parse_document(html);
        let score_selector = selector("li.score")?;
        let link_selector = selector("a")?;

        let mut game_ids = Vec::new();
        for item in document.select(&score_selector) {
            let link = item
                .select(&link_selector)
                .next()
                .ok_or_else(|| ScrapeError::structure("li.score a"))?;
            let href = link
                .value()
                .attr("href")
                .ok_or_else(|| ScrapeError::MissingAttribute {
                    element: "a".to_string(),
                    attribute: "href".to_string(),
                })?;
            game_ids.push(Self::trailing_segment(href).to_string());
        }

        Ok(game_ids)
    }

    fn trailing_segment(href: &str) -> &str {
        href.rsplit('/').next().unwrap_or(href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_HTML: &str = r#"<!DOCTYPE html>
<html>
<body>
<table class="tablehead">
  <tr class="stathead"><td colspan="4">2015-16 Regular Season Schedule</td></tr>
  <tr class="oddrow">
    <td>Wed, Oct 28</td>
    <td><ul class="game-schedule"><li class="game-status">vs</li><li class="team-name"><a href="/nba/team/_/name/okc">Oklahoma City</a></li></ul></td>
    <td><ul class="game-schedule"><li class="game-status loss">L</li><li class="score"><a href="/nba/recap/_/id/400827900">112-106</a></li></ul></td>
  </tr>
  <tr class="evenrow">
    <td>Fri, Oct 30</td>
    <td><ul class="game-schedule"><li class="game-status">@</li><li class="team-name"><a href="/nba/team/_/name/bkn">Brooklyn</a></li></ul></td>
    <td><ul class="game-schedule"><li class="game-status win">W</li><li class="score"><a href="/nba/recap/_/id/400827949">102-75</a></li></ul></td>
  </tr>
  <tr class="oddrow">
    <td>Sat, Oct 31</td>
    <td><ul class="game-schedule"><li class="game-status">vs</li><li class="team-name"><a href="/nba/team/_/name/bos">Boston</a></li></ul></td>
    <td><ul class="game-schedule"><li class="game-status win">W</li><li class="score"><a href="http://espn.go.com/nba/recap/_/id/400827968">95-87</a></li></ul></td>
  </tr>
</table>
</body>
</html>"#;

    #[test]
    fn test_parse_game_ids_in_order() {
        let ids = ScheduleParser::parse(SAMPLE_HTML).unwrap();
        assert_eq!(ids, vec!["400827900", "400827949", "400827968"]);
    }

    #[test]
    fn test_game_ids_are_trailing_segments() {
        let ids = ScheduleParser::parse(SAMPLE_HTML).unwrap();
        for id in ids {
            assert!(!id.is_empty());
            assert!(!id.contains('/'));
        }
    }

    #[test]
    fn test_empty_schedule() {
        let ids = ScheduleParser::parse("<html></html>").unwrap();
        assert!(ids.is_empty());
    }

    #[test]
    fn test_score_without_link() {
        let html = r#"<ul><li class="score">Postponed</li></ul>"#;
        let err = ScheduleParser::parse(html).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScrapeError>(),
            Some(ScrapeError::StructureNotFound { .. })
        ));
    }
}
