//! Play description classifier.
//!
//! Descriptions are free English text such as
//! "Kawhi Leonard makes 15-foot jumper (Tony Parker assists)".

use crate::types::ShotOutcome;

/// Classify a description as a make, a miss, or not a shot at all
pub fn is_make(text: &str) -> ShotOutcome {
    if text.contains("makes") {
        ShotOutcome::Made
    } else if text.contains("misses") {
        ShotOutcome::Missed
    } else {
        ShotOutcome::NotAShot
    }
}

/// Point value of the attempt, regardless of make or miss
pub fn point_attempt(text: &str) -> i32 {
    if text.contains("three") {
        return 3;
    }
    if text.contains("free") {
        return 1;
    }
    2
}

/// Acting player: the first two words of the description.
///
/// Assumes "First Last" opens every shot description. Single-word names
/// and suffixes ("Jr.") are not handled.
pub fn player(text: &str) -> String {
    text.split_whitespace().take(2).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_make() {
        assert_eq!(is_make("Kawhi Leonard makes 15-foot jumper"), ShotOutcome::Made);
        assert_eq!(
            is_make("Russell Westbrook misses 10-foot jumper"),
            ShotOutcome::Missed
        );
    }

    #[test]
    fn test_is_make_not_a_shot() {
        for text in [
            "Tim Duncan defensive rebound",
            "Spurs Full timeout",
            "Boris Diaw enters the game for Tim Duncan",
            "Tony Parker bad pass (Serge Ibaka steals)",
        ] {
            assert_eq!(is_make(text), ShotOutcome::NotAShot, "{text}");
        }
    }

    #[test]
    fn test_point_attempt() {
        assert_eq!(point_attempt("Danny Green makes 25-foot three point jumper"), 3);
        assert_eq!(point_attempt("Tim Duncan misses free throw 1 of 2"), 1);
        assert_eq!(point_attempt("LaMarcus Aldridge makes two point shot"), 2);
        assert_eq!(point_attempt("Kawhi Leonard makes driving layup"), 2);
    }

    #[test]
    fn test_point_attempt_three_wins_over_free() {
        assert_eq!(point_attempt("free agent makes three point jumper"), 3);
    }

    #[test]
    fn test_player() {
        assert_eq!(player("Kawhi Leonard makes 15-foot jumper"), "Kawhi Leonard");
        assert_eq!(player("  Tim   Duncan  misses  "), "Tim Duncan");
    }

    #[test]
    fn test_player_short_text() {
        assert_eq!(player("Nene"), "Nene");
        assert_eq!(player(""), "");
    }
}
