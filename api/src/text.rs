//! Free-text heuristics over the play description.
//!
//! CFBD's `play_text` is unstructured prose. These probes pull player names
//! and outcome details out of it on a best-effort basis: a pattern that does
//! not match yields the [`UNKNOWN_PLAYER`] sentinel (or zero/false), never a
//! failure. Each probe stands alone so it can be tested and tuned alone.

use regex::Regex;
use std::sync::LazyLock;

/// Sentinel for a player name no pattern could find.
pub const UNKNOWN_PLAYER: &str = "Unknown Player";

static RUSHER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([A-Z]+(?:\s[A-Z]+)*) rush").unwrap());

static PASSER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([A-Z]+(?:\s[A-Z]+)*) pass").unwrap());

// The name sits before its terminator here, unlike the other probes, so the
// capture is lazy and stops at a connective, punctuation, or the end.
static RECEIVER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:complete|incomplete) to ([A-Z]+(?:\s[A-Z]+)*?)(?:\s+(?:for|to|at)\b|\s*[^A-Za-z\s]|\s*$)",
    )
    .unwrap()
});

static PUNTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([A-Z]+(?:\s[A-Z]+)*) punt").unwrap());

static KICKOFF_KICKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([A-Z]+(?:\s[A-Z]+)*) kickoff").unwrap());

static FIELD_GOAL_KICKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([A-Z]+(?:\s[A-Z]+)*) field goal").unwrap());

static EXTRA_POINT_KICKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([A-Z]+(?:\s[A-Z]+)*) extra point").unwrap());

static PENALIZED_PLAYER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([A-Z]+(?:\s[A-Z]+)*) penalty").unwrap());

static TIMEOUT_TEAM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([A-Z]+(?:\s[A-Z]+)*) timeout").unwrap());

static RETURN_YARDS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)return(?:ed)?\b[^,]*?\bfor\s+(-?\d+)\s+y(?:ar)?ds?\b").unwrap()
});

fn capture_name(re: &Regex, play_text: &str) -> String {
    re.captures(play_text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| UNKNOWN_PLAYER.to_string())
}

/// Player carrying the ball, from text like "Jeremiyah Love rush for 5 yds".
pub fn rusher(play_text: &str) -> String {
    capture_name(&RUSHER_RE, play_text)
}

/// Player throwing the ball, from text like "Riley Leonard pass complete to ...".
pub fn passer(play_text: &str) -> String {
    capture_name(&PASSER_RE, play_text)
}

/// Player targeted by the pass. Sacks and throwaways carry no
/// "complete to"/"incomplete to" clause and fall back to the sentinel.
pub fn receiver(play_text: &str) -> String {
    capture_name(&RECEIVER_RE, play_text)
}

pub fn punter(play_text: &str) -> String {
    capture_name(&PUNTER_RE, play_text)
}

pub fn kickoff_kicker(play_text: &str) -> String {
    capture_name(&KICKOFF_KICKER_RE, play_text)
}

pub fn field_goal_kicker(play_text: &str) -> String {
    capture_name(&FIELD_GOAL_KICKER_RE, play_text)
}

pub fn extra_point_kicker(play_text: &str) -> String {
    capture_name(&EXTRA_POINT_KICKER_RE, play_text)
}

pub fn penalized_player(play_text: &str) -> String {
    capture_name(&PENALIZED_PLAYER_RE, play_text)
}

/// Team calling a timeout, from text like "Notre Dame timeout".
pub fn timeout_team(play_text: &str) -> String {
    capture_name(&TIMEOUT_TEAM_RE, play_text)
}

/// Yards gained on a return, from text like "Jordan Faison return for 20 yds"
/// or "returned by Jack Kiser for 12 yards". Zero when no return clause is
/// present.
pub fn return_yards(play_text: &str) -> i16 {
    RETURN_YARDS_RE
        .captures(play_text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Case-insensitive substring probe for outcome keywords.
pub fn contains_ci(play_text: &str, keyword: &str) -> bool {
    play_text.to_uppercase().contains(&keyword.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rusher_is_the_name_before_the_rush_keyword() {
        assert_eq!(rusher("Jeremiyah Love rush for 8 yds to the ND 45"), "Jeremiyah Love");
        assert_eq!(rusher("Audric Estime rushed up the middle"), "Audric Estime");
        assert_eq!(rusher("kneel down by offense"), UNKNOWN_PLAYER);
    }

    #[test]
    fn passer_and_receiver_come_from_the_completion_clause() {
        let text = "Riley Leonard pass complete to Jordan Faison for 23 yds";
        assert_eq!(passer(text), "Riley Leonard");
        assert_eq!(receiver(text), "Jordan Faison");

        let incomplete = "CJ Carr pass incomplete to Jaden Greathouse";
        assert_eq!(passer(incomplete), "CJ Carr");
        assert_eq!(receiver(incomplete), "Jaden Greathouse");
    }

    #[test]
    fn receiver_stops_before_trailing_connectives() {
        assert_eq!(receiver("pass complete to Trey Ford for 5 yds"), "Trey Ford");
        assert_eq!(
            receiver("pass complete to Jaden Greathouse, out of bounds"),
            "Jaden Greathouse"
        );
        assert_eq!(receiver("pass incomplete to Eli Raridon at the goal line"), "Eli Raridon");
    }

    #[test]
    fn receiver_falls_back_to_the_sentinel_on_sacks() {
        assert_eq!(receiver("Riley Leonard sacked for a loss of 7 yds"), UNKNOWN_PLAYER);
    }

    #[test]
    fn kicking_probes_find_the_kicker() {
        assert_eq!(punter("James Rendell punt for 43 yds"), "James Rendell");
        assert_eq!(kickoff_kicker("Adon Shuler kickoff for 65 yds"), "Adon Shuler");
        assert_eq!(
            field_goal_kicker("Mitch Jeter field goal attempt from 32 yds is good"),
            "Mitch Jeter"
        );
        assert_eq!(
            extra_point_kicker("Mitch Jeter extra point is good"),
            "Mitch Jeter"
        );
    }

    #[test]
    fn penalized_player_and_timeout_team_share_the_name_pattern() {
        assert_eq!(penalized_player("Howard Cross penalty, offside"), "Howard Cross");
        assert_eq!(timeout_team("Notre Dame timeout, 30 seconds"), "Notre Dame");
        assert_eq!(timeout_team("Official review of the previous play"), UNKNOWN_PLAYER);
    }

    #[test]
    fn return_yards_parses_the_return_clause() {
        assert_eq!(
            return_yards("Adon Shuler kickoff for 65 yds , Jordan Faison return for 20 yds"),
            20
        );
        assert_eq!(return_yards("blocked punt returned by Jack Kiser for 12 yards"), 12);
        assert_eq!(return_yards("return for -2 yds to the ND 18"), -2);
    }

    #[test]
    fn return_yards_defaults_to_zero_without_a_return_clause() {
        assert_eq!(return_yards("Jack Ressler kickoff for 65 yds for a touchback"), 0);
        assert_eq!(return_yards(""), 0);
    }

    #[test]
    fn contains_ci_ignores_case() {
        assert!(contains_ci("pass INTERCEPTED at the 40", "intercepted"));
        assert!(contains_ci("Punt blocked by the edge rusher", "BLOCKED"));
        assert!(!contains_ci("rush for 3 yds", "FUMBLE"));
    }
}
