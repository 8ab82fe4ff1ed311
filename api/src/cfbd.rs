//! CFBD raw wire types — the shape of one record from `GET /plays`, plus the
//! closed play-type vocabulary. Classification into domain events lives in
//! `classify.rs`.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::result::{ApiError, ApiResult, ResultExt};
use crate::schema::parse_validated;

// ---------------------------------------------------------------------------
// Wire shape
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CfbdClock {
    pub minutes: u16,
    pub seconds: u16,
}

/// One raw play record as CFBD returns it. Field names match the feed keys;
/// extra keys in the response are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct CfbdPlay {
    pub id: String,
    pub drive_id: String,
    pub game_id: i64,
    pub drive_number: u16,
    pub play_number: u16,
    #[validate(length(min = 1, message = "must be non-empty"))]
    pub offense: String,
    pub offense_conference: String,
    pub offense_score: u16,
    pub defense: String,
    pub home: String,
    pub away: String,
    pub defense_conference: String,
    pub defense_score: u16,
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub period: u8,
    pub clock: CfbdClock,
    pub offense_timeouts: i16,
    pub defense_timeouts: i16,
    #[validate(range(max = 100, message = "must be at most 100"))]
    pub yard_line: u8,
    pub yards_to_goal: i16,
    /// 0 on kick plays; normalized to a real down during classification.
    pub down: Option<i8>,
    pub distance: i16,
    pub yards_gained: i16,
    pub scoring: bool,
    pub play_type: String,
    pub play_text: String,
    pub ppa: Option<String>,
    pub wallclock: DateTime<Utc>,
}

/// Validates one raw JSON record into a [`CfbdPlay`].
pub fn parse_cfbd_play(value: &serde_json::Value) -> ApiResult<CfbdPlay> {
    parse_validated::<CfbdPlay>(value)
        .map_err(ApiError::from)
        .context("Failed to parse CFBD play")
}

// ---------------------------------------------------------------------------
// Play-type vocabulary
// ---------------------------------------------------------------------------

/// Every `play_type` label CFBD is known to emit. Classification matches on
/// this enum exhaustively, so a label missing here is a hard failure at the
/// parse step rather than a silent guess downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayType {
    Rush,
    RushingTouchdown,
    Pass,
    PassReception,
    PassIncompletion,
    PassingTouchdown,
    Sack,
    Interception,
    PassInterceptionReturn,
    InterceptionReturnTouchdown,
    Punt,
    BlockedPunt,
    BlockedPuntTouchdown,
    PuntReturnTouchdown,
    Kickoff,
    KickoffReturnOffense,
    KickoffReturnTouchdown,
    FieldGoal,
    FieldGoalGood,
    FieldGoalMissed,
    BlockedFieldGoal,
    BlockedFieldGoalTouchdown,
    MissedFieldGoalReturn,
    MissedFieldGoalReturnTouchdown,
    ExtraPoint,
    ExtraPointGood,
    ExtraPointMissed,
    BlockedPat,
    TwoPointConversion,
    TwoPointPass,
    TwoPointRush,
    DefensiveTwoPointConversion,
    Penalty,
    Timeout,
    EndPeriod,
    EndOfHalf,
    EndOfGame,
    EndOfRegulation,
    FumbleRecoveryOwn,
    FumbleRecoveryOpponent,
    FumbleReturnTouchdown,
    Safety,
    Uncategorized,
    Placeholder,
}

impl PlayType {
    /// Parses a raw `play_type` label, case-insensitively. An unknown label
    /// is an [`ApiError::UnknownPlayType`] carrying the normalized text.
    pub fn from_label(label: &str) -> ApiResult<PlayType> {
        let normalized = label.trim().to_uppercase();
        let play_type = match normalized.as_str() {
            "RUSH" => PlayType::Rush,
            "RUSHING TOUCHDOWN" => PlayType::RushingTouchdown,
            "PASS" => PlayType::Pass,
            "PASS RECEPTION" => PlayType::PassReception,
            "PASS INCOMPLETION" => PlayType::PassIncompletion,
            "PASSING TOUCHDOWN" => PlayType::PassingTouchdown,
            "SACK" => PlayType::Sack,
            "INTERCEPTION" => PlayType::Interception,
            "PASS INTERCEPTION RETURN" => PlayType::PassInterceptionReturn,
            "INTERCEPTION RETURN TOUCHDOWN" => PlayType::InterceptionReturnTouchdown,
            "PUNT" => PlayType::Punt,
            "BLOCKED PUNT" => PlayType::BlockedPunt,
            "BLOCKED PUNT TOUCHDOWN" => PlayType::BlockedPuntTouchdown,
            "PUNT RETURN TOUCHDOWN" => PlayType::PuntReturnTouchdown,
            "KICKOFF" => PlayType::Kickoff,
            "KICKOFF RETURN (OFFENSE)" => PlayType::KickoffReturnOffense,
            "KICKOFF RETURN TOUCHDOWN" => PlayType::KickoffReturnTouchdown,
            "FIELD GOAL" => PlayType::FieldGoal,
            "FIELD GOAL GOOD" => PlayType::FieldGoalGood,
            "FIELD GOAL MISSED" => PlayType::FieldGoalMissed,
            "BLOCKED FIELD GOAL" => PlayType::BlockedFieldGoal,
            "BLOCKED FIELD GOAL TOUCHDOWN" => PlayType::BlockedFieldGoalTouchdown,
            "MISSED FIELD GOAL RETURN" => PlayType::MissedFieldGoalReturn,
            "MISSED FIELD GOAL RETURN TOUCHDOWN" => PlayType::MissedFieldGoalReturnTouchdown,
            "EXTRA POINT" => PlayType::ExtraPoint,
            "EXTRA POINT GOOD" => PlayType::ExtraPointGood,
            "EXTRA POINT MISSED" => PlayType::ExtraPointMissed,
            "BLOCKED PAT" => PlayType::BlockedPat,
            "TWO POINT CONVERSION" => PlayType::TwoPointConversion,
            "TWO POINT PASS" => PlayType::TwoPointPass,
            "TWO POINT RUSH" => PlayType::TwoPointRush,
            "DEFENSIVE 2PT CONVERSION" => PlayType::DefensiveTwoPointConversion,
            "PENALTY" => PlayType::Penalty,
            "TIMEOUT" => PlayType::Timeout,
            "END PERIOD" => PlayType::EndPeriod,
            "END OF HALF" => PlayType::EndOfHalf,
            "END OF GAME" => PlayType::EndOfGame,
            "END OF REGULATION" => PlayType::EndOfRegulation,
            "FUMBLE RECOVERY (OWN)" => PlayType::FumbleRecoveryOwn,
            "FUMBLE RECOVERY (OPPONENT)" => PlayType::FumbleRecoveryOpponent,
            "FUMBLE RETURN TOUCHDOWN" => PlayType::FumbleReturnTouchdown,
            "SAFETY" => PlayType::Safety,
            "UNCATEGORIZED" => PlayType::Uncategorized,
            "PLACEHOLDER" => PlayType::Placeholder,
            _ => return Err(ApiError::UnknownPlayType(normalized)),
        };
        Ok(play_type)
    }

    /// Kickoff-family plays carry no down or distance.
    pub fn is_kickoff(self) -> bool {
        matches!(
            self,
            PlayType::Kickoff | PlayType::KickoffReturnOffense | PlayType::KickoffReturnTouchdown
        )
    }
}

// ---------------------------------------------------------------------------
// Test fixtures
// ---------------------------------------------------------------------------

/// A complete raw record with the given play type and text, matching the feed
/// shape byte for byte. Tests tweak individual keys from here.
#[cfg(test)]
pub(crate) fn sample_play_value(play_type: &str, play_text: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "101391402029",
        "drive_id": "4013914020",
        "game_id": 401391402,
        "drive_number": 2,
        "play_number": 9,
        "offense": "Notre Dame",
        "offense_conference": "FBS Independents",
        "offense_score": 7,
        "defense": "Texas A&M",
        "home": "Texas A&M",
        "away": "Notre Dame",
        "defense_conference": "SEC",
        "defense_score": 3,
        "period": 2,
        "clock": { "minutes": 10, "seconds": 45 },
        "offense_timeouts": 3,
        "defense_timeouts": 2,
        "yard_line": 65,
        "yards_to_goal": 35,
        "down": 1,
        "distance": 10,
        "yards_gained": 7,
        "scoring": false,
        "play_type": play_type,
        "play_text": play_text,
        "ppa": "0.43",
        "wallclock": "2024-08-31T18:31:12.000Z"
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_complete_record_parses() {
        let value = sample_play_value("Rush", "Jeremiyah Love rush for 7 yds");
        let play = parse_cfbd_play(&value).unwrap();
        assert_eq!(play.id, "101391402029");
        assert_eq!(play.period, 2);
        assert_eq!(play.clock, CfbdClock { minutes: 10, seconds: 45 });
        assert_eq!(play.down, Some(1));
        assert_eq!(play.offense, "Notre Dame");
        assert!(!play.scoring);
    }

    #[test]
    fn a_missing_field_fails_with_the_field_name_and_context() {
        let mut value = sample_play_value("Rush", "rush for 2 yds");
        value.as_object_mut().unwrap().remove("offense");

        let err = parse_cfbd_play(&value).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Failed to parse CFBD play: "), "{message}");
        assert!(message.contains("offense"), "{message}");
    }

    #[test]
    fn constraint_violations_report_field_and_reason() {
        let mut value = sample_play_value("Rush", "rush for 2 yds");
        value["period"] = serde_json::json!(0);
        value["yard_line"] = serde_json::json!(104);

        let err = parse_cfbd_play(&value).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("period (must be at least 1)"), "{message}");
        assert!(message.contains("yard_line (must be at most 100)"), "{message}");
    }

    #[test]
    fn null_down_is_allowed() {
        let mut value = sample_play_value("Kickoff", "kickoff for 65 yds");
        value["down"] = serde_json::Value::Null;
        let play = parse_cfbd_play(&value).unwrap();
        assert_eq!(play.down, None);
    }

    #[test]
    fn play_type_labels_parse_case_insensitively() {
        assert_eq!(PlayType::from_label("Rush").unwrap(), PlayType::Rush);
        assert_eq!(PlayType::from_label("rushing touchdown").unwrap(), PlayType::RushingTouchdown);
        assert_eq!(
            PlayType::from_label("Kickoff Return (Offense)").unwrap(),
            PlayType::KickoffReturnOffense
        );
        assert_eq!(
            PlayType::from_label("Defensive 2pt Conversion").unwrap(),
            PlayType::DefensiveTwoPointConversion
        );
        assert_eq!(PlayType::from_label(" placeholder ").unwrap(), PlayType::Placeholder);
    }

    #[test]
    fn unknown_labels_surface_the_normalized_text() {
        let err = PlayType::from_label("Hook and Ladder").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown game event type from CFBD: HOOK AND LADDER"
        );
    }

    #[test]
    fn kickoff_family_is_flagged() {
        assert!(PlayType::Kickoff.is_kickoff());
        assert!(PlayType::KickoffReturnTouchdown.is_kickoff());
        assert!(!PlayType::Punt.is_kickoff());
    }
}
