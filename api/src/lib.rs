pub mod cfbd;
pub mod classify;
pub mod client;
pub mod drives;
pub mod result;
pub mod schema;
pub mod text;

use serde::Serialize;
use std::fmt;

// ---------------------------------------------------------------------------
// Domain types — clean model, independent of the CFBD wire format
// ---------------------------------------------------------------------------

/// Strongly-typed identifier for a game event. Prefer this over plain strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct GameEventId(String);

impl GameEventId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for GameEventId {
    fn from(id: String) -> Self {
        GameEventId(id)
    }
}

impl From<&str> for GameEventId {
    fn from(id: &str) -> Self {
        GameEventId(id.to_string())
    }
}

impl fmt::Display for GameEventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Game clock at the start of a play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameClock {
    /// Period number. 1-4 for regulation, 5+ for overtime periods.
    pub period: u8,
    /// Seconds remaining in the period. 900 for the first play of a period,
    /// 0 for untimed downs.
    pub seconds_remaining: u16,
}

/// Down number. The raw feed carries 0 on kick plays; anything outside 1-4
/// normalizes to no down at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Down {
    First,
    Second,
    Third,
    Fourth,
}

impl Down {
    pub fn from_raw(raw: i8) -> Option<Down> {
        match raw {
            1 => Some(Down::First),
            2 => Some(Down::Second),
            3 => Some(Down::Third),
            4 => Some(Down::Fourth),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Down::First => 1,
            Down::Second => 2,
            Down::Third => 3,
            Down::Fourth => 4,
        }
    }
}

/// Down, distance, field position, and possession at the start of a play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldPosition {
    /// None when not applicable (e.g. kickoffs).
    pub down: Option<Down>,
    /// None when not applicable (e.g. kickoffs).
    pub distance_to_first_down: Option<u16>,
    /// Yard line on the field. 0 is the offense's own goal line, 100 the
    /// defense's goal line.
    pub yard_line: u8,
    /// Name of the team with possession.
    pub possession_team: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TurnoverKind {
    Fumble,
    Interception,
    Downs,
}

/// Context for a play on which possession changed hands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Turnover {
    pub kind: TurnoverKind,
    /// Team that recovered the ball.
    pub recovered_by: String,
    /// Yard line where the turnover occurred.
    pub yard_line: u8,
    /// Yards gained on the return.
    pub return_yards: i16,
    pub is_touchdown: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PenaltyKind {
    Holding,
    Offside,
}

/// Context for a penalty assessed on a play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Penalty {
    pub kind: PenaltyKind,
    /// Team committing the penalty.
    pub team: String,
    /// Yards assessed.
    pub yardage: u16,
    pub is_offsetting: bool,
    pub is_declined: bool,
    pub occurred_during_play: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScoringKind {
    // Offensive scoring plays.
    OffensiveTouchdown,
    FieldGoal,
    ExtraPoint,
    TwoPointConversion,
    // Defensive scoring plays.
    Safety,
    DefensiveTouchdown,
    DefensiveExtraPointReturn,
}

/// Context for a play on which points were scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scoring {
    pub kind: ScoringKind,
    /// Points scored (e.g. 2 for a safety or defensive return).
    pub points: u8,
    /// True if a kick or extra point was blocked.
    pub is_blocked: bool,
    /// True if a blocked kick was returned for a score.
    pub is_returned: bool,
    /// Team that scored on the return.
    pub return_team: Option<String>,
}

// ---------------------------------------------------------------------------
// Game events
// ---------------------------------------------------------------------------

/// A running play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RushEvent {
    pub id: GameEventId,
    pub clock: GameClock,
    pub field_position: FieldPosition,
    pub turnover: Option<Turnover>,
    pub penalties: Vec<Penalty>,
    pub scoring: Option<Scoring>,
    /// Player carrying the ball.
    pub rusher: String,
    pub yards_gained: i16,
    /// True if the ball was fumbled, even when recovered by the same team.
    pub is_fumble: bool,
}

/// A forward pass attempt, including sacks and interceptions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassAttemptEvent {
    pub id: GameEventId,
    pub clock: GameClock,
    pub field_position: FieldPosition,
    pub turnover: Option<Turnover>,
    pub penalties: Vec<Penalty>,
    pub scoring: Option<Scoring>,
    /// Player attempting the pass.
    pub passer: String,
    /// Player targeted or catching the pass.
    pub receiver: String,
    pub is_complete: bool,
    pub yards_gained: i16,
    pub is_interception: bool,
    /// True if a fumble occurred after the catch.
    pub is_fumble_after_catch: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KickoffEvent {
    pub id: GameEventId,
    pub clock: GameClock,
    pub field_position: FieldPosition,
    pub turnover: Option<Turnover>,
    pub penalties: Vec<Penalty>,
    pub scoring: Option<Scoring>,
    /// Player kicking off.
    pub kicker: String,
    /// Yard line where the ball was kicked.
    pub yard_line: u8,
    pub return_yards: i16,
    pub is_touchback: bool,
    pub is_out_of_bounds: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PuntEvent {
    pub id: GameEventId,
    pub clock: GameClock,
    pub field_position: FieldPosition,
    pub turnover: Option<Turnover>,
    pub penalties: Vec<Penalty>,
    pub scoring: Option<Scoring>,
    /// Player punting the ball.
    pub punter: String,
    /// Yard line where the punt occurred.
    pub yard_line: u8,
    pub return_yards: i16,
    pub is_touchback: bool,
    pub is_blocked: bool,
    /// Team receiving the punt.
    pub return_team: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldGoalAttemptEvent {
    pub id: GameEventId,
    pub clock: GameClock,
    pub field_position: FieldPosition,
    pub turnover: Option<Turnover>,
    pub penalties: Vec<Penalty>,
    pub scoring: Option<Scoring>,
    /// Player attempting the field goal.
    pub kicker: String,
    /// Yard line where the kick was attempted.
    pub yard_line: u8,
    pub is_good: bool,
    pub is_blocked: bool,
    /// True if a missed or blocked kick was returned.
    pub is_returned: bool,
    pub return_team: String,
    pub return_yards: i16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtraPointAttemptEvent {
    pub id: GameEventId,
    pub clock: GameClock,
    pub field_position: FieldPosition,
    pub turnover: Option<Turnover>,
    pub penalties: Vec<Penalty>,
    pub scoring: Option<Scoring>,
    /// Player attempting the extra point.
    pub kicker: String,
    pub is_good: bool,
    pub is_blocked: bool,
    /// True if a blocked kick was returned.
    pub is_returned: bool,
    pub return_team: String,
    pub return_yards: i16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TwoPointConversionAttemptEvent {
    pub id: GameEventId,
    pub clock: GameClock,
    pub field_position: FieldPosition,
    pub turnover: Option<Turnover>,
    pub penalties: Vec<Penalty>,
    pub scoring: Option<Scoring>,
    pub is_successful: bool,
    pub is_interception: bool,
    pub is_fumble: bool,
    /// Team that returned a failed attempt.
    pub return_team: String,
    pub return_yards: i16,
    pub is_return_touchdown: bool,
}

/// A penalty called before the snap. No play ran, so there is no
/// turnover/penalty/scoring context to carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreSnapPenaltyEvent {
    pub id: GameEventId,
    pub clock: GameClock,
    pub field_position: FieldPosition,
    /// Player committing the penalty.
    pub player: String,
    /// Yards assessed.
    pub yardage: i16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeoutEvent {
    pub id: GameEventId,
    pub clock: GameClock,
    pub field_position: FieldPosition,
    /// Team that called the timeout.
    pub team: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndOfPeriodEvent {
    pub id: GameEventId,
    pub clock: GameClock,
    pub field_position: FieldPosition,
}

/// A single play or administrative event, in game order.
///
/// The variant fixes the payload shape, so consumers match on the variant
/// instead of probing free-form fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameEvent {
    Rush(RushEvent),
    PassAttempt(PassAttemptEvent),
    Kickoff(KickoffEvent),
    Punt(PuntEvent),
    FieldGoalAttempt(FieldGoalAttemptEvent),
    ExtraPointAttempt(ExtraPointAttemptEvent),
    TwoPointConversionAttempt(TwoPointConversionAttemptEvent),
    PreSnapPenalty(PreSnapPenaltyEvent),
    Timeout(TimeoutEvent),
    EndOfPeriod(EndOfPeriodEvent),
}

impl GameEvent {
    pub fn event_type(&self) -> GameEventType {
        match self {
            GameEvent::Rush(_) => GameEventType::Rush,
            GameEvent::PassAttempt(_) => GameEventType::PassAttempt,
            GameEvent::Kickoff(_) => GameEventType::Kickoff,
            GameEvent::Punt(_) => GameEventType::Punt,
            GameEvent::FieldGoalAttempt(_) => GameEventType::FieldGoalAttempt,
            GameEvent::ExtraPointAttempt(_) => GameEventType::ExtraPointAttempt,
            GameEvent::TwoPointConversionAttempt(_) => GameEventType::TwoPointConversionAttempt,
            GameEvent::PreSnapPenalty(_) => GameEventType::PreSnapPenalty,
            GameEvent::Timeout(_) => GameEventType::Timeout,
            GameEvent::EndOfPeriod(_) => GameEventType::EndOfPeriod,
        }
    }

    pub fn id(&self) -> &GameEventId {
        match self {
            GameEvent::Rush(e) => &e.id,
            GameEvent::PassAttempt(e) => &e.id,
            GameEvent::Kickoff(e) => &e.id,
            GameEvent::Punt(e) => &e.id,
            GameEvent::FieldGoalAttempt(e) => &e.id,
            GameEvent::ExtraPointAttempt(e) => &e.id,
            GameEvent::TwoPointConversionAttempt(e) => &e.id,
            GameEvent::PreSnapPenalty(e) => &e.id,
            GameEvent::Timeout(e) => &e.id,
            GameEvent::EndOfPeriod(e) => &e.id,
        }
    }

    pub fn clock(&self) -> GameClock {
        match self {
            GameEvent::Rush(e) => e.clock,
            GameEvent::PassAttempt(e) => e.clock,
            GameEvent::Kickoff(e) => e.clock,
            GameEvent::Punt(e) => e.clock,
            GameEvent::FieldGoalAttempt(e) => e.clock,
            GameEvent::ExtraPointAttempt(e) => e.clock,
            GameEvent::TwoPointConversionAttempt(e) => e.clock,
            GameEvent::PreSnapPenalty(e) => e.clock,
            GameEvent::Timeout(e) => e.clock,
            GameEvent::EndOfPeriod(e) => e.clock,
        }
    }

    pub fn field_position(&self) -> &FieldPosition {
        match self {
            GameEvent::Rush(e) => &e.field_position,
            GameEvent::PassAttempt(e) => &e.field_position,
            GameEvent::Kickoff(e) => &e.field_position,
            GameEvent::Punt(e) => &e.field_position,
            GameEvent::FieldGoalAttempt(e) => &e.field_position,
            GameEvent::ExtraPointAttempt(e) => &e.field_position,
            GameEvent::TwoPointConversionAttempt(e) => &e.field_position,
            GameEvent::PreSnapPenalty(e) => &e.field_position,
            GameEvent::Timeout(e) => &e.field_position,
            GameEvent::EndOfPeriod(e) => &e.field_position,
        }
    }
}

/// Fieldless discriminant for [`GameEvent`], for grouping and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameEventType {
    Rush,
    PassAttempt,
    Kickoff,
    Punt,
    FieldGoalAttempt,
    ExtraPointAttempt,
    TwoPointConversionAttempt,
    PreSnapPenalty,
    Timeout,
    EndOfPeriod,
}

impl GameEventType {
    pub fn label(&self) -> &'static str {
        match self {
            GameEventType::Rush => "Rush",
            GameEventType::PassAttempt => "Pass attempt",
            GameEventType::Kickoff => "Kickoff",
            GameEventType::Punt => "Punt",
            GameEventType::FieldGoalAttempt => "Field goal attempt",
            GameEventType::ExtraPointAttempt => "Extra point attempt",
            GameEventType::TwoPointConversionAttempt => "Two-point conversion attempt",
            GameEventType::PreSnapPenalty => "Pre-snap penalty",
            GameEventType::Timeout => "Timeout",
            GameEventType::EndOfPeriod => "End of period",
        }
    }
}

/// A maximal run of consecutive game events between drive-ending plays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Drive {
    pub events: Vec<GameEvent>,
}

impl Drive {
    /// Event type of each event in the drive, in order.
    pub fn event_types(&self) -> Vec<GameEventType> {
        self.events.iter().map(GameEvent::event_type).collect()
    }
}
