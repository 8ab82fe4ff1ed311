//! Classification of validated CFBD plays onto the domain event taxonomy.

use log::warn;

use crate::cfbd::{CfbdPlay, PlayType};
use crate::result::ApiResult;
use crate::text;
use crate::{
    Down, EndOfPeriodEvent, ExtraPointAttemptEvent, FieldGoalAttemptEvent, FieldPosition,
    GameClock, GameEvent, GameEventId, KickoffEvent, PassAttemptEvent, PreSnapPenaltyEvent,
    PuntEvent, RushEvent, Scoring, ScoringKind, TimeoutEvent, TwoPointConversionAttemptEvent,
};

/// Maps one validated raw play onto the closed event taxonomy.
///
/// `Ok(None)` marks a valid play that is deliberately out of scope; callers
/// filter those out. An unknown `play_type` label is a hard failure so new
/// vocabulary surfaces instead of being silently guessed at.
pub fn game_event_from_cfbd_play(play: &CfbdPlay) -> ApiResult<Option<GameEvent>> {
    let play_type = PlayType::from_label(&play.play_type)?;

    let id = GameEventId::from(play.id.as_str());
    let clock = game_clock(play);
    let scoring = scoring_context(play);
    let text = play.play_text.as_str();

    let event = match play_type {
        PlayType::Rush | PlayType::RushingTouchdown => GameEvent::Rush(RushEvent {
            id,
            clock,
            field_position: field_position(play, true),
            turnover: None,
            penalties: Vec::new(),
            scoring,
            rusher: text::rusher(text),
            yards_gained: play.yards_gained,
            is_fumble: text::contains_ci(text, "FUMBLE"),
        }),

        PlayType::Pass
        | PlayType::PassReception
        | PlayType::PassIncompletion
        | PlayType::PassingTouchdown
        | PlayType::Sack
        | PlayType::Interception
        | PlayType::PassInterceptionReturn
        | PlayType::InterceptionReturnTouchdown => GameEvent::PassAttempt(PassAttemptEvent {
            id,
            clock,
            field_position: field_position(play, true),
            turnover: None,
            penalties: Vec::new(),
            scoring,
            passer: text::passer(text),
            receiver: text::receiver(text),
            is_complete: !text::contains_ci(text, "INCOMPLETE"),
            yards_gained: play.yards_gained,
            is_interception: text::contains_ci(text, "INTERCEPTED"),
            is_fumble_after_catch: text::contains_ci(text, "FUMBLE"),
        }),

        PlayType::Punt
        | PlayType::BlockedPunt
        | PlayType::BlockedPuntTouchdown
        | PlayType::PuntReturnTouchdown => GameEvent::Punt(PuntEvent {
            id,
            clock,
            field_position: field_position(play, true),
            turnover: None,
            penalties: Vec::new(),
            scoring,
            punter: text::punter(text),
            yard_line: play.yard_line,
            return_yards: text::return_yards(text),
            is_touchback: text::contains_ci(text, "TOUCHBACK"),
            is_blocked: text::contains_ci(text, "BLOCKED"),
            return_team: play.defense.clone(),
        }),

        PlayType::Kickoff | PlayType::KickoffReturnOffense | PlayType::KickoffReturnTouchdown => {
            GameEvent::Kickoff(KickoffEvent {
                id,
                clock,
                field_position: field_position(play, false),
                turnover: None,
                penalties: Vec::new(),
                scoring,
                kicker: text::kickoff_kicker(text),
                yard_line: play.yard_line,
                return_yards: text::return_yards(text),
                is_touchback: text::contains_ci(text, "TOUCHBACK"),
                is_out_of_bounds: text::contains_ci(text, "OUT OF BOUNDS"),
            })
        }

        PlayType::FieldGoal
        | PlayType::FieldGoalGood
        | PlayType::FieldGoalMissed
        | PlayType::BlockedFieldGoal
        | PlayType::BlockedFieldGoalTouchdown
        | PlayType::MissedFieldGoalReturn
        | PlayType::MissedFieldGoalReturnTouchdown => {
            GameEvent::FieldGoalAttempt(FieldGoalAttemptEvent {
                id,
                clock,
                field_position: field_position(play, true),
                turnover: None,
                penalties: Vec::new(),
                scoring,
                kicker: text::field_goal_kicker(text),
                yard_line: play.yard_line,
                is_good: !text::contains_ci(text, "NO GOOD")
                    && !text::contains_ci(text, "MISSED"),
                is_blocked: text::contains_ci(text, "BLOCKED"),
                is_returned: text::contains_ci(text, "RETURN"),
                return_team: play.defense.clone(),
                return_yards: text::return_yards(text),
            })
        }

        PlayType::ExtraPoint
        | PlayType::ExtraPointGood
        | PlayType::ExtraPointMissed
        | PlayType::BlockedPat => GameEvent::ExtraPointAttempt(ExtraPointAttemptEvent {
            id,
            clock,
            field_position: field_position(play, true),
            turnover: None,
            penalties: Vec::new(),
            scoring,
            kicker: text::extra_point_kicker(text),
            is_good: !text::contains_ci(text, "NO GOOD") && !text::contains_ci(text, "MISSED"),
            is_blocked: text::contains_ci(text, "BLOCKED"),
            is_returned: text::contains_ci(text, "RETURN"),
            return_team: play.defense.clone(),
            return_yards: text::return_yards(text),
        }),

        PlayType::TwoPointConversion
        | PlayType::TwoPointPass
        | PlayType::TwoPointRush
        | PlayType::DefensiveTwoPointConversion => {
            GameEvent::TwoPointConversionAttempt(TwoPointConversionAttemptEvent {
                id,
                clock,
                field_position: field_position(play, true),
                turnover: None,
                penalties: Vec::new(),
                scoring,
                is_successful: text::contains_ci(text, "SUCCESS"),
                is_interception: text::contains_ci(text, "INTERCEPTED"),
                is_fumble: text::contains_ci(text, "FUMBLE"),
                return_team: play.defense.clone(),
                return_yards: text::return_yards(text),
                is_return_touchdown: text::contains_ci(text, "TOUCHDOWN"),
            })
        }

        PlayType::Penalty => GameEvent::PreSnapPenalty(PreSnapPenaltyEvent {
            id,
            clock,
            field_position: field_position(play, false),
            player: text::penalized_player(text),
            yardage: play.yards_gained,
        }),

        PlayType::Timeout => GameEvent::Timeout(TimeoutEvent {
            id,
            clock,
            field_position: field_position(play, false),
            team: text::timeout_team(text),
        }),

        PlayType::EndPeriod
        | PlayType::EndOfHalf
        | PlayType::EndOfGame
        | PlayType::EndOfRegulation => GameEvent::EndOfPeriod(EndOfPeriodEvent {
            id,
            clock,
            field_position: field_position(play, false),
        }),

        PlayType::FumbleRecoveryOwn
        | PlayType::FumbleRecoveryOpponent
        | PlayType::FumbleReturnTouchdown
        | PlayType::Safety
        | PlayType::Uncategorized
        | PlayType::Placeholder => {
            warn!("Skipping play: {} ({})", play.play_type, play.id);
            return Ok(None);
        }
    };

    Ok(Some(event))
}

fn game_clock(play: &CfbdPlay) -> GameClock {
    let seconds = u32::from(play.clock.minutes) * 60 + u32::from(play.clock.seconds);
    GameClock {
        period: play.period,
        // Anything beyond a full 15-minute period is feed noise.
        seconds_remaining: seconds.min(900) as u16,
    }
}

fn scoring_context(play: &CfbdPlay) -> Option<Scoring> {
    // The feed only flags that points were scored. Default to an offensive
    // touchdown; refining the kind needs play-text analysis.
    play.scoring.then(|| Scoring {
        kind: ScoringKind::OffensiveTouchdown,
        points: 6,
        is_blocked: false,
        is_returned: false,
        return_team: None,
    })
}

fn field_position(play: &CfbdPlay, with_down_and_distance: bool) -> FieldPosition {
    let (down, distance) = if with_down_and_distance {
        (
            play.down.and_then(Down::from_raw),
            Some(play.distance.max(0) as u16),
        )
    } else {
        (None, None)
    };
    FieldPosition {
        down,
        distance_to_first_down: distance,
        yard_line: play.yard_line,
        possession_team: play.offense.clone(),
    }
}
