//! Drive segmentation over an ordered event sequence.

use crate::{Drive, GameEvent};

/// Returns whether a game event ends the current drive.
pub fn is_end_of_drive(event: &GameEvent) -> bool {
    match event {
        // TODO: A turnover on one of these should end the drive too.
        GameEvent::Kickoff(_) | GameEvent::Rush(_) | GameEvent::PassAttempt(_) => false,
        // Periods 2 and 4 and all overtime periods (5+) end the current
        // drive; periods 1 and 3 do not.
        // TODO: The feed tends to carry only three of these per game. Find
        // out where the fourth goes.
        GameEvent::EndOfPeriod(e) => e.clock.period != 1 && e.clock.period != 3,
        // These come after a touchdown and always end a drive.
        GameEvent::ExtraPointAttempt(_) | GameEvent::TwoPointConversionAttempt(_) => true,
        // TODO: Confirm fakes and attempts wiped out by penalties.
        GameEvent::FieldGoalAttempt(_) | GameEvent::Punt(_) => true,
        // No effect on when a drive ends.
        GameEvent::PreSnapPenalty(_) | GameEvent::Timeout(_) => false,
    }
}

/// Splits an ordered event sequence into drives. A drive-ending event closes
/// its own drive, so the event after it opens a new one. Concatenating the
/// result reproduces the input exactly.
pub fn segment_into_drives(events: Vec<GameEvent>) -> Vec<Drive> {
    let mut drives = Vec::new();
    let mut current: Vec<GameEvent> = Vec::new();
    let mut previous_ended = false;

    for event in events {
        if previous_ended {
            drives.push(Drive { events: std::mem::take(&mut current) });
        }
        previous_ended = is_end_of_drive(&event);
        current.push(event);
    }

    if !current.is_empty() {
        drives.push(Drive { events: current });
    }

    drives
}
