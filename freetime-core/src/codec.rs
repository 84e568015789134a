//! Flat string form of a day's schedule.
//!
//! Grammar: `label ("/" label)*`, or the empty string for an empty schedule.
//! Decoding also accepts the older trailing-delimiter form (`"09:30/10:00/"`).

use crate::slot::TimeSlot;
use crate::state::DaySchedule;

pub const DELIMITER: &str = "/";

/// Result of decoding a stored string.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Decoded {
    pub schedule: DaySchedule,
    /// Non-empty tokens that are not timetable slots.
    pub rejected: Vec<String>,
}

pub fn encode(schedule: &DaySchedule) -> String {
    schedule.labels().join(DELIMITER)
}

pub fn decode(raw: &str) -> Decoded {
    let mut rejected = Vec::new();

    let schedule = raw
        .split(DELIMITER)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| {
            let slot = TimeSlot::from_label(token);
            if slot.is_none() {
                rejected.push(token.to_string());
            }
            slot
        })
        .collect();

    Decoded { schedule, rejected }
}
