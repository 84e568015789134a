//! Half-hour time slots and ranges of them.

use std::fmt;

use crate::error::{ScheduleError, ScheduleResult};

/// Row labels of the timetable, in order.
pub const TIME_SLOTS: [&str; 19] = [
    "09:30", "10:00", "10:30", "11:00", "11:30", "12:00", "12:30", "13:00", "13:30", "14:00",
    "14:30", "15:00", "15:30", "16:00", "16:30", "17:00", "17:30", "18:00", "18:30",
];

/// A position in [`TIME_SLOTS`]. Always in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot(usize);

impl TimeSlot {
    pub fn from_index(index: usize) -> Option<Self> {
        (index < TIME_SLOTS.len()).then_some(TimeSlot(index))
    }

    pub fn from_label(label: &str) -> Option<Self> {
        TIME_SLOTS.iter().position(|l| *l == label).map(TimeSlot)
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn label(self) -> &'static str {
        TIME_SLOTS[self.0]
    }

    pub fn all() -> impl Iterator<Item = TimeSlot> {
        (0..TIME_SLOTS.len()).map(TimeSlot)
    }
}

impl TryFrom<usize> for TimeSlot {
    type Error = ScheduleError;

    fn try_from(index: usize) -> ScheduleResult<Self> {
        TimeSlot::from_index(index).ok_or_else(|| {
            ScheduleError::InvalidRange(format!(
                "slot index {} is outside 0..{}",
                index,
                TIME_SLOTS.len()
            ))
        })
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Inclusive range of slot indices picked in the entry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotRange {
    start: TimeSlot,
    end: TimeSlot,
}

impl SlotRange {
    /// Fails unless `start <= end` and both fall inside [`TIME_SLOTS`].
    pub fn new(start: usize, end: usize) -> ScheduleResult<Self> {
        if start > end {
            return Err(ScheduleError::InvalidRange(format!(
                "start index {} is after end index {}",
                start, end
            )));
        }
        let end_slot = TimeSlot::try_from(end)?;

        Ok(SlotRange {
            start: TimeSlot(start),
            end: end_slot,
        })
    }

    /// Every slot of the day.
    pub fn full_day() -> Self {
        SlotRange {
            start: TimeSlot(0),
            end: TimeSlot(TIME_SLOTS.len() - 1),
        }
    }

    pub fn start(&self) -> TimeSlot {
        self.start
    }

    pub fn end(&self) -> TimeSlot {
        self.end
    }

    pub fn slots(&self) -> impl Iterator<Item = TimeSlot> {
        (self.start.0..=self.end.0).map(TimeSlot)
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.slots().map(TimeSlot::label).collect()
    }

    pub fn len(&self) -> usize {
        self.end.0 - self.start.0 + 1
    }

    /// A validated range is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for SlotRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
