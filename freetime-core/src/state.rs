//! Occupied slots per weekday.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::error::{ScheduleError, ScheduleResult};
use crate::slot::{SlotRange, TimeSlot};
use crate::weekday::Weekday;

/// A class as submitted from the entry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub day: Weekday,
    pub range: SlotRange,
}

/// Set of occupied slots for one weekday. Holds no duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DaySchedule {
    slots: BTreeSet<TimeSlot>,
}

impl DaySchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, label: &str) -> bool {
        TimeSlot::from_label(label).is_some_and(|slot| self.slots.contains(&slot))
    }

    pub fn contains_slot(&self, slot: TimeSlot) -> bool {
        self.slots.contains(&slot)
    }

    /// Slots in timetable order.
    pub fn iter(&self) -> impl Iterator<Item = TimeSlot> + '_ {
        self.slots.iter().copied()
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.iter().map(TimeSlot::label).collect()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Union of this schedule and `slots`.
    pub fn union<I>(&self, slots: I) -> DaySchedule
    where
        I: IntoIterator<Item = TimeSlot>,
    {
        let mut merged = self.slots.clone();
        merged.extend(slots);
        DaySchedule { slots: merged }
    }
}

impl FromIterator<TimeSlot> for DaySchedule {
    fn from_iter<T: IntoIterator<Item = TimeSlot>>(iter: T) -> Self {
        DaySchedule {
            slots: iter.into_iter().collect(),
        }
    }
}

/// Schedules for all five weekdays.
///
/// Treated as immutable: every mutation returns a new state. Days that did not
/// change are shared with the previous state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleState {
    days: [Arc<DaySchedule>; 5],
}

impl ScheduleState {
    /// A state with every day empty.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn day(&self, day: Weekday) -> &DaySchedule {
        &self.days[day.index()]
    }

    /// `(weekday, schedule)` pairs in display order.
    pub fn days(&self) -> impl Iterator<Item = (Weekday, &DaySchedule)> + '_ {
        Weekday::ALL.into_iter().map(|day| (day, self.day(day)))
    }

    pub fn is_empty(&self) -> bool {
        self.days.iter().all(|d| d.is_empty())
    }

    /// Replace one day's schedule.
    pub fn with_day(&self, day: Weekday, schedule: DaySchedule) -> Self {
        let mut days = self.days.clone();
        days[day.index()] = Arc::new(schedule);
        ScheduleState { days }
    }

    /// Merge slot labels into `day`.
    ///
    /// Fails with [`ScheduleError::InvalidRange`] when `labels` is empty or names
    /// a slot outside [`crate::TIME_SLOTS`]. Other days are left untouched.
    pub fn insert<S: AsRef<str>>(&self, day: Weekday, labels: &[S]) -> ScheduleResult<Self> {
        if labels.is_empty() {
            return Err(ScheduleError::InvalidRange("no slots selected".into()));
        }

        let slots = labels
            .iter()
            .map(|label| {
                let label = label.as_ref();
                TimeSlot::from_label(label).ok_or_else(|| {
                    ScheduleError::InvalidRange(format!("'{}' is not a timetable slot", label))
                })
            })
            .collect::<ScheduleResult<Vec<_>>>()?;

        Ok(self.with_day(day, self.day(day).union(slots)))
    }

    /// Merge every slot of `range` into `day`.
    pub fn insert_range(&self, day: Weekday, range: &SlotRange) -> Self {
        self.with_day(day, self.day(day).union(range.slots()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_merges_disjoint_sets_in_any_order() {
        let a = ["09:30", "10:00"];
        let b = ["13:00", "13:30", "14:00"];

        let ab = ScheduleState::empty()
            .insert(Weekday::Tuesday, &a)
            .unwrap()
            .insert(Weekday::Tuesday, &b)
            .unwrap();
        let ba = ScheduleState::empty()
            .insert(Weekday::Tuesday, &b)
            .unwrap()
            .insert(Weekday::Tuesday, &a)
            .unwrap();

        assert_eq!(ab, ba);
        assert_eq!(
            ab.day(Weekday::Tuesday).labels(),
            vec!["09:30", "10:00", "13:00", "13:30", "14:00"]
        );
    }

    #[test]
    fn test_insert_is_idempotent() {
        let slots = ["11:00", "11:30"];
        let once = ScheduleState::empty().insert(Weekday::Monday, &slots).unwrap();
        let twice = once.insert(Weekday::Monday, &slots).unwrap();

        assert_eq!(once, twice);
        assert_eq!(twice.day(Weekday::Monday).len(), 2);
    }

    #[test]
    fn test_insert_overlapping_ranges_has_no_duplicates() {
        let state = ScheduleState::empty()
            .insert_range(Weekday::Friday, &SlotRange::new(0, 3).unwrap())
            .insert_range(Weekday::Friday, &SlotRange::new(2, 5).unwrap());

        assert_eq!(state.day(Weekday::Friday).len(), 6);
    }

    #[test]
    fn test_insert_leaves_other_days_untouched() {
        let before = ScheduleState::empty()
            .insert(Weekday::Wednesday, &["15:00"])
            .unwrap();
        let after = before.insert(Weekday::Thursday, &["16:00"]).unwrap();

        assert_eq!(after.day(Weekday::Wednesday), before.day(Weekday::Wednesday));
        assert!(after.day(Weekday::Monday).is_empty());
        assert!(after.day(Weekday::Thursday).contains("16:00"));
    }

    #[test]
    fn test_insert_rejects_empty_and_unknown_slots() {
        let state = ScheduleState::empty();
        let none: [&str; 0] = [];

        assert!(matches!(
            state.insert(Weekday::Monday, &none),
            Err(ScheduleError::InvalidRange(_))
        ));
        assert!(matches!(
            state.insert(Weekday::Monday, &["09:00"]),
            Err(ScheduleError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_full_day_insert_fills_every_slot() {
        let state = ScheduleState::empty().insert_range(Weekday::Monday, &SlotRange::full_day());
        assert_eq!(state.day(Weekday::Monday).len(), 19);
        assert!(TimeSlot::all().all(|slot| state.day(Weekday::Monday).contains_slot(slot)));
    }
}
