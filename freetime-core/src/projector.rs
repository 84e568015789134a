//! Turns a schedule into the cells of the displayed timetable.

use crate::slot::{TIME_SLOTS, TimeSlot};
use crate::state::{DaySchedule, ScheduleState};
use crate::weekday::Weekday;

/// Marker shown in occupied cells in normal mode.
pub const OCCUPIED_MARKER: &str = "1";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    Normal,
    /// Highlight the slots with no class instead.
    FreeTime,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Normal => DisplayMode::FreeTime,
            DisplayMode::FreeTime => DisplayMode::Normal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub filled: bool,
    pub label: &'static str,
}

/// Render attributes for one `(day, slot)` cell.
///
/// Free-time mode fills the cells normal mode leaves empty and never shows
/// the occupied marker.
pub fn project(schedule: &DaySchedule, slot_label: &str, mode: DisplayMode) -> Cell {
    let occupied = schedule.contains(slot_label);
    match mode {
        DisplayMode::Normal => Cell {
            filled: occupied,
            label: if occupied { OCCUPIED_MARKER } else { "" },
        },
        DisplayMode::FreeTime => Cell {
            filled: !occupied,
            label: "",
        },
    }
}

/// Every cell of the timetable: one row per slot, one column per weekday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub mode: DisplayMode,
    rows: Vec<[Cell; 5]>,
}

impl Grid {
    pub fn project(state: &ScheduleState, mode: DisplayMode) -> Self {
        let rows = TIME_SLOTS
            .iter()
            .map(|label| Weekday::ALL.map(|day| project(state.day(day), label, mode)))
            .collect();

        Grid { mode, rows }
    }

    pub fn cell(&self, day: Weekday, slot: TimeSlot) -> Cell {
        self.rows[slot.index()][day.index()]
    }

    /// `(slot, cells in weekday order)` for each row.
    pub fn rows(&self) -> impl Iterator<Item = (TimeSlot, &[Cell; 5])> + '_ {
        TimeSlot::all().zip(self.rows.iter())
    }

    pub fn filled_count(&self) -> usize {
        self.rows.iter().flatten().filter(|cell| cell.filled).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ten_to_eleven() -> DaySchedule {
        ["10:00", "10:30"]
            .into_iter()
            .filter_map(TimeSlot::from_label)
            .collect()
    }

    #[test]
    fn test_normal_mode_marks_occupied_cells() {
        let day = ten_to_eleven();
        assert_eq!(
            project(&day, "10:00", DisplayMode::Normal),
            Cell { filled: true, label: "1" }
        );
        assert_eq!(
            project(&day, "11:00", DisplayMode::Normal),
            Cell { filled: false, label: "" }
        );
    }

    #[test]
    fn test_free_time_mode_inverts_without_marker() {
        let day = ten_to_eleven();
        assert_eq!(
            project(&day, "10:00", DisplayMode::FreeTime),
            Cell { filled: false, label: "" }
        );
        assert_eq!(
            project(&day, "11:00", DisplayMode::FreeTime),
            Cell { filled: true, label: "" }
        );
    }

    #[test]
    fn test_grid_modes_partition_all_cells() {
        let state = ScheduleState::empty()
            .insert(Weekday::Monday, &["10:00", "10:30"])
            .unwrap()
            .insert(Weekday::Thursday, &["18:30"])
            .unwrap();

        let normal = Grid::project(&state, DisplayMode::Normal);
        let free = Grid::project(&state, DisplayMode::FreeTime);

        assert_eq!(normal.filled_count(), 3);
        assert_eq!(free.filled_count(), 95 - 3);
        assert_eq!(normal, Grid::project(&state, DisplayMode::Normal));

        let last = TimeSlot::from_label("18:30").unwrap();
        assert!(normal.cell(Weekday::Thursday, last).filled);
        assert!(!free.cell(Weekday::Thursday, last).filled);
    }

    #[test]
    fn test_toggle_flips_mode() {
        assert_eq!(DisplayMode::Normal.toggled(), DisplayMode::FreeTime);
        assert_eq!(DisplayMode::FreeTime.toggled().toggled(), DisplayMode::FreeTime);
    }
}
