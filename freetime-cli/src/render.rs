//! Terminal rendering for freetime types.
//!
//! Normal-mode classes are drawn on blue, free slots on yellow, and unfilled
//! cells as a dimmed dot.

use freetime_core::{Cell, DisplayMode, Grid, ScheduleEntry, Weekday};
use owo_colors::OwoColorize;

/// Width of one grid column.
const CELL_WIDTH: usize = 5;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for DisplayMode {
    fn render(&self) -> String {
        match self {
            DisplayMode::Normal => "Classes".blue().bold().to_string(),
            DisplayMode::FreeTime => "Free time".yellow().bold().to_string(),
        }
    }
}

impl Render for ScheduleEntry {
    fn render(&self) -> String {
        format!(
            "{} {}",
            self.day.name().bold(),
            self.range.to_string().dimmed()
        )
    }
}

fn render_cell(cell: Cell, mode: DisplayMode) -> String {
    if !cell.filled {
        return format!("{:^CELL_WIDTH$}", "·").dimmed().to_string();
    }

    let text = format!("{:^CELL_WIDTH$}", cell.label);
    match mode {
        DisplayMode::Normal => text.white().on_blue().to_string(),
        DisplayMode::FreeTime => text.black().on_yellow().to_string(),
    }
}

impl Render for Grid {
    fn render(&self) -> String {
        let mut lines = Vec::new();

        let header: String = Weekday::ALL
            .iter()
            .map(|day| format!("{:^CELL_WIDTH$}", day.key()))
            .collect();
        lines.push(format!("{:6}{}", "", header.bold()));

        for (slot, cells) in self.rows() {
            let row: String = cells.iter().map(|cell| render_cell(*cell, self.mode)).collect();
            lines.push(format!("{:6}{}", slot.label().dimmed(), row));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use freetime_core::projector::OCCUPIED_MARKER;
    use freetime_core::{ScheduleState, TimeSlot};

    use super::*;

    fn one_class() -> ScheduleState {
        ScheduleState::empty().insert(Weekday::Tuesday, &["10:00"]).unwrap()
    }

    fn occupied_normal_cell() -> String {
        render_cell(Cell { filled: true, label: "1" }, DisplayMode::Normal)
    }

    #[test]
    fn test_filled_and_empty_cells_render_differently() {
        let normal = occupied_normal_cell();
        let free = render_cell(Cell { filled: true, label: "" }, DisplayMode::FreeTime);
        let empty = render_cell(Cell { filled: false, label: "" }, DisplayMode::Normal);

        assert_ne!(normal, free);
        assert_ne!(normal, empty);
        assert_ne!(free, empty);
        assert_eq!(
            empty,
            render_cell(Cell { filled: false, label: "" }, DisplayMode::FreeTime)
        );
    }

    #[test]
    fn test_normal_grid_shows_marker_for_class() {
        let grid = Grid::project(&one_class(), DisplayMode::Normal);
        let rendered = grid.render();

        assert_eq!(rendered.matches(&occupied_normal_cell()).count(), 1);
        assert_eq!(rendered.lines().count(), 1 + TimeSlot::all().count());
    }

    #[test]
    fn test_free_time_grid_has_no_marker() {
        let grid = Grid::project(&one_class(), DisplayMode::FreeTime);
        let rendered = grid.render();

        assert!(!rendered.contains(&occupied_normal_cell()));
        assert!(!rendered.contains(&format!("{:^CELL_WIDTH$}", OCCUPIED_MARKER)));
    }
}
