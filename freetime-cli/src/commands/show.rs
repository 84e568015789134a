use anyhow::Result;
use freetime_core::{DisplayMode, Grid, ScheduleState};
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(state: &ScheduleState, mode: DisplayMode) -> Result<()> {
    let grid = Grid::project(state, mode);

    println!("{}", mode.render());
    println!("{}", grid.render());
    println!(
        "{}",
        format!(
            "{} {} this week. Switch with `freetime show {}`",
            grid.filled_count(),
            slot_noun(mode, grid.filled_count()),
            mode_flag(mode.toggled())
        )
        .dimmed()
    );

    Ok(())
}

fn slot_noun(mode: DisplayMode, count: usize) -> &'static str {
    match (mode, count) {
        (DisplayMode::Normal, 1) => "class slot",
        (DisplayMode::Normal, _) => "class slots",
        (DisplayMode::FreeTime, 1) => "free slot",
        (DisplayMode::FreeTime, _) => "free slots",
    }
}

fn mode_flag(mode: DisplayMode) -> &'static str {
    match mode {
        DisplayMode::Normal => "--normal",
        DisplayMode::FreeTime => "--free",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_hint_names_the_other_mode() {
        assert_eq!(mode_flag(DisplayMode::Normal.toggled()), "--free");
        assert_eq!(mode_flag(DisplayMode::FreeTime.toggled()), "--normal");
    }

    #[test]
    fn test_slot_noun_follows_mode_and_count() {
        assert_eq!(slot_noun(DisplayMode::Normal, 1), "class slot");
        assert_eq!(slot_noun(DisplayMode::FreeTime, 95), "free slots");
    }
}
