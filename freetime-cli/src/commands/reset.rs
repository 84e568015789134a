use anyhow::Result;
use freetime_core::{DisplayMode, ScheduleStore};
use owo_colors::OwoColorize;

/// Clears without asking, like the reset button it replaces.
pub async fn run(store: &mut ScheduleStore) -> Result<()> {
    store.reset().wait().await?;

    println!("{}", "Timetable cleared".red());
    super::show::run(store.state(), DisplayMode::Normal)
}
