//! Interactive entry form for a new class.

use anyhow::Result;
use dialoguer::Select;
use freetime_core::{ScheduleEntry, SlotRange, TIME_SLOTS, Weekday};

/// Ask for a weekday, a start slot and an end slot.
///
/// The end picker only offers slots at or after the chosen start, so the
/// returned range is always valid.
pub fn prompt() -> Result<ScheduleEntry> {
    let days: Vec<String> = Weekday::ALL
        .iter()
        .map(|day| format!("{} ({})", day.name(), day.korean_name()))
        .collect();
    let day = Weekday::ALL[Select::new()
        .with_prompt("Day")
        .items(&days)
        .default(0)
        .interact()?];

    let start = Select::new()
        .with_prompt("From")
        .items(&TIME_SLOTS)
        .default(0)
        .interact()?;

    let end = start
        + Select::new()
            .with_prompt("Until")
            .items(&TIME_SLOTS[start..])
            .default(0)
            .interact()?;

    Ok(ScheduleEntry {
        day,
        range: SlotRange::new(start, end)?,
    })
}
