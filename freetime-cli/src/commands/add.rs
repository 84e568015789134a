use anyhow::{Context, Result};
use freetime_core::{DisplayMode, Grid, ScheduleEntry, ScheduleStore, SlotRange, TimeSlot, Weekday, TIME_SLOTS};
use owo_colors::OwoColorize;

use crate::render::Render;

pub async fn run(store: &mut ScheduleStore, entry: ScheduleEntry, mode: DisplayMode) -> Result<()> {
    store
        .add(&entry)
        .wait()
        .await
        .context("Class was not saved, try adding it again")?;

    println!("{} {}", "Added".green(), entry.render());
    println!("{}", Grid::project(store.state(), mode).render());

    Ok(())
}

/// Build an entry from command-line arguments.
pub fn parse_entry(day: &str, start: &str, end: &str) -> Result<ScheduleEntry> {
    let day: Weekday = day.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    let start = parse_slot(start)?;
    let end = parse_slot(end)?;
    let range = SlotRange::new(start.index(), end.index())?;

    Ok(ScheduleEntry { day, range })
}

/// A slot given as its label ("10:30"), or as its row index.
fn parse_slot(s: &str) -> Result<TimeSlot> {
    let s = s.trim();
    let slot = match s.parse::<usize>() {
        Ok(index) => TimeSlot::from_index(index),
        Err(_) => TimeSlot::from_label(s),
    };

    slot.ok_or_else(|| {
        anyhow::anyhow!(
            "Unknown time slot '{}'. Use a label from {} to {} or an index from 0 to {}",
            s,
            TIME_SLOTS[0],
            TIME_SLOTS[TIME_SLOTS.len() - 1],
            TIME_SLOTS.len() - 1
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entry_with_labels() {
        let entry = parse_entry("mon", "09:30", "10:30").unwrap();
        assert_eq!(entry.day, Weekday::Monday);
        assert_eq!(entry.range.labels(), vec!["09:30", "10:00", "10:30"]);
    }

    #[test]
    fn test_parse_entry_with_indices() {
        let entry = parse_entry("FRI", "18", "18").unwrap();
        assert_eq!(entry.range.labels(), vec!["18:30"]);
    }

    #[test]
    fn test_parse_entry_rejects_end_before_start() {
        assert!(parse_entry("tue", "12:00", "11:00").is_err());
    }

    #[test]
    fn test_parse_entry_rejects_unknown_slot_and_day() {
        assert!(parse_entry("tue", "12:15", "13:00").is_err());
        assert!(parse_entry("tue", "0", "19").is_err());
        assert!(parse_entry("sat", "0", "1").is_err());
    }
}
