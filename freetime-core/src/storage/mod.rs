//! Key-value persistence boundary for the schedule.

mod file;
mod memory;

use std::collections::BTreeMap;

use crate::error::ScheduleResult;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Flat string records keyed by weekday key (`MON`..`FRI`).
pub type Records = BTreeMap<String, String>;

/// Where the schedule's records live between runs.
pub trait Storage: Send + Sync {
    /// Every stored record. A store that was never written yields no records.
    fn read_all(&self) -> ScheduleResult<Records>;

    /// Replace all stored records with `records`.
    fn write_all(&self, records: &Records) -> ScheduleResult<()>;

    /// Remove every record.
    fn clear(&self) -> ScheduleResult<()>;
}
