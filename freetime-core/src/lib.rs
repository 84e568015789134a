//! Core types for the freetime weekly schedule.
//!
//! - `ScheduleState` and `DaySchedule` hold which half-hour slots are taken on each weekday
//! - `ScheduleStore` owns the authoritative state and persists it through a `Storage`
//! - `projector` turns a state into the displayed grid, normally or as free time

pub mod codec;
pub mod config;
pub mod error;
pub mod projector;
pub mod slot;
pub mod state;
pub mod storage;
pub mod store;
pub mod weekday;
pub mod writer;

pub use error::{ScheduleError, ScheduleResult};
pub use projector::{project, Cell, DisplayMode, Grid};
pub use slot::{SlotRange, TimeSlot, TIME_SLOTS};
pub use state::{DaySchedule, ScheduleEntry, ScheduleState};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::ScheduleStore;
pub use weekday::Weekday;
