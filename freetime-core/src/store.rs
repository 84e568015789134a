//! The authoritative schedule and its persistence.

use std::sync::Arc;

use slog::{Logger, debug, info, warn};

use crate::codec;
use crate::error::ScheduleResult;
use crate::slot::SlotRange;
use crate::state::{ScheduleEntry, ScheduleState};
use crate::storage::{Records, Storage};
use crate::weekday::Weekday;
use crate::writer::{PendingWrite, PersistWriter};

type Observer = Box<dyn Fn(&ScheduleState) + Send>;

/// Owns the current [`ScheduleState`].
///
/// Every mutation computes the next state from the in-memory copy, notifies
/// subscribers, and queues a full overwrite of all five records. Storage is
/// never read back after [`ScheduleStore::open`].
pub struct ScheduleStore {
    state: ScheduleState,
    writer: PersistWriter,
    observers: Vec<Observer>,
    logger: Logger,
}

impl ScheduleStore {
    /// Load the persisted schedule and start the background writer.
    /// Must be called from within a tokio runtime.
    pub fn open(storage: Arc<dyn Storage>, logger: Logger) -> Self {
        let state = Self::load(storage.as_ref(), &logger);
        let writer = PersistWriter::spawn(storage, logger.clone());

        ScheduleStore {
            state,
            writer,
            observers: Vec::new(),
            logger,
        }
    }

    /// Read all five records into a state.
    ///
    /// Never fails: an unreadable store, a missing record or a garbled record
    /// all come back as empty days.
    pub fn load(storage: &dyn Storage, logger: &Logger) -> ScheduleState {
        let records = match storage.read_all() {
            Ok(records) => records,
            Err(e) => {
                warn!(logger, "Could not read schedule, starting empty"; "error" => %e);
                Records::new()
            }
        };

        let state = Weekday::ALL
            .into_iter()
            .fold(ScheduleState::empty(), |state, day| {
                let Some(raw) = records.get(day.key()) else {
                    return state;
                };
                let decoded = codec::decode(raw);
                if !decoded.rejected.is_empty() {
                    warn!(logger, "Ignoring unknown slots";
                        "day" => day.key(), "tokens" => ?decoded.rejected);
                }
                state.with_day(day, decoded.schedule)
            });

        debug!(logger, "Loaded schedule"; "empty" => state.is_empty());
        state
    }

    pub fn state(&self) -> &ScheduleState {
        &self.state
    }

    /// Register a callback that receives every new state.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: Fn(&ScheduleState) + Send + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Merge slot labels into `day` and queue the write.
    pub fn insert<S: AsRef<str>>(&mut self, day: Weekday, labels: &[S]) -> ScheduleResult<PendingWrite> {
        let next = self.state.insert(day, labels)?;
        info!(self.logger, "Added slots"; "day" => day.key(), "count" => labels.len());
        Ok(self.replace(next))
    }

    /// Merge a picked range into `day` and queue the write.
    pub fn insert_range(&mut self, day: Weekday, range: &SlotRange) -> PendingWrite {
        let next = self.state.insert_range(day, range);
        info!(self.logger, "Added slots"; "day" => day.key(), "range" => %range);
        self.replace(next)
    }

    pub fn add(&mut self, entry: &ScheduleEntry) -> PendingWrite {
        self.insert_range(entry.day, &entry.range)
    }

    /// Queue a full overwrite of all five records with the current state.
    pub fn persist(&self) -> PendingWrite {
        self.writer.write(to_records(&self.state))
    }

    /// Empty every day and remove all records.
    pub fn reset(&mut self) -> PendingWrite {
        info!(self.logger, "Resetting schedule");
        self.state = ScheduleState::empty();
        self.notify();
        self.writer.clear()
    }

    /// Wait for every queued write to land.
    pub async fn flush(&self) -> ScheduleResult<()> {
        self.writer.flush().await
    }

    fn replace(&mut self, next: ScheduleState) -> PendingWrite {
        self.state = next;
        self.notify();
        self.persist()
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer(&self.state);
        }
    }
}

/// One record per weekday, including empty ones.
pub fn to_records(state: &ScheduleState) -> Records {
    state
        .days()
        .map(|(day, schedule)| (day.key().to_string(), codec::encode(schedule)))
        .collect()
}
