//! In-memory storage, for tests and embedding.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

use super::{Records, Storage};
use crate::error::{ScheduleError, ScheduleResult};

#[derive(Debug, Default)]
pub struct MemoryStorage {
    records: Mutex<Records>,
    fail_writes: AtomicBool,
    writes: AtomicUsize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that already holds `records`, as if written by an earlier run.
    pub fn with_records(records: Records) -> Self {
        MemoryStorage {
            records: Mutex::new(records),
            ..Self::default()
        }
    }

    /// Make every following write and clear fail with `StorageWrite`.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful writes and clears so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> Records {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Records> {
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn check_writable(&self) -> ScheduleResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(ScheduleError::StorageWrite("storage is read-only".into()));
        }
        Ok(())
    }
}

impl Storage for MemoryStorage {
    fn read_all(&self) -> ScheduleResult<Records> {
        Ok(self.snapshot())
    }

    fn write_all(&self, records: &Records) -> ScheduleResult<()> {
        self.check_writable()?;
        *self.lock() = records.clone();
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn clear(&self) -> ScheduleResult<()> {
        self.check_writable()?;
        self.lock().clear();
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
