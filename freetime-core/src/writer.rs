//! Single background writer for schedule persistence.
//!
//! Jobs are applied one at a time in submission order, so two quick edits can
//! never interleave their writes. Each job writes a full snapshot of every day.

use std::sync::Arc;

use slog::{Logger, debug, warn};
use tokio::sync::{mpsc, oneshot};

use crate::error::{ScheduleError, ScheduleResult};
use crate::storage::{Records, Storage};

enum Job {
    Write(Records),
    Clear,
    /// Completes once every earlier job has been applied.
    Barrier,
}

struct Request {
    job: Job,
    done: oneshot::Sender<ScheduleResult<()>>,
}

/// Outcome of a submitted job. Dropping it without waiting is fine.
#[must_use = "dropping a PendingWrite ignores write failures"]
pub struct PendingWrite(oneshot::Receiver<ScheduleResult<()>>);

impl PendingWrite {
    pub async fn wait(self) -> ScheduleResult<()> {
        self.0
            .await
            .unwrap_or_else(|_| Err(ScheduleError::StorageWrite("writer has stopped".into())))
    }
}

#[derive(Clone)]
pub struct PersistWriter {
    tx: mpsc::UnboundedSender<Request>,
}

impl PersistWriter {
    /// Start the writer task. Must be called from within a tokio runtime.
    pub fn spawn(storage: Arc<dyn Storage>, logger: Logger) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<Request>();

        tokio::spawn(async move {
            while let Some(Request { job, done }) = rx.recv().await {
                let result = match job {
                    Job::Barrier => Ok(()),
                    job => apply(Arc::clone(&storage), job).await,
                };

                match &result {
                    Ok(()) => debug!(logger, "Schedule storage updated"),
                    Err(e) => warn!(logger, "Schedule storage update failed"; "error" => %e),
                }

                // The submitter may have dropped its PendingWrite.
                let _ = done.send(result);
            }
        });

        PersistWriter { tx }
    }

    pub fn write(&self, records: Records) -> PendingWrite {
        self.submit(Job::Write(records))
    }

    pub fn clear(&self) -> PendingWrite {
        self.submit(Job::Clear)
    }

    /// Wait until every job submitted before this call has been applied.
    pub async fn flush(&self) -> ScheduleResult<()> {
        self.submit(Job::Barrier).wait().await
    }

    fn submit(&self, job: Job) -> PendingWrite {
        let (done, rx) = oneshot::channel();
        // If the task is gone the request is dropped and `rx` reports it.
        let _ = self.tx.send(Request { job, done });
        PendingWrite(rx)
    }
}

async fn apply(storage: Arc<dyn Storage>, job: Job) -> ScheduleResult<()> {
    tokio::task::spawn_blocking(move || match job {
        Job::Write(records) => storage.write_all(&records),
        Job::Clear => storage.clear(),
        Job::Barrier => Ok(()),
    })
    .await
    .map_err(|e| ScheduleError::StorageWrite(e.to_string()))?
}
