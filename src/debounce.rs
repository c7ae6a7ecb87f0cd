//! Debounced execution on a dedicated worker thread.
//!
//! [`Debouncer`] coalesces rapid [`schedule`](Debouncer::schedule) calls
//! into a single execution of the action, run with the arguments of the
//! most recent call once the quiet interval elapses with no further calls.
//! Every call supersedes whatever was pending; there is no caller-facing
//! cancel. Dropping the handle shuts the worker down and discards any
//! pending task without running it.

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Quiet interval between the last schedule call and execution.
pub const DEBOUNCE_INTERVAL: Duration = Duration::from_millis(300);

enum DebounceMsg<T> {
    Schedule(T),
    Shutdown,
}

/// Stateful owner of one cancellable scheduled task.
pub struct Debouncer<T: Send + 'static> {
    tx: Sender<DebounceMsg<T>>,
    worker: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Spawn the worker. `action` runs on the worker thread with the latest
    /// scheduled arguments whenever the interval passes quietly.
    pub fn new<F>(interval: Duration, action: F) -> Self
    where
        F: FnMut(T) + Send + 'static,
    {
        let (tx, rx) = crossbeam_channel::unbounded();
        let worker = std::thread::Builder::new()
            .name("debounce".to_string())
            .spawn(move || run_worker(rx, interval, action));
        match worker {
            Ok(handle) => Self {
                tx,
                worker: Some(handle),
            },
            Err(err) => {
                // Thread spawn only fails under resource exhaustion; a
                // debouncer with no worker degrades to dropping schedules.
                tracing::error!(
                    component = "debounce",
                    operation = "spawn",
                    error = %err,
                    "Failed to spawn debounce worker"
                );
                Self { tx, worker: None }
            }
        }
    }

    /// Replace any pending task with one carrying `args`, resetting the
    /// quiet-interval deadline.
    pub fn schedule(&self, args: T) {
        trace!(component = "debounce", operation = "schedule", "Task scheduled");
        // Sends only fail once the worker is gone, when nothing may fire anyway.
        let _ = self.tx.send(DebounceMsg::Schedule(args));
    }
}

impl<T: Send + 'static> Drop for Debouncer<T> {
    fn drop(&mut self) {
        let _ = self.tx.send(DebounceMsg::Shutdown);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

fn run_worker<T, F>(rx: Receiver<DebounceMsg<T>>, interval: Duration, mut action: F)
where
    F: FnMut(T),
{
    // The deadline of the pending task, armed by the latest schedule.
    let mut pending: Option<(T, Instant)> = None;
    loop {
        let msg = match &pending {
            Some((_, deadline)) => {
                let wait = deadline.saturating_duration_since(Instant::now());
                match rx.recv_timeout(wait) {
                    Ok(msg) => Some(msg),
                    Err(RecvTimeoutError::Timeout) => None,
                    Err(RecvTimeoutError::Disconnected) => return,
                }
            }
            None => match rx.recv() {
                Ok(msg) => Some(msg),
                Err(_) => return,
            },
        };
        match msg {
            Some(DebounceMsg::Schedule(args)) => {
                pending = Some((args, Instant::now() + interval));
            }
            Some(DebounceMsg::Shutdown) => return,
            None => {
                // Quiet interval elapsed: fire with the latest arguments.
                if let Some((args, _)) = pending.take() {
                    debug!(
                        component = "debounce",
                        operation = "fire",
                        "Debounce interval elapsed"
                    );
                    action(args);
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
