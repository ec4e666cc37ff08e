// ABOUTME: Single-task cooperative main loop with an idle barrier
// ABOUTME: Posted jobs run in order; waiters resolve once no job is pending
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Main loop and idle barrier
//!
//! [`MainLoop`] owns one background task that drains a job queue in posting
//! order. [`IdleWaiter::wait_for_idle`] completes exactly once, the first time
//! the queue is observed empty after the call, which lets callers assert on
//! state only after every queued update has been applied. A job that panics
//! or is cancelled still counts as finished.

use async_trait::async_trait;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::errors::{AppError, AppResult};

type Job = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Something that can report when pending UI-side work has drained
#[async_trait]
pub trait IdleWaiter: Send + Sync {
    /// Resolve once no posted work is pending
    ///
    /// # Errors
    ///
    /// Returns `ResourceUnavailable` if the loop shut down before going idle
    async fn wait_for_idle(&self) -> AppResult<()>;
}

struct IdleState {
    pending: AtomicUsize,
    waiters: Mutex<Vec<oneshot::Sender<()>>>,
}

impl IdleState {
    async fn notify_if_idle(&self) {
        let mut waiters = self.waiters.lock().await;
        if self.pending.load(Ordering::Acquire) == 0 {
            for waiter in waiters.drain(..) {
                // A waiter that gave up has dropped its receiver
                let _ = waiter.send(());
            }
        }
    }
}

/// Handle to a running main loop
pub struct MainLoop {
    jobs: mpsc::UnboundedSender<Job>,
    state: Arc<IdleState>,
    worker: JoinHandle<()>,
}

impl MainLoop {
    /// Start the loop on the current tokio runtime
    #[must_use]
    pub fn spawn() -> Self {
        let (jobs, mut queue) = mpsc::unbounded_channel::<Job>();
        let state = Arc::new(IdleState {
            pending: AtomicUsize::new(0),
            waiters: Mutex::new(Vec::new()),
        });

        let worker_state = state.clone();
        let worker = tokio::spawn(async move {
            while let Some(job) = queue.recv().await {
                // Run apart so a panicking job cannot take the loop down with it
                if let Err(e) = tokio::spawn(job).await {
                    warn!(error = %e, "Main loop job did not complete");
                }
                worker_state.pending.fetch_sub(1, Ordering::AcqRel);
                worker_state.notify_if_idle().await;
            }
            // Dropped senders wake the remaining waiters with an error
            worker_state.waiters.lock().await.clear();
            debug!("Main loop queue closed");
        });

        Self {
            jobs,
            state,
            worker,
        }
    }

    /// Queue a job behind everything already posted
    ///
    /// # Errors
    ///
    /// Returns `ResourceUnavailable` if the loop has stopped
    pub fn post<F>(&self, job: F) -> AppResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.state.pending.fetch_add(1, Ordering::AcqRel);
        if self.jobs.send(Box::pin(job)).is_err() {
            self.state.pending.fetch_sub(1, Ordering::AcqRel);
            warn!("Dropped job posted to a stopped main loop");
            return Err(AppError::unavailable("main loop has stopped"));
        }
        Ok(())
    }

    /// Number of jobs posted but not yet finished
    #[must_use]
    pub fn pending(&self) -> usize {
        self.state.pending.load(Ordering::Acquire)
    }
}

impl Drop for MainLoop {
    fn drop(&mut self) {
        self.worker.abort();
    }
}

#[async_trait]
impl IdleWaiter for MainLoop {
    async fn wait_for_idle(&self) -> AppResult<()> {
        let receiver = {
            let mut waiters = self.state.waiters.lock().await;
            if self.state.pending.load(Ordering::Acquire) == 0 {
                return Ok(());
            }
            let (sender, receiver) = oneshot::channel();
            waiters.push(sender);
            receiver
        };

        receiver
            .await
            .map_err(|_| AppError::unavailable("main loop stopped before becoming idle"))
    }
}
