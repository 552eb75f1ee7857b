//! Bounded worker pool
//!
//! Runs one independent task per input item with at most `max_workers` tasks
//! in flight, and hands back the results in input order.

use std::future::Future;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinError;

/// Fixed-size pool of concurrent workers
#[derive(Debug, Clone)]
pub struct WorkerPool {
    semaphore: Arc<Semaphore>,
    max_workers: usize,
}

impl WorkerPool {
    /// Creates a pool allowing `max_workers` concurrent tasks (at least one)
    pub fn new(max_workers: usize) -> Self {
        let max_workers = max_workers.max(1);
        Self {
            semaphore: Arc::new(Semaphore::new(max_workers)),
            max_workers,
        }
    }

    /// Returns the number of concurrent workers
    pub fn max_workers(&self) -> usize {
        self.max_workers
    }

    /// Runs `task` over every item and waits for all of them
    ///
    /// Every item gets its own spawned task; a task waits for a worker permit
    /// before its future is polled. The returned vector has one entry per item,
    /// in the same order as `items`. A task that panicked yields its
    /// `JoinError` without affecting the others.
    pub async fn map<T, F, Fut>(&self, items: Vec<T>, task: F) -> Vec<Result<Fut::Output, JoinError>>
    where
        F: Fn(T) -> Fut,
        Fut: Future + Send + 'static,
        Fut::Output: Send + 'static,
    {
        let mut handles = Vec::with_capacity(items.len());

        for item in items {
            let work = task(item);
            let semaphore = Arc::clone(&self.semaphore);

            handles.push(tokio::spawn(async move {
                let _permit = semaphore.acquire_owned().await;
                work.await
            }));
        }

        let mut results = Vec::with_capacity(handles.len());
        for handle in handles {
            results.push(handle.await);
        }
        results
    }
}
