//! Deferred-callback scheduling.
//!
//! Every simulated delay (wallet connect, fee quote, transfer maturation) goes
//! through the [`Scheduler`] port. Production code uses [`TokioScheduler`];
//! tests drive a [`ManualScheduler`] whose clock only moves when told to.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::debug;

/// A callback run once its delay has elapsed.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Accepts a delay and a callback. Callbacks are never cancelled and always fire.
pub trait Scheduler: Send + Sync {
    fn schedule(&self, delay: Duration, task: Task);
}

/// Runs each callback on a spawned tokio task after `tokio::time::sleep`.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    handle: tokio::runtime::Handle,
}

impl TokioScheduler {
    /// Binds to the runtime the caller is running on.
    ///
    /// # Panics
    /// Panics when called outside a tokio runtime.
    pub fn current() -> Self {
        Self { handle: tokio::runtime::Handle::current() }
    }

    pub fn with_handle(handle: tokio::runtime::Handle) -> Self {
        Self { handle }
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        debug!("scheduling callback in {:?}", delay);
        self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });
    }
}

struct Entry {
    due: Duration,
    seq: u64,
    task: Task,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// BinaryHeap is a max-heap: reverse so the earliest (due, seq) pops first.
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.due.cmp(&self.due).then_with(|| other.seq.cmp(&self.seq))
    }
}

#[derive(Default)]
struct ManualQueue {
    now: Duration,
    next_seq: u64,
    entries: BinaryHeap<Entry>,
}

/// Virtual-clock scheduler for deterministic tests.
///
/// Callbacks run on the thread calling [`ManualScheduler::advance`], in due-time
/// order with ties broken by scheduling order. The queue lock is released while
/// a callback runs, so callbacks may schedule further work.
#[derive(Default)]
pub struct ManualScheduler {
    queue: Mutex<ManualQueue>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed virtual time.
    pub fn now(&self) -> Duration {
        self.queue.lock().now
    }

    /// Number of callbacks not yet run.
    pub fn pending(&self) -> usize {
        self.queue.lock().entries.len()
    }

    /// Moves the clock forward by `by`, running everything that falls due. Returns
    /// how many callbacks ran.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.queue.lock().now + by;
        let mut ran = 0;
        loop {
            let next = {
                let mut queue = self.queue.lock();
                let due = queue.entries.peek().map_or(false, |entry| entry.due <= target);
                let next = if due { queue.entries.pop() } else { None };
                queue.now = next.as_ref().map_or(target, |entry| entry.due);
                next
            };
            match next {
                Some(entry) => {
                    (entry.task)();
                    ran += 1;
                }
                None => return ran,
            }
        }
    }

    /// Runs callbacks until the queue is empty, jumping the clock as needed.
    pub fn run_until_idle(&self) -> usize {
        let mut ran = 0;
        loop {
            let next_due = {
                let queue = self.queue.lock();
                queue.entries.peek().map(|entry| entry.due.saturating_sub(queue.now))
            };
            match next_due {
                Some(wait) => ran += self.advance(wait),
                None => return ran,
            }
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        let mut queue = self.queue.lock();
        let due = queue.now + delay;
        let seq = queue.next_seq;
        queue.next_seq += 1;
        queue.entries.push(Entry { due, seq, task });
    }
}
