//! Virtual-clock timer set.
//!
//! Owners push elapsed time in with [`TimerSet::pop_due`]/[`TimerSet::settle`]
//! from their frame tick; nothing here touches the wall clock. Cancelling is
//! just removal, so a cancelled timer can never fire late.

use std::time::Duration;

#[derive(Debug)]
struct Timer<A> {
    /// Scheduling order, used to break ties between timers due at the same instant.
    seq: u64,
    due: Duration,
    action: A,
}

#[derive(Debug)]
pub struct TimerSet<A> {
    now: Duration,
    next_seq: u64,
    pending: Vec<Timer<A>>,
}

impl<A> Default for TimerSet<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> TimerSet<A> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            pending: Vec::new(),
        }
    }

    /// Virtual time since the set was created.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn schedule_after(&mut self, delay: Duration, action: A) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Timer {
            seq,
            due: self.now.saturating_add(delay),
            action,
        });
    }

    /// Cancel every pending timer whose action matches. Returns how many were dropped.
    pub fn cancel_where(&mut self, mut predicate: impl FnMut(&A) -> bool) -> usize {
        let before = self.pending.len();
        self.pending.retain(|t| !predicate(&t.action));
        before - self.pending.len()
    }

    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        dropped
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Remove and return the earliest timer due at or before `deadline`.
    ///
    /// The clock moves to that timer's due time, so anything scheduled while
    /// handling it is measured from when it fired, not from `deadline`.
    /// Timers due at the same instant fire in scheduling order.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<A> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= deadline)
            .min_by_key(|(_, t)| (t.due, t.seq))
            .map(|(i, _)| i)?;
        let timer = self.pending.remove(index);
        self.now = self.now.max(timer.due);
        Some(timer.action)
    }

    /// Move the clock to `deadline` once every due timer has been popped.
    pub fn settle(&mut self, deadline: Duration) {
        self.now = self.now.max(deadline);
    }
}
