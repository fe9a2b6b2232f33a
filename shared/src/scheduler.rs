use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Identifies one scheduled callback. Handles are never reused, so a stale
/// handle can't be confused with a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle(u64);

/// Deferred-callback queue driven from a single thread.
///
/// Nothing fires on its own: the owner polls [`Scheduler::take_due`] with the
/// current time and runs whatever comes back. Time is always passed in, which
/// keeps the queue deterministic under test.
#[derive(Debug, Default)]
pub struct Scheduler {
    next_id: u64,
    pending: BTreeMap<TimerHandle, Instant>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule_at(&mut self, due: Instant) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.pending.insert(handle, due);
        handle
    }

    pub fn schedule_after(&mut self, now: Instant, delay: Duration) -> TimerHandle {
        self.schedule_at(now + delay)
    }

    /// Returns true if the handle was still pending.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.pending.remove(&handle).is_some()
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.contains_key(&handle)
    }

    pub fn deadline(&self, handle: TimerHandle) -> Option<Instant> {
        self.pending.get(&handle).copied()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.values().min().copied()
    }

    /// Remove and return every handle due at or before `now`, earliest first.
    /// Handles with the same deadline come out in scheduling order.
    pub fn take_due(&mut self, now: Instant) -> Vec<TimerHandle> {
        let mut due: Vec<(Instant, TimerHandle)> = self
            .pending
            .iter()
            .filter(|&(_, &deadline)| deadline <= now)
            .map(|(&handle, &deadline)| (deadline, handle))
            .collect();
        due.sort();
        for (_, handle) in &due {
            self.pending.remove(handle);
        }
        due.into_iter().map(|(_, handle)| handle).collect()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn nothing_fires_before_its_deadline() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        let handle = scheduler.schedule_after(start, 100 * MS);
        assert!(scheduler.take_due(start + 99 * MS).is_empty());
        assert_eq!(scheduler.take_due(start + 100 * MS), vec![handle]);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn due_handles_come_out_in_deadline_order() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        let late = scheduler.schedule_after(start, 30 * MS);
        let early = scheduler.schedule_after(start, 10 * MS);
        let tie = scheduler.schedule_after(start, 10 * MS);
        let future = scheduler.schedule_after(start, 500 * MS);

        assert_eq!(scheduler.next_deadline(), Some(start + 10 * MS));
        assert_eq!(scheduler.take_due(start + 50 * MS), vec![early, tie, late]);
        assert!(scheduler.is_pending(future));
        assert_eq!(scheduler.deadline(future), Some(start + 500 * MS));
        assert_eq!(scheduler.len(), 1);
    }

    #[test]
    fn cancelled_handles_never_fire() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        let handle = scheduler.schedule_at(start);
        assert!(scheduler.cancel(handle));
        assert!(!scheduler.cancel(handle));
        assert!(scheduler.take_due(start + 1000 * MS).is_empty());
        assert_eq!(scheduler.next_deadline(), None);
    }

    #[test]
    fn handles_are_not_reused() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        let first = scheduler.schedule_at(start);
        scheduler.clear();
        let second = scheduler.schedule_at(start);
        assert_ne!(first, second);
        assert!(!scheduler.is_pending(first));
    }
}
