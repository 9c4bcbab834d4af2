//! Timestamp source for note create/edit stamps.
//!
//! # Responsibility
//! - Produce the human-readable `last_modified` string.
//! - Let tests substitute deterministic time.

use chrono::Local;
use std::cell::Cell;

/// `ctime`-style layout, e.g. `Sat Oct 17 09:05:01 2026`.
pub const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Source of the current modification timestamp.
pub trait Clock {
    fn now(&self) -> String;
}

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> String {
        Local::now().format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Deterministic clock yielding `tick-1`, `tick-2`, ... on each call.
///
/// Every call returns a distinct value, so edits within the same wall-clock
/// second still produce a new timestamp.
#[derive(Debug, Default)]
pub struct SequenceClock {
    ticks: Cell<u64>,
}

impl SequenceClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for SequenceClock {
    fn now(&self) -> String {
        let next = self.ticks.get() + 1;
        self.ticks.set(next);
        format!("tick-{next}")
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> String {
        (**self).now()
    }
}
