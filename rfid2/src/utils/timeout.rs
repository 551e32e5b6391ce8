//! Timing helpers: the clock abstraction and the single poll loop every
//! chip wait goes through.
//!
//! The driver never sleeps or reads the time directly. It asks a [`Clock`],
//! so tests can substitute [`MockClock`] and run every timeout path without
//! real delays.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::Result;

/// Monotonic millisecond clock plus a blocking pause.
pub trait Clock {
    /// Milliseconds elapsed since an arbitrary, fixed origin.
    fn now_ms(&self) -> u64;

    /// Block the caller for `ms` milliseconds.
    fn sleep_ms(&mut self, ms: u64);
}

/// Host clock backed by `Instant` and `thread::sleep`.
#[derive(Debug, Clone, Copy)]
pub struct StdClock {
    origin: Instant,
}

impl StdClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for StdClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn sleep_ms(&mut self, ms: u64) {
        std::thread::sleep(ms_duration(ms));
    }
}

/// Virtual clock for tests. Time only moves when someone sleeps (or the
/// test calls [`MockClock::advance`]). Clones share the same time source so
/// a test can keep a handle after giving one to a device.
#[derive(Debug, Clone, Default)]
pub struct MockClock {
    now: Rc<Cell<u64>>,
    slept: Rc<Cell<u64>>,
}

impl MockClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }

    /// Total virtual time spent in `sleep_ms`.
    pub fn total_slept_ms(&self) -> u64 {
        self.slept.get()
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }

    fn sleep_ms(&mut self, ms: u64) {
        // a zero-length sleep must still move time or polls never expire
        let step = ms.max(1);
        self.advance(step);
        self.slept.set(self.slept.get() + step);
    }
}

/// Convert milliseconds to Duration.
pub fn ms_duration(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Poll `done` until it returns `true` or more than `deadline_ms` have
/// elapsed, pausing `interval_ms` between polls.
///
/// Returns `Ok(false)` on timeout; what a timeout means is up to the caller.
/// Errors from the predicate abort the loop immediately.
pub fn poll_until<F>(
    clock: &mut dyn Clock,
    deadline_ms: u64,
    interval_ms: u64,
    mut done: F,
) -> Result<bool>
where
    F: FnMut() -> Result<bool>,
{
    let start = clock.now_ms();
    loop {
        if done()? {
            return Ok(true);
        }
        if clock.now_ms().saturating_sub(start) > deadline_ms {
            return Ok(false);
        }
        clock.sleep_ms(interval_ms);
    }
}
