//! Latest-pending-work cell for edit debouncing.
//!
//! Editors report a change on every keystroke, but the pipeline should only
//! run once typing pauses. A [`Debouncer`] holds at most one pending value:
//! scheduling new work drops whatever was pending and restarts the quiet
//! interval. Time is passed in by the caller, so the cell never sleeps and
//! never spawns anything.

use std::time::{Duration, Instant};

use log::trace;

use crate::config::DEFAULT_DEBOUNCE_MS;

#[derive(Debug)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

/// Single-slot debounce cell.
///
/// # Example
///
/// ```
/// # use std::time::{Duration, Instant};
/// # use mindgraph::Debouncer;
/// let mut debouncer = Debouncer::new(Duration::from_millis(100));
/// let start = Instant::now();
///
/// debouncer.schedule("first", start);
/// debouncer.schedule("second", start + Duration::from_millis(50));
///
/// assert_eq!(debouncer.poll(start + Duration::from_millis(100)), None);
/// assert_eq!(debouncer.poll(start + Duration::from_millis(150)), Some("second"));
/// assert_eq!(debouncer.poll(start + Duration::from_millis(500)), None);
/// ```
#[derive(Debug)]
pub struct Debouncer<T> {
    quiet: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    /// Create a debouncer that fires `quiet` after the last scheduled work.
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// The quiet interval.
    pub fn quiet(&self) -> Duration {
        self.quiet
    }

    /// Replace any pending work with `value`, due `quiet` after `now`.
    ///
    /// Returns the superseded value, if there was one.
    pub fn schedule(&mut self, value: T, now: Instant) -> Option<T> {
        let deadline = now + self.quiet;
        let superseded = self.pending.replace(Pending { value, deadline });
        if superseded.is_some() {
            trace!("Pending work superseded");
        }
        superseded.map(|pending| pending.value)
    }

    /// Take the pending value if its deadline has passed at `now`.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if self.pending.as_ref()?.deadline > now {
            return None;
        }
        self.pending.take().map(|pending| pending.value)
    }

    /// Drop pending work without running it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|pending| pending.value)
    }

    /// When the pending work becomes due, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DEBOUNCE_MS))
    }
}
