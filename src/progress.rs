// src/progress.rs
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Answer from a progress sink after each term.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signal {
    Continue,
    Cancel,
}

/// Lightweight progress reporting used by the lookup loop.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of terms.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called after term `index` (1-based) of `total` is done.
    /// Returning `Signal::Cancel` stops the batch before the next term.
    fn item_done(&mut self, _index: usize, _total: usize) -> Signal {
        Signal::Continue
    }

    /// Called at the end, finished or cancelled.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// (current, total) after a term completes. Displays as "3 out of 10".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProgressEvent {
    pub current: usize,
    pub total: usize,
}

impl ProgressEvent {
    pub fn new(current: usize, total: usize) -> Self {
        Self { current, total }
    }

    /// Rounded percentage, 0 when there is nothing to do.
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.current as f64 / self.total as f64) * 100.0).round() as u32
    }

    pub fn fraction(&self) -> f32 {
        if self.total == 0 { 0.0 } else { self.current as f32 / self.total as f32 }
    }
}

impl fmt::Display for ProgressEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} out of {}", self.current, self.total)
    }
}

/// Shared cancel request, set from a UI thread and read at term boundaries.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    pub fn signal(&self) -> Signal {
        if self.is_cancelled() { Signal::Cancel } else { Signal::Continue }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_text_and_percent() {
        let ev = ProgressEvent::new(1, 3);
        assert_eq!(ev.to_string(), "1 out of 3");
        assert_eq!(ev.percent(), 33);
        assert_eq!(ProgressEvent::new(2, 3).percent(), 67);
        assert_eq!(ProgressEvent::new(0, 0).percent(), 0);
    }

    #[test]
    fn cancel_flag_is_shared_between_clones() {
        let flag = CancelFlag::new();
        let other = flag.clone();
        assert_eq!(other.signal(), Signal::Continue);
        flag.cancel();
        assert_eq!(other.signal(), Signal::Cancel);
        other.reset();
        assert!(!flag.is_cancelled());
    }
}
