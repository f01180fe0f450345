use std::error::Error;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A generation abandoned between rows, with how far it got. Rows run in
/// parallel, so `completed_rows` counts finished rows, not a prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled {
    pub completed_rows: usize,
    pub total_rows: usize,
}

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "field generation cancelled after {} of {} rows",
            self.completed_rows, self.total_rows
        )
    }
}

impl Error for Cancelled {}

/// Polled at the start of every row. Once it reports true the partially
/// computed field is discarded.
pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// Shared stop switch. Clones observe the same state, so one clone can be
/// handed to the generator while another is kept by whoever stops it.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag {
    raised: Arc<AtomicBool>,
}

impl CancelFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.raised.store(true, Ordering::Release);
    }
}

impl CancelToken for CancelFlag {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.raised.load(Ordering::Acquire)
    }
}

// Lets a closure decide, e.g. to stop after a row budget.
impl<F> CancelToken for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}
