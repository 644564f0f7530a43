//! Single-slot storage for the current unhandled exception.
//!
//! The registry is an explicit context object shared between the host's
//! capture hook (the writer) and the failure reporter (the reader). It holds
//! at most one exception; a later capture overwrites an earlier one. The
//! host owns its lifetime and is responsible for clearing it between runs.

use crate::exception::CapturedException;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Holds the most recently captured unhandled exception, if any.
///
/// Test runners are assumed to drive captures and failure notifications
/// sequentially, so the mutex exists only to let a capture hook on another
/// thread write the slot safely, not to arbitrate contention.
#[derive(Debug, Default)]
pub struct ExceptionRegistry {
    slot: Mutex<Option<CapturedException>>,
}

impl ExceptionRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an exception, overwriting any previous one.
    pub fn set(&self, exception: CapturedException) {
        *self.lock() = Some(exception);
    }

    /// A copy of the stored exception, leaving the slot intact.
    #[must_use]
    pub fn get(&self) -> Option<CapturedException> {
        self.lock().clone()
    }

    /// Remove and return the stored exception.
    #[must_use = "discarding the taken exception loses the capture; use clear() to reset"]
    pub fn take(&self) -> Option<CapturedException> {
        self.lock().take()
    }

    /// Empty the slot.
    pub fn clear(&self) {
        *self.lock() = None;
    }

    /// Whether no exception is currently stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_none()
    }

    // A capture hook often runs on a thread that is about to unwind, so a
    // poisoned mutex is expected traffic rather than a fatal condition.
    fn lock(&self) -> MutexGuard<'_, Option<CapturedException>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
