//! Report configuration.
//!
//! Configuration is an explicit value passed by reference to the reporter.
//! There is no ambient global: the host constructs a [`ReportConfig`] once at
//! startup and hands it to whichever component emits reports.

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use thiserror::Error;

/// Maximum number of leading backtrace frames rendered in a report.
///
/// The limit is strictly positive by construction; a zero limit is rejected
/// at the boundary rather than clamped, so a rendered report always has room
/// for at least one frame when the backtrace is non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct BacktraceLimit(NonZeroUsize);

/// Rejection of a non-positive backtrace limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("backtrace limit must be positive, got {0}")]
pub struct InvalidBacktraceLimit(
    /// The rejected frame count.
    pub usize,
);

impl BacktraceLimit {
    /// The default limit of 10 frames.
    pub const DEFAULT: Self = match NonZeroUsize::new(10) {
        Some(n) => Self(n),
        None => panic!("10 is non-zero"),
    };

    /// Create a limit from an already-positive count.
    #[must_use]
    pub const fn new(frames: NonZeroUsize) -> Self {
        Self(frames)
    }

    /// The limit as a plain frame count.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for BacktraceLimit {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for BacktraceLimit {
    type Error = InvalidBacktraceLimit;

    fn try_from(frames: usize) -> Result<Self, Self::Error> {
        NonZeroUsize::new(frames)
            .map(Self)
            .ok_or(InvalidBacktraceLimit(frames))
    }
}

impl From<BacktraceLimit> for usize {
    fn from(limit: BacktraceLimit) -> Self {
        limit.get()
    }
}

/// Settings consulted when a failure notification arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// How many leading backtrace frames each report may contain.
    pub backtrace_limit: BacktraceLimit,
}

impl ReportConfig {
    /// Configuration with the default 10-frame limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the backtrace limit.
    #[must_use]
    pub const fn with_backtrace_limit(mut self, limit: BacktraceLimit) -> Self {
        self.backtrace_limit = limit;
        self
    }
}
