//! Failure-notification handling.
//!
//! The host test framework registers a [`FailureReporter`] as its listener
//! for failed examples. On each notification the reporter consults the
//! [`ExceptionRegistry`] and, when an exception is stored, writes one
//! rendered report block to its output sink.

use crate::config::ReportConfig;
use crate::registry::ExceptionRegistry;
use crate::report;
use std::io::Write;
use tracing::debug;

/// Writes unhandled exception reports to an output sink.
///
/// The sink is typically standard output, but any [`Write`] implementation
/// works; tests hand in a `Vec<u8>`.
#[derive(Debug)]
pub struct FailureReporter<W> {
    output: W,
}

impl<W: Write> FailureReporter<W> {
    /// Wrap an output sink.
    #[must_use]
    pub const fn new(output: W) -> Self {
        Self { output }
    }

    /// Handle an "example failed" notification.
    ///
    /// Reads the registry; when an exception is stored, renders it with the
    /// configured backtrace limit and writes the report. When the registry is
    /// empty, nothing is emitted. Write failures are discarded: a diagnostic
    /// print must not change the test run's outcome.
    pub fn example_failed(&mut self, registry: &ExceptionRegistry, config: &ReportConfig) {
        let Some(exception) = registry.get() else {
            debug!("no unhandled exception registered; skipping report");
            return;
        };
        debug!(
            type_name = exception.type_name(),
            frames = exception.backtrace().len(),
            "emitting unhandled exception report"
        );
        let rendered = report::render(&exception, config.backtrace_limit);
        drop(self.output.write_all(rendered.as_bytes()));
        drop(self.output.flush());
    }

    /// Unwrap the reporter, returning the sink.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.output
    }
}
