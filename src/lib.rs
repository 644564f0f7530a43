//! Reporting for exceptions captured out-of-band during test runs.
//!
//! A test harness can register an exception that surfaced outside the normal
//! assertion failure path (a background thread, an async callback, a panic
//! hook) in a [`registry::ExceptionRegistry`]. When the harness signals that
//! an example failed, a [`reporter::FailureReporter`] renders the stored
//! exception as a fixed-format text block with a truncated backtrace and
//! writes it to the configured output sink.

pub mod config;
pub mod exception;
pub mod registry;
pub mod report;
pub mod reporter;
