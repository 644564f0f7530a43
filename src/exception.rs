//! Captured exception data model.
//!
//! A [`CapturedException`] is the value a capture hook stores in the
//! [`ExceptionRegistry`](crate::registry::ExceptionRegistry): a type name, a
//! human-readable message, and an ordered backtrace. The capture mechanism
//! itself lives in the host harness; this crate only defines the shape of
//! what it stores.

use serde::{Deserialize, Serialize};

/// An exception that surfaced outside the normal assertion failure path.
///
/// Backtrace frames are ordered innermost first and may be empty; rendering
/// treats an empty backtrace as zero frames rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedException {
    type_name: String,
    message: String,
    #[serde(default)]
    backtrace: Vec<String>,
}

impl CapturedException {
    /// Create an exception with the given type name and message and no
    /// backtrace.
    ///
    /// # Examples
    ///
    /// ```
    /// use unhandled_report::exception::CapturedException;
    ///
    /// let exception = CapturedException::new("RuntimeError", "boom");
    /// assert_eq!(exception.type_name(), "RuntimeError");
    /// assert!(exception.backtrace().is_empty());
    /// ```
    #[must_use]
    pub fn new(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            message: message.into(),
            backtrace: Vec::new(),
        }
    }

    /// Attach backtrace frames, replacing any previously attached frames.
    ///
    /// # Examples
    ///
    /// ```
    /// use unhandled_report::exception::CapturedException;
    ///
    /// let exception = CapturedException::new("RuntimeError", "boom")
    ///     .with_backtrace(["a.rb:1", "a.rb:2"]);
    /// assert_eq!(exception.backtrace().len(), 2);
    /// ```
    #[must_use]
    pub fn with_backtrace<I, S>(mut self, frames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.backtrace = frames.into_iter().map(Into::into).collect();
        self
    }

    /// Build an exception from any [`std::error::Error`], deriving the type
    /// name from the error's concrete type.
    ///
    /// The standard error trait carries no backtrace; attach one with
    /// [`with_backtrace`](Self::with_backtrace) when the capture site has it.
    ///
    /// # Examples
    ///
    /// ```
    /// use unhandled_report::exception::CapturedException;
    ///
    /// let error = "nope".parse::<u32>().unwrap_err();
    /// let exception = CapturedException::from_error(&error);
    /// assert!(exception.type_name().ends_with("ParseIntError"));
    /// ```
    #[must_use]
    pub fn from_error<E>(error: &E) -> Self
    where
        E: std::error::Error,
    {
        Self::new(std::any::type_name::<E>(), error.to_string())
    }

    /// The exception's type name, rendered verbatim under the `class:` label.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The exception's message, rendered verbatim under the `message:` label.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Backtrace frames in original order, innermost first.
    #[must_use]
    pub fn backtrace(&self) -> &[String] {
        &self.backtrace
    }
}
