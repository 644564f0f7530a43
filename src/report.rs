//! Rendering of the unhandled exception report.
//!
//! The renderer is a pure function from an exception and a frame limit to a
//! text block. Emission to a sink is the caller's job; see
//! [`reporter`](crate::reporter).

use crate::config::BacktraceLimit;
use crate::exception::CapturedException;

/// Frame lines sit one level deeper than the section labels.
const FRAME_INDENT: &str = "    ";

/// Render the fixed-format report for `exception`.
///
/// The block names the exception's type and message verbatim, then lists at
/// most `limit` leading backtrace frames in original order. An exception
/// without a backtrace renders the `short backtrace:` header and nothing
/// after it. Blank lines inside frame text are kept but not indented.
///
/// # Examples
///
/// ```
/// use unhandled_report::config::BacktraceLimit;
/// use unhandled_report::exception::CapturedException;
/// use unhandled_report::report::render;
///
/// let exception = CapturedException::new("RuntimeError", "boom")
///     .with_backtrace(["a.rb:1", "a.rb:2", "a.rb:3"]);
/// let limit = BacktraceLimit::try_from(2)?;
/// assert_eq!(
///     render(&exception, limit),
///     "Unhandled exception:\n  class:\n    RuntimeError\n  message:\n    boom\n  short backtrace:\n    a.rb:1\n    a.rb:2\n",
/// );
/// # Ok::<(), unhandled_report::config::InvalidBacktraceLimit>(())
/// ```
#[must_use]
pub fn render(exception: &CapturedException, limit: BacktraceLimit) -> String {
    let mut out = format!(
        "Unhandled exception:\n  class:\n    {}\n  message:\n    {}\n  short backtrace:\n",
        exception.type_name(),
        exception.message(),
    );
    let lines = exception
        .backtrace()
        .iter()
        .take(limit.get())
        .flat_map(|frame| frame.split('\n'));
    for line in lines {
        if !line.is_empty() {
            out.push_str(FRAME_INDENT);
            out.push_str(line);
        }
        out.push('\n');
    }
    out
}
