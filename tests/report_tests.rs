#![allow(
    clippy::expect_used,
    reason = "report tests use expect for descriptive failures"
)]

//! End-to-end checks of the rendered report format.

use rstest::rstest;
use unhandled_report::config::BacktraceLimit;
use unhandled_report::exception::CapturedException;
use unhandled_report::report::render;

fn limit(frames: usize) -> BacktraceLimit {
    BacktraceLimit::try_from(frames).expect("positive limit")
}

fn boom() -> CapturedException {
    CapturedException::new("RuntimeError", "boom").with_backtrace(["a.rb:1", "a.rb:2", "a.rb:3"])
}

#[test]
fn limit_two_keeps_the_first_two_frames() {
    let expected = "Unhandled exception:\n\
                    \x20 class:\n\
                    \x20   RuntimeError\n\
                    \x20 message:\n\
                    \x20   boom\n\
                    \x20 short backtrace:\n\
                    \x20   a.rb:1\n\
                    \x20   a.rb:2\n";
    assert_eq!(render(&boom(), limit(2)), expected);
}

#[test]
fn limit_ten_keeps_all_three_frames() {
    let expected = "Unhandled exception:\n\
                    \x20 class:\n\
                    \x20   RuntimeError\n\
                    \x20 message:\n\
                    \x20   boom\n\
                    \x20 short backtrace:\n\
                    \x20   a.rb:1\n\
                    \x20   a.rb:2\n\
                    \x20   a.rb:3\n";
    assert_eq!(render(&boom(), limit(10)), expected);
}

#[rstest]
#[case::no_frames(0, 3, 0)]
#[case::under_limit(2, 3, 2)]
#[case::at_limit(3, 3, 3)]
#[case::over_limit(8, 3, 3)]
#[case::default_limit(12, 10, 10)]
fn report_has_min_of_length_and_limit_frames(
    #[case] frame_count: usize,
    #[case] configured: usize,
    #[case] expected: usize,
) {
    let frames: Vec<String> = (0..frame_count).map(|i| format!("frame-{i}")).collect();
    let exception = CapturedException::new("RuntimeError", "boom").with_backtrace(frames);
    let rendered = render(&exception, limit(configured));
    let emitted = rendered
        .lines()
        .filter(|line| line.trim_start().starts_with("frame-"))
        .count();
    assert_eq!(emitted, expected);
}

#[test]
fn missing_backtrace_renders_header_only() {
    let exception = CapturedException::new("RuntimeError", "boom");
    let rendered = render(&exception, limit(10));
    assert!(rendered.ends_with("  short backtrace:\n"));
    assert_eq!(rendered.lines().count(), 6);
}

#[test]
fn render_is_idempotent() {
    let exception = boom();
    let first = render(&exception, limit(2));
    let second = render(&exception, limit(2));
    assert_eq!(first, second);
}
