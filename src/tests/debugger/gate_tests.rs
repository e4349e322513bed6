//! Tests for the enable/disable gate and `print` framing.

use std::io::ErrorKind;

use crate::error::Stage;
use crate::tests::support::{ChunkSink, FailingSink};
use crate::{Debugger, InMemorySink};

#[test]
fn print_is_dropped_until_enabled() {
    let sink = InMemorySink::new("buf");
    let debugger = Debugger::new(sink.writer());

    debugger.print("line1");
    assert!(sink.is_empty());
    assert!(!debugger.is_enabled());
}

#[test]
fn only_enabled_window_is_logged() {
    let sink = InMemorySink::new("buf");
    let d = Debugger::new(sink.writer());

    d.print("line1");
    d.enable();
    d.print("line2");
    d.disable();
    d.print("line3");

    let lines = sink.lines();
    assert_eq!(lines.len(), 1, "found {lines:?}");
    assert!(lines[0].ends_with("line2"));
}

#[test]
fn output_count_matches_prints_in_enabled_windows() {
    let sink = InMemorySink::new("buf");
    let d = Debugger::new(sink.writer());

    // Repeated calls are idempotent; only the latest one counts.
    let mut expected = 0;
    for round in 0..5 {
        if round % 2 == 0 {
            d.enable();
            d.enable();
        } else {
            d.disable();
            d.disable();
        }
        for i in 0..3 {
            d.print(&format!("round {round} msg {i}"));
            if d.is_enabled() {
                expected += 1;
            }
        }
    }

    assert_eq!(expected, 9);
    assert_eq!(sink.lines().len(), expected);
}

#[test]
fn print_prefixes_date_and_time() {
    let sink = InMemorySink::new("buf");
    let d = Debugger::new(sink.writer());
    d.enable();
    d.print("hello");

    let out = sink.contents_string();
    assert!(out.ends_with(" hello\n"), "got {out:?}");

    // 2024/01/31 13:45:07 hello
    let bytes = out.as_bytes();
    assert_eq!(bytes[4], b'/');
    assert_eq!(bytes[7], b'/');
    assert_eq!(bytes[10], b' ');
    assert_eq!(bytes[13], b':');
    assert_eq!(bytes[16], b':');
    assert_eq!(&out[19..], " hello\n");
    assert!(out[..4].chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn print_does_not_double_trailing_newline() {
    let sink = InMemorySink::new("buf");
    let d = Debugger::new(sink.writer());
    d.enable();
    d.print("already terminated\n");

    let out = sink.contents_string();
    assert!(out.ends_with("already terminated\n"));
    assert!(!out.ends_with("\n\n"));
}

#[test]
fn print_issues_one_write_per_line() {
    let sink = ChunkSink::default();
    let d = Debugger::new(sink.clone());
    d.enable();
    d.print("a");
    d.print("b");

    let chunks = sink.chunks();
    assert_eq!(chunks.len(), 2);
    assert!(chunks[0].ends_with("a\n"));
    assert!(chunks[1].ends_with("b\n"));
}

#[test]
fn print_swallows_destination_errors() {
    let d = Debugger::new(FailingSink(ErrorKind::BrokenPipe));
    d.enable();

    // Must neither panic nor report anything.
    d.print("lost");
    d.flush();
}

#[test]
fn try_print_reports_what_print_swallows() {
    let d = Debugger::with_id("pipe", FailingSink(ErrorKind::BrokenPipe));

    assert!(!d.try_print("gated").unwrap());

    d.enable();
    let err = d.try_print("lost").unwrap_err();
    assert_eq!(err.stage, Stage::Write);
    assert_eq!(err.target, "pipe");
    assert_eq!(err.io_kind(), ErrorKind::BrokenPipe);
}

#[test]
fn debugger_keeps_working_after_a_failed_write() {
    let good = InMemorySink::new("good");
    let d = Debugger::new(FailingSink(ErrorKind::Other));
    d.enable();
    d.print("lost");

    d.set_output(good.writer());
    d.print("kept");
    assert_eq!(good.lines().len(), 1);
}

#[test]
fn debug_format_shows_gate_and_output() {
    let d = Debugger::with_id("buf", InMemorySink::new("buf").writer());
    let s = format!("{d:?}");
    assert!(s.contains("enabled: false"));
    assert!(s.contains("\"buf\""));
}

#[test]
fn default_debugger_is_disabled_on_stderr() {
    let d = Debugger::default();
    assert!(!d.is_enabled());
    assert_eq!(d.output_id(), "stderr");
}
