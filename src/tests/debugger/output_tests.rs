//! Tests for destination swapping.

use std::io::Write;

use crate::tests::support::ChunkSink;
use crate::{Debugger, InMemorySink, StdStream};

#[test]
fn set_output_redirects_print() {
    let a = InMemorySink::new("a");
    let b = InMemorySink::new("b");
    let d = Debugger::new(a.writer());
    d.enable();

    d.print("line1");
    d.set_output(b.writer());
    d.print("line2");

    assert_eq!(a.lines().len(), 1);
    assert!(a.lines()[0].ends_with("line1"));
    assert_eq!(b.lines().len(), 1);
    assert!(b.lines()[0].ends_with("line2"));
}

#[test]
fn set_output_redirects_existing_writers() {
    let a = InMemorySink::new("a");
    let b = InMemorySink::new("b");
    let d = Debugger::new(a.writer());
    d.enable();

    d.print("line1");
    let mut writer = d.writer().prefix("writer: ");

    d.set_output(b.writer());
    writer.write_all(b"line2").unwrap();

    assert!(a.lines()[0].ends_with("line1"));
    assert_eq!(a.lines().len(), 1);
    assert_eq!(b.contents_string(), "writer: line2");
}

#[test]
fn set_output_leaves_gate_alone() {
    let a = InMemorySink::new("a");
    let b = InMemorySink::new("b");
    let d = Debugger::new(a.writer());

    d.set_output(b.writer());
    assert!(!d.is_enabled());
    d.print("dropped");
    assert!(b.is_empty());

    d.enable();
    d.set_output(a.writer());
    assert!(d.is_enabled());
}

#[test]
fn set_output_flushes_old_destination() {
    let old = ChunkSink::default();
    let d = Debugger::new(old.clone());
    d.enable();
    d.print("x");

    d.set_output(InMemorySink::new("new").writer());
    assert_eq!(old.flush_count(), 1);
}

#[test]
fn output_id_follows_destination() {
    let d = Debugger::with_id("first", InMemorySink::new("first").writer());
    assert_eq!(d.output_id(), "first");

    d.set_output_with_id("second", InMemorySink::new("second").writer());
    assert_eq!(d.output_id(), "second");

    d.set_output(Vec::new());
    assert_eq!(d.output_id(), "custom");
}

#[test]
fn set_stream_names_the_stream() {
    let old = ChunkSink::default();
    let d = Debugger::new(old.clone());

    d.set_stream(StdStream::Stdout);
    assert_eq!(d.output_id(), "-");
    assert_eq!(old.flush_count(), 1);

    d.set_stream(StdStream::Stderr);
    assert_eq!(d.output_id(), "stderr");
    assert!(!d.is_enabled());
}

#[test]
fn host_opened_file_receives_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("debug.log");
    std::fs::write(&path, "existing\n").unwrap();

    let file = std::fs::OpenOptions::new()
        .append(true)
        .open(&path)
        .unwrap();
    let d = Debugger::new(Vec::new());
    d.enable();
    d.set_output_with_id(path.to_string_lossy(), file);
    d.writer().prefix("db: ").write_all(b"appended\n").unwrap();
    d.flush();

    assert_eq!(d.output_id(), path.to_string_lossy());
    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text, "existing\ndb: appended\n");
}
