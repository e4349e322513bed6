//! Tests for concurrent printing, toggling and redirection.

use std::collections::HashSet;
use std::io::Write;
use std::sync::Arc;
use std::thread;

use crate::{Debugger, InMemorySink};

const THREADS: usize = 8;
const LINES: usize = 200;

#[test]
fn concurrent_prints_are_neither_lost_nor_torn_across_redirects() {
    let a = InMemorySink::new("a");
    let b = InMemorySink::new("b");
    let d = Arc::new(Debugger::new(a.writer()));
    d.enable();

    let mut handles = Vec::new();
    for t in 0..THREADS {
        let d = Arc::clone(&d);
        handles.push(thread::spawn(move || {
            for i in 0..LINES {
                d.print(&format!("t{t} n{i}"));
            }
        }));
    }

    let switcher = {
        let d = Arc::clone(&d);
        let (a, b) = (a.clone(), b.clone());
        thread::spawn(move || {
            for i in 0..100 {
                if i % 2 == 0 {
                    d.set_output(b.writer());
                } else {
                    d.set_output(a.writer());
                }
                thread::yield_now();
            }
        })
    };

    for h in handles {
        h.join().unwrap();
    }
    switcher.join().unwrap();

    let mut seen = HashSet::new();
    for line in a.lines().into_iter().chain(b.lines()) {
        // Skip the `YYYY/MM/DD HH:MM:SS ` timestamp.
        let payload = line.get(20..).unwrap_or_default();
        assert!(
            payload.starts_with('t') && payload.contains(" n"),
            "torn line: {line:?}"
        );
        assert!(seen.insert(payload.to_string()), "duplicate line: {line:?}");
    }
    assert_eq!(seen.len(), THREADS * LINES);
}

#[test]
fn writers_and_prints_interleave_whole_chunks() {
    let sink = InMemorySink::new("buf");
    let d = Arc::new(Debugger::new(sink.writer()));
    d.enable();

    let mut handles = Vec::new();
    for t in 0..THREADS {
        let mut writer = d.writer().prefix(format!("[w{t}] "));
        handles.push(thread::spawn(move || {
            for i in 0..LINES {
                writer.write_all(format!("n{i}\n").as_bytes()).unwrap();
            }
        }));
    }
    for h in handles {
        h.join().unwrap();
    }

    let lines = sink.lines();
    assert_eq!(lines.len(), THREADS * LINES);
    for line in lines {
        assert!(line.starts_with("[w"), "torn line: {line:?}");
        assert!(line.contains("] n"), "torn line: {line:?}");
    }
}

#[test]
fn toggling_under_load_never_emits_partial_lines() {
    let sink = InMemorySink::new("buf");
    let d = Arc::new(Debugger::new(sink.writer()));

    let printer = {
        let d = Arc::clone(&d);
        thread::spawn(move || {
            for i in 0..2_000 {
                d.print(&format!("payload-{i}"));
            }
        })
    };
    for i in 0..500 {
        if i % 2 == 0 {
            d.enable();
        } else {
            d.disable();
        }
    }
    printer.join().unwrap();

    for line in sink.lines() {
        assert!(line.contains(" payload-"), "partial line: {line:?}");
    }
}
