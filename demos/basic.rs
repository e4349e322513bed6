//! Toggling and redirecting debug output at runtime.
//!
//! Run with: cargo run --example basic

use std::io::Write;

use debugtap::{Debugger, InMemorySink};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let debugger = Debugger::with_id("stderr", std::io::stderr());

    // Disabled by default: nothing is printed
    debugger.print("you will not see this");

    debugger.enable();
    debugger.print("debugging is on");

    // Writers are created once and follow later changes
    let mut net = debugger.writer().prefix("net: ");
    writeln!(net, "connection accepted")?;

    // Redirect everything into memory
    let captured = InMemorySink::new("captured");
    debugger.set_output_with_id("captured", captured.writer());
    debugger.print("captured line");
    writeln!(net, "captured too")?;

    debugger.disable();
    writeln!(net, "dropped")?;

    println!("Captured:\n{}", captured.contents_string());
    Ok(())
}
