//! Routing the `log` macros through a prefixed debug writer.
//!
//! Run with: cargo run --example log_facade

use debugtap::{Debugger, LineLogger, Timestamp};
use log::LevelFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let debugger = Debugger::with_id("-", std::io::stdout());

    LineLogger::new(debugger.writer().prefix("[app] "), "", Timestamp::DateTime)
        .with_level(LevelFilter::Debug)
        .install()?;

    log::info!("not shown, debugger still disabled");

    debugger.enable();
    log::info!("now visible");
    log::debug!("with {} args", 2);

    debugger.disable();
    log::warn!("hidden again");

    Ok(())
}
