//! Browser console logging
//!
//! The core crate logs through `tracing`; with no subscriber installed its
//! events are forwarded to the `log` facade and end up here too.

use log::Level;

/// Install the console logger at `level` (`error`..`trace`).
///
/// Unknown level names fall back to `info`.
pub fn init(level: &str) {
    let level = level.parse::<Level>().unwrap_or(Level::Info);
    if console_log::init_with_level(level).is_err() {
        log::debug!("Console logger already installed");
        return;
    }
    log::info!("Landing page starting (log level {level})");
}
