//! Console logging for the browser build.

use crate::config::LogLevel;

/// Install the panic hook and route the `log` facade to the browser console.
///
/// Safe to call more than once; later calls leave the first logger in place.
#[cfg(target_arch = "wasm32")]
pub fn init_logging(level: LogLevel) {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(level.to_level());
}

/// Outside the browser the host application owns the logger.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging(level: LogLevel) {
    log::set_max_level(level.to_level().to_level_filter());
}
