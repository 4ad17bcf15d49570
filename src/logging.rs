//! Diagnostic logging.
//!
//! Levels come from `RUST_LOG` (e.g. `RUST_LOG=keygen=debug`). Nothing is
//! logged by default so the interactive screen stays clean. Generated keys are
//! never passed to the logger.

use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize the logger once at startup.
pub fn init() {
    INIT_LOGGER.call_once(|| {
        let _ = env_logger::Builder::from_default_env()
            .format_timestamp_micros()
            .target(env_logger::Target::Stderr)
            .try_init();
    });
}
