//! Raw mode RAII guard.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode, is_raw_mode_enabled};
use std::io;

/// Keeps the terminal in raw mode for as long as it lives.
///
/// If raw mode was already on when the guard was taken, it is left on.
pub struct RawModeGuard {
    restore: bool,
}

impl RawModeGuard {
    pub fn new() -> io::Result<Self> {
        let already = is_raw_mode_enabled().unwrap_or(false);
        if !already {
            enable_raw_mode()?;
        }
        Ok(Self { restore: !already })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.restore {
            let _ = disable_raw_mode();
        }
    }
}
