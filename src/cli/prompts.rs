//! Centralized warning and notice messages for CLI output.

use super::quiet;
use crate::pass::Blacklist;
use crate::terminal::{RED, RESET, YELLOW};

/// Print a warning to stderr (yellow), suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error to stderr (red). Errors are always shown.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Text shown for blacklist entries that matched nothing.
pub fn unused_blacklist_text(unused: &Blacklist) -> String {
    format!(
        "The characters:\n\t{unused}\n...were not blacklisted because they were not going to be used anyway."
    )
}

pub fn unused_blacklist(unused: &Blacklist) {
    if !unused.is_empty() {
        warn(&unused_blacklist_text(unused));
    }
}

pub fn clipboard_copied(count: usize) {
    if !quiet::enabled() {
        eprintln!("*** -{count} KEY(S) COPIED TO CLIPBOARD- ***");
    }
}

pub fn settings_saved() {
    if !quiet::enabled() {
        eprintln!("Settings saved.");
    }
}
