//! Terminal output utilities.
//!
//! Box drawing and ANSI helpers. Everything that draws takes the writer it
//! draws to, so sessions can render into a buffer.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const RED: &str = "\x1b[38;5;9m";
pub const YELLOW: &str = "\x1b[33m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Leave raw mode and drop any lingering style.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    flush();
}

// ============================================================================
// Styled Output Helpers
// ============================================================================

pub fn print_error<W: Write>(out: &mut W, msg: &str) -> io::Result<()> {
    writeln!(out, "{RED}{msg}{RESET}")
}

pub fn print_notice<W: Write>(out: &mut W, msg: &str) -> io::Result<()> {
    writeln!(out, "{YELLOW}{msg}{RESET}")
}

// ============================================================================
// Box Drawing
// ============================================================================

pub const BOX_WIDTH: usize = 54;
const INNER_WIDTH: usize = BOX_WIDTH - 4;

/// ┌─ Title ──────────┐
pub fn box_top<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    if title.is_empty() {
        return writeln!(out, "┌{}┐", "─".repeat(BOX_WIDTH - 2));
    }
    let title_part = format!("─ {title} ");
    let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
    writeln!(out, "┌{}{}┐", title_part, "─".repeat(remaining))
}

/// │ content          │
pub fn box_line<W: Write>(out: &mut W, content: &str) -> io::Result<()> {
    let padding = INNER_WIDTH.saturating_sub(console_width(content));
    writeln!(out, "│ {}{} │", content, " ".repeat(padding))
}

/// │     content      │
pub fn box_line_center<W: Write>(out: &mut W, content: &str) -> io::Result<()> {
    let total = INNER_WIDTH.saturating_sub(console_width(content));
    let left = total / 2;
    writeln!(
        out,
        "│ {}{}{} │",
        " ".repeat(left),
        content,
        " ".repeat(total - left)
    )
}

/// ├──────────────────┤
pub fn box_rule<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "├{}┤", "─".repeat(BOX_WIDTH - 2))
}

/// └──────────────────┘
pub fn box_bottom<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "└{}┘", "─".repeat(BOX_WIDTH - 2))
}

/// Display width, skipping ANSI escape sequences.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl Fn(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn box_rows_share_width() {
        let top = render(|o| box_top(o, "Options"));
        let line = render(|o| box_line(o, "1) Regenerate"));
        let styled = render(|o| box_line(o, &format!("{BOLD}key{RESET}")));
        let bottom = render(|o| box_bottom(o));
        for row in [&top, &line, &bottom] {
            assert_eq!(row.trim_end().chars().count(), BOX_WIDTH, "{row:?}");
        }
        assert_eq!(console_width(styled.trim_end()), BOX_WIDTH);
    }

    #[test]
    fn centered_line_is_balanced() {
        let row = render(|o| box_line_center(o, "ab"));
        let inner = row.trim_end().trim_start_matches('│').trim_end_matches('│');
        let left = inner.len() - inner.trim_start().len();
        let right = inner.len() - inner.trim_end().len();
        assert!(left.abs_diff(right) <= 1);
    }
}
