//! Interactive console mode.

mod input;
mod options;
mod text;

pub use input::*;
pub use options::*;

use std::io;

use crate::cli::quiet;
use crate::error::Result;
use crate::terminal::reset_terminal;

/// Run the interactive session on this process's terminal.
pub fn run() -> Result<()> {
    reset_terminal();

    let rng = rand::rng();
    let result = if quiet::is_interactive() {
        Session::new(TerminalInput, io::stdout(), rng).run()
    } else {
        let stdin = io::stdin();
        Session::new(BufferedInput::new(stdin.lock(), io::stdout()), io::stdout(), rng).run()
    };

    reset_terminal();
    result
}
