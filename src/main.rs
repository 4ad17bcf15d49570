use std::env;
use std::process::ExitCode;

use clap::Parser;

use keygen::cli::{self, CliFlags, prompts};
use keygen::{logging, tui};

fn main() -> ExitCode {
    logging::init();

    let result = if env::args_os().len() == 1 {
        tui::run()
    } else {
        cli::run(CliFlags::parse())
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            prompts::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
