use std::io::{self, Write};

use crate::cli::prompts::unused_blacklist_text;
use crate::pass::{Blacklist, GeneratedKey};
use crate::terminal::{
    BOLD, RESET, box_bottom, box_line, box_line_center, box_rule, box_top, print_error,
    print_notice,
};

pub const MENU_PROMPT: &str = "Enter your selection";
pub const BLACKLIST_PROMPT: &str = "Blacklist";
pub const LENGTH_PROMPT: &str = "Key length";

pub fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    box_top(out, "")?;
    box_line(out, "")?;
    box_line_center(out, "░░████████░░░░░░░░░░░░░░░░░░░░░░")?;
    box_line_center(out, "██░░░░░░░░██████████████████░░░░")?;
    box_line_center(out, "██░░████░░░░░░░░░░░░░░░░░░██░░░░")?;
    box_line_center(out, "██░░░░░░░░████░░██░░██░░██░░░░░░")?;
    box_line_center(out, "░░████████░░░░░░░░░░░░░░░░░░░░░░")?;
    box_line(out, "")?;
    box_rule(out)?;
    box_line_center(out, &format!("Welcome to {BOLD}KEYGEN{RESET}!"))?;
    box_line_center(out, "Esc/CTRL+Q: quit | CTRL+U: clear input")?;
    box_bottom(out)?;
    writeln!(out)
}

pub fn print_blacklist_request<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "Enter all English ASCII letters, punctuation (bar whitespace), and/or digits \
         prohibited from being in your password:"
    )
}

pub fn print_nothing_usable<W: Write>(out: &mut W) -> io::Result<()> {
    print_error(out, "You must allow at least one character to be used to generate a key.")
}

pub fn print_unused<W: Write>(out: &mut W, unused: &Blacklist) -> io::Result<()> {
    if unused.is_empty() {
        return Ok(());
    }
    print_notice(out, &unused_blacklist_text(unused))
}

pub fn print_length_request<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Enter the desired length of your password (integer > 0):")
}

pub fn print_invalid_length<W: Write>(out: &mut W) -> io::Result<()> {
    print_error(out, "Invalid input. Please enter a positive integer.")
}

pub fn print_key<W: Write>(out: &mut W, key: &GeneratedKey) -> io::Result<()> {
    writeln!(out, "Your password is:\n{BOLD}{}{RESET}\n", key.as_str())
}

/// A key that spells out a certain salesman gets a greeting.
pub fn print_salesman<W: Write>(out: &mut W, key: &str) -> io::Result<()> {
    if key != "Spamton" {
        return Ok(());
    }
    writeln!(out, "\n\nHEY\tEVERY\t!! IT'S ME!!!")?;
    writeln!(out, "EV3RY\tBUDDY\t'S FAVORITE [[Number 1 Rated Salesman1997]]\n\n")
}

pub fn print_options_menu<W: Write>(out: &mut W, print_invalid: &mut bool) -> io::Result<()> {
    box_top(out, "Options")?;
    box_line(out, "1) Regenerate with the same settings")?;
    box_line(out, "2) Same blacklist, new length")?;
    box_line(out, "3) Same length, new blacklist")?;
    box_line(out, "4) Completely new settings")?;
    box_line(out, "5) Exit")?;
    box_bottom(out)?;

    if *print_invalid {
        print_error(out, "Invalid option. Please enter a valid option.")?;
        *print_invalid = false;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn salesman(key: &str) -> String {
        let mut out = Vec::new();
        print_salesman(&mut out, key).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn salesman_greets_only_his_name() {
        let out = salesman("Spamton");
        assert!(out.starts_with("\n\nHEY\tEVERY\t!! IT'S ME!!!\n"));
        assert!(out.ends_with("[[Number 1 Rated Salesman1997]]\n\n\n"));
        assert!(salesman("spamton").is_empty());
        assert!(salesman("Spamton!").is_empty());
    }
}
