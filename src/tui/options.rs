use std::io::Write;

use log::debug;
use rand::Rng;

use super::input::LineSource;
use super::text::{
    BLACKLIST_PROMPT, LENGTH_PROMPT, MENU_PROMPT, print_banner, print_blacklist_request,
    print_invalid_length, print_key, print_length_request, print_nothing_usable,
    print_options_menu, print_salesman, print_unused,
};
use crate::error::Result;
use crate::pass::{self, Blacklist, Pools};

use LoopAction::*;
pub enum LoopAction {
    Break,
    Continue,
}

/// Entries of the options menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Regenerate,
    NewLength,
    NewBlacklist,
    NewSettings,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Regenerate),
            "2" => Some(Self::NewLength),
            "3" => Some(Self::NewBlacklist),
            "4" => Some(Self::NewSettings),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// One interactive run: prompts, pools, and the current key length.
///
/// All blocking reads and retry loops live here; the `pass` functions it
/// calls never prompt.
pub struct Session<S, W, R> {
    input: S,
    out: W,
    rng: R,
    pools: Pools,
    key_length: Option<usize>,
}

impl<S: LineSource, W: Write, R: Rng> Session<S, W, R> {
    pub fn new(input: S, out: W, rng: R) -> Self {
        Self {
            input,
            out,
            rng,
            pools: Pools::standard(),
            key_length: None,
        }
    }

    pub fn pools(&self) -> &Pools {
        &self.pools
    }

    pub fn key_length(&self) -> Option<usize> {
        self.key_length
    }

    /// Run until the user exits, cancels, or input ends.
    pub fn run(&mut self) -> Result<()> {
        print_banner(&mut self.out)?;

        if let Break = self.new_settings()? {
            return Ok(());
        }
        self.show_key()?;

        let mut print_invalid = false;
        loop {
            print_options_menu(&mut self.out, &mut print_invalid)?;

            let Some(selection) = self.input.read_line(MENU_PROMPT)? else {
                return Ok(());
            };

            let action = match MenuChoice::parse(&selection) {
                Some(MenuChoice::Regenerate) => Continue,
                Some(MenuChoice::NewLength) => self.new_length()?,
                Some(MenuChoice::NewBlacklist) => self.new_blacklist()?,
                Some(MenuChoice::NewSettings) => self.new_settings()?,
                Some(MenuChoice::Exit) => Break,
                None => {
                    print_invalid = true;
                    continue;
                }
            };

            if let Break = action {
                return Ok(());
            }
            self.show_key()?;
        }
    }

    fn new_settings(&mut self) -> Result<LoopAction> {
        if let Break = self.new_blacklist()? {
            return Ok(Break);
        }
        self.new_length()
    }

    /// Reset the pools, then ask for a blacklist until one leaves something
    /// usable.
    fn new_blacklist(&mut self) -> Result<LoopAction> {
        let pools = Pools::standard();

        let blacklist = loop {
            print_blacklist_request(&mut self.out)?;
            let Some(line) = self.input.read_line(BLACKLIST_PROMPT)? else {
                return Ok(Break);
            };
            let candidate = Blacklist::parse(&line);
            if pass::leaves_usable(&pools, &candidate) {
                break candidate;
            }
            print_nothing_usable(&mut self.out)?;
        };

        let outcome = pass::filter(&pools, Some(&blacklist))?;
        print_unused(&mut self.out, &outcome.unused)?;
        debug!("blacklist removed {} character(s)", outcome.effective.len());

        self.pools = outcome.pools;
        Ok(Continue)
    }

    /// Ask for a key length until a positive integer arrives.
    fn new_length(&mut self) -> Result<LoopAction> {
        loop {
            print_length_request(&mut self.out)?;
            let Some(line) = self.input.read_line(LENGTH_PROMPT)? else {
                return Ok(Break);
            };
            match pass::parse_key_length(&line) {
                Ok(len) => {
                    self.key_length = Some(len);
                    return Ok(Continue);
                }
                Err(e) => {
                    debug!("rejected key length {line:?}: {e}");
                    print_invalid_length(&mut self.out)?;
                }
            }
        }
    }

    fn show_key(&mut self) -> Result<()> {
        let length = self.key_length.and_then(|n| i64::try_from(n).ok());
        let key = pass::generate(&self.pools, length, &mut self.rng)?;
        print_key(&mut self.out, &key)?;
        print_salesman(&mut self.out, key.as_str())?;
        Ok(())
    }
}
