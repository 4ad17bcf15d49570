//! CLI context - bundles settings, flags, and clipboard state.

use std::io::Write;

use copypasta::{ClipboardContext, ClipboardProvider};
use log::debug;
use zeroize::Zeroize;

use super::{CliFlags, prompts, quiet};
use crate::error::{KeygenError, Result};
use crate::pass::{self, Blacklist, CharacterPool, GeneratedKey, Pools};
use crate::settings::Settings;

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    pub fn new(flags: CliFlags) -> Self {
        quiet::set(flags.quiet);

        let settings = if flags.saved {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {e}"));
                Settings::default()
            })
        } else {
            Settings::default()
        };

        Self { settings, flags }
    }

    /// Filter, generate, and deliver keys.
    pub fn run(&mut self) -> Result<()> {
        let blacklist = self.blacklist();
        let outcome = pass::filter(&self.pools(), Some(&blacklist))?;
        prompts::unused_blacklist(&outcome.unused);

        let length = self.key_length();
        let count = self.count();
        let mut rng = rand::rng();
        let keys = pass::generate_batch(&outcome.pools, length, count, &mut rng)?;

        if self.flags.save {
            self.save(length, count, blacklist);
        }

        if self.flags.clipboard {
            copy_to_clipboard(&keys)
        } else {
            print_keys(&keys)
        }
    }

    fn pools(&self) -> Pools {
        let pick = |skip: bool, full: fn() -> CharacterPool| {
            if skip { CharacterPool::empty() } else { full() }
        };
        Pools::new(
            pick(self.flags.no_digits, CharacterPool::digits),
            pick(self.flags.no_letters, CharacterPool::letters),
            pick(self.flags.no_symbols, CharacterPool::symbols),
        )
    }

    fn blacklist(&self) -> Blacklist {
        match &self.flags.exclude {
            Some(chars) => Blacklist::parse(chars),
            None if self.flags.saved => self.settings.blacklist.clone(),
            None => Blacklist::new(),
        }
    }

    fn key_length(&self) -> Option<i64> {
        self.flags.length.or_else(|| {
            self.flags
                .saved
                .then(|| i64::try_from(self.settings.key_length).unwrap_or(i64::MAX))
        })
    }

    fn count(&self) -> usize {
        match self.flags.number {
            Some(n) => n,
            None if self.flags.saved => self.settings.number_of_keys.max(1),
            None => 1,
        }
    }

    fn save(&mut self, length: Option<i64>, count: usize, blacklist: Blacklist) {
        if let Some(len) = length.and_then(|l| usize::try_from(l).ok()) {
            self.settings.key_length = len;
        }
        self.settings.number_of_keys = count;
        self.settings.blacklist = blacklist;
        match self.settings.save_to_file() {
            Ok(()) => prompts::settings_saved(),
            Err(e) => prompts::warn(&format!("Failed to save settings: {e}")),
        }
    }
}

fn print_keys(keys: &[GeneratedKey]) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for key in keys {
        writeln!(out, "{}", key.as_str())?;
    }
    out.flush()?;
    Ok(())
}

fn copy_to_clipboard(keys: &[GeneratedKey]) -> Result<()> {
    let mut ctx =
        ClipboardContext::new().map_err(|e| KeygenError::Clipboard(e.to_string()))?;

    let mut contents = keys
        .iter()
        .map(GeneratedKey::as_str)
        .collect::<Vec<_>>()
        .join("\n");

    let result = ctx.set_contents(contents.clone());
    contents.zeroize();
    result.map_err(|e| KeygenError::Clipboard(e.to_string()))?;

    if let Ok(mut retrieved) = ctx.get_contents() {
        retrieved.zeroize();
    }
    debug!("copied {} key(s) to clipboard", keys.len());
    prompts::clipboard_copied(keys.len());
    Ok(())
}
