//! Settings file persistence.
//!
//! One line: `key_length,number_of_keys,blacklist`. Inside the blacklist a
//! `|` escapes the next character so `,` and `|` can be stored.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};

use super::Settings;
use crate::pass::Blacklist;

const FIELDS: usize = 3;

pub fn save(settings: &Settings, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let blacklist: String = settings
        .blacklist
        .iter()
        .map(|c| match c {
            ',' | '|' => format!("|{c}"),
            _ => c.to_string(),
        })
        .collect();

    writeln!(
        file,
        "{},{},{}",
        settings.key_length, settings.number_of_keys, blacklist
    )?;
    debug!("saved settings to {}", path.display());
    Ok(())
}

pub fn load(settings: &mut Settings, path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        return save(settings, path);
    }

    let file = OpenOptions::new().read(true).open(path)?;
    let mut line = String::new();
    BufReader::new(file).read_line(&mut line)?;

    let line = line.trim_end_matches(['\n', '\r']);
    let parts = split_escaped(line, ',');

    if parts.len() != FIELDS {
        warn!(
            "settings file {} has {} fields, rewriting defaults",
            path.display(),
            parts.len()
        );
        return save(settings, path);
    }

    settings.key_length = parts[0].parse().unwrap_or(settings.key_length);
    settings.number_of_keys = parts[1].parse().unwrap_or(settings.number_of_keys);
    settings.blacklist = Blacklist::parse(&parts[2]);
    Ok(())
}

pub fn default_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/keygen/settings")
}

fn split_escaped(s: &str, delimiter: char) -> Vec<String> {
    let mut parts = vec![];
    let mut current = String::new();
    let mut escape_next = false;

    for c in s.chars() {
        if escape_next {
            current.push(c);
            escape_next = false;
        } else if c == '|' {
            escape_next = true;
        } else if c == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    parts.push(current);

    parts
}
