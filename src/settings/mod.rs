//! Saved key generation defaults.

mod file;

use std::path::Path;

use crate::pass::Blacklist;

pub const DEFAULT_KEY_LENGTH: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub key_length: usize,
    pub number_of_keys: usize,
    pub blacklist: Blacklist,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        Self::load_from(&file::default_path())
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        self.save_to(&file::default_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(&mut settings, path)?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        file::save(self, path)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            key_length: DEFAULT_KEY_LENGTH,
            number_of_keys: 1,
            blacklist: Blacklist::new(),
        }
    }
}
