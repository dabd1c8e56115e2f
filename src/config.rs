use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::co;
use crate::error::{Error, Result};
use crate::logger;

/// Environment overrides, applied after the file.
pub const ENV_LOG: &str = "WINBIND_LOG";
pub const ENV_SEARCH: &str = "WINBIND_SEARCH";
pub const ENV_PRELOAD: &str = "WINBIND_PRELOAD";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `logger::LOG_LEVEL_*` bits.
    pub log_level_mask: u8,
    /// Restrict library loads to the system directory.
    pub search_system32_only: bool,
    /// Procedure tables resolved eagerly by `winbind::init`.
    pub preload: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level_mask: logger::LOG_LEVEL_DEFAULT,
            search_system32_only: true,
            preload: Vec::new(),
        }
    }
}

impl Config {
    /// `winbind.json` next to the executable.
    pub fn path() -> PathBuf {
        let mut path = std::env::current_exe().unwrap_or_default();
        path.set_file_name("winbind.json");
        path
    }

    /// File (if present) plus environment overrides. A malformed file is
    /// reported and replaced by defaults.
    pub fn load() -> Self {
        Self::load_from(&Self::path(), std::env::vars())
    }

    /// [`Config::load`] with an explicit file and environment. Problems are
    /// logged, so install the logger first.
    pub fn load_from<I, K, V>(path: &Path, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = match Self::from_file(path) {
            Ok(Some(c)) => c,
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("Ignoring {}: {e}", path.display());
                Self::default()
            }
        };
        config.apply_vars(vars);
        config
    }

    pub fn from_file(path: &Path) -> Result<Option<Self>> {
        match fs::read_to_string(path) {
            Ok(text) => Self::from_json(&text).map(Some),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Applies `WINBIND_*` overrides from `vars`. Unparseable values are
    /// logged and skipped.
    pub fn apply_vars<I, K, V>(&mut self, vars: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in vars {
            let value = value.as_ref();
            match key.as_ref() {
                ENV_LOG => match logger::parse_mask(value) {
                    Some(mask) => self.log_level_mask = mask,
                    None => log::warn!("{ENV_LOG}: bad level mask {value:?}"),
                },
                ENV_SEARCH => match value.trim().to_ascii_lowercase().as_str() {
                    "system32" => self.search_system32_only = true,
                    "default" => self.search_system32_only = false,
                    _ => log::warn!("{ENV_SEARCH}: expected system32 or default, got {value:?}"),
                },
                ENV_PRELOAD => {
                    self.preload = value
                        .split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(String::from)
                        .collect();
                }
                _ => {}
            }
        }
    }

    /// Flags for the system module loader.
    pub fn load_flags(&self) -> co::LOAD_LIBRARY {
        if self.search_system32_only {
            co::LOAD_LIBRARY::SEARCH_SYSTEM32
        } else {
            co::LOAD_LIBRARY::SEARCH_DEFAULT_DIRS
        }
    }

    /// Rejects preload entries naming no known table.
    pub fn validate(&self) -> Result<()> {
        match self.preload.iter().find(|n| crate::dll::tables::by_name(n).is_none()) {
            Some(bad) => Err(Error::UnknownDll(bad.clone())),
            None => Ok(()),
        }
    }
}
