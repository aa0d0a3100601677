//! Optional `Lambda.toml` read by `lambda-one-invoke`.
//!
//! ```toml
//! [invoke]
//! log_level = "debug"
//!
//! [events.single]
//! x = 1
//! ```

use crate::error::{Error, Result};
use log::LevelFilter;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

pub const DEFAULT_PATH: &str = "Lambda.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub invoke: InvokeConfig,
    /// Named events, usable as the EVENT argument
    pub events: BTreeMap<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct InvokeConfig {
    pub log_level: String,
}

impl Default for InvokeConfig {
    fn default() -> Self {
        InvokeConfig {
            log_level: "info".to_owned(),
        }
    }
}

impl Config {
    /// Reads `path`, or `Lambda.toml` from the working directory when no path is
    /// given. Only the implicit file may be missing.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        match path {
            Some(path) => Config::from_file(path),
            None => {
                let default = Path::new(DEFAULT_PATH);
                if default.is_file() {
                    Config::from_file(default)
                } else {
                    Ok(Config::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Config> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_owned(),
            source,
        })?;
        text.parse()
    }

    pub fn event(&self, name: &str) -> Option<&Value> {
        self.events.get(name)
    }

    /// `flag` wins over `[invoke] log_level`.
    pub fn log_level(&self, flag: Option<&str>) -> Result<LevelFilter> {
        let level = flag.unwrap_or(&self.invoke.log_level);
        LevelFilter::from_str(level).map_err(|_| Error::LogLevel(level.to_owned()))
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Config> {
        Ok(toml::from_str(s)?)
    }
}
