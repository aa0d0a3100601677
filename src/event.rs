use crate::config::Config;
use crate::error::{Error, Result};
use serde_json::Value;
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::PathBuf;

pub const STDIN: &str = "-";

/// Where `lambda-one-invoke` takes its event from.
#[derive(Debug, Clone, PartialEq)]
pub enum EventSource {
    Stdin,
    Fixture { name: String, event: Value },
    File(PathBuf),
}

impl EventSource {
    /// `-` is stdin, then fixture keys in `[events]` shadow file paths.
    pub fn parse(arg: &str, config: &Config) -> EventSource {
        if arg == STDIN {
            return EventSource::Stdin;
        }
        match config.event(arg) {
            Some(event) => EventSource::Fixture {
                name: arg.to_owned(),
                event: event.clone(),
            },
            None => EventSource::File(PathBuf::from(arg)),
        }
    }

    pub fn read(self) -> Result<Value> {
        match self {
            EventSource::Stdin => from_reader(io::stdin().lock(), "stdin"),
            EventSource::Fixture { event, .. } => Ok(event),
            EventSource::File(path) => {
                let file = File::open(&path).map_err(|source| Error::Io {
                    path: path.clone(),
                    source,
                })?;
                from_reader(BufReader::new(file), &path.display().to_string())
            }
        }
    }
}

impl fmt::Display for EventSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventSource::Stdin => write!(f, "stdin"),
            EventSource::Fixture { name, .. } => write!(f, "fixture {}", name),
            EventSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

pub fn from_reader<R: Read>(reader: R, origin: &str) -> Result<Value> {
    serde_json::from_reader(reader).map_err(|source| Error::Event {
        origin: origin.to_owned(),
        source,
    })
}
