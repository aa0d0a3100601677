//! Errors raised by the local tooling around the handler.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Can't read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid event from {origin}: {source}")]
    Event {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown log level {0:?} (expected off, error, warn, info, debug or trace)")]
    LogLevel(String),

    #[error("Failed to init logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("Handler failed: {0}")]
    Handler(lambda_runtime::Error),

    #[error("Can't serialize response: {0}")]
    Output(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
