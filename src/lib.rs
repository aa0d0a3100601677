//! Lambda One: logs that it ran and echoes its event back inside a 200 response.
//!
//! `lambda-one` is the function binary; `lambda-one-invoke` runs the same
//! handler locally against an event from stdin, a file or a `Lambda.toml` fixture.

pub mod config;
pub mod error;
pub mod event;
mod handler;

pub use error::{Error, Result};
pub use handler::{handler, respond, Response, COMPLETED, EXECUTED};
