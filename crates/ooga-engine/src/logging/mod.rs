//! Logger setup for binaries and tests.
//!
//! The engine only talks to the `log` facade; installing `env_logger` is the
//! host's call, made once through [`init_logging`].

mod init;

pub use init::{init_logging, LoggingConfig};
