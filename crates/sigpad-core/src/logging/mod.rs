//! Logging utilities.
//!
//! The library itself only talks to the `log` facade. Hosts that want the
//! default `env_logger` backend call [`init_logging`] early in `main`.

mod init;

pub use init::{init_logging, LoggingConfig, LOG_ENV};
