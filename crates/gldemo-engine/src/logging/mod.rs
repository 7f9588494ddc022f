//! Logging utilities.
//!
//! Logger initialization lives here so the demo binary and tests share the
//! same defaults. Everything else logs through the `log` facade only.

mod init;

pub use init::{init_logging, LoggingConfig};
