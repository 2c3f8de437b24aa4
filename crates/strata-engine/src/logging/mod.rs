//! Logging utilities.
//!
//! The crate itself only emits through the `log` facade. Applications that do
//! not bring their own logger can call [`init_logging`] once at startup.

mod init;

pub use init::{init_logging, LoggingConfig};
