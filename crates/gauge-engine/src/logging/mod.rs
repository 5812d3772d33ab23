//! Logging utilities.
//!
//! Centralizes logger initialization. The rest of the crate only depends on
//! the standard `log` facade.

mod init;

pub use init::{LoggingConfig, init_logging};
