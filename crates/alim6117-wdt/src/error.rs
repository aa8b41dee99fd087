//! Error types for watchdog operations.
//!
//! The error surface is deliberately narrow: the operational primitives
//! are infallible (port I/O cannot report failure), so errors arise only
//! from strict configuration validation and from acquiring port
//! permission.

use alim6117_protocol::{MAX_TIMEOUT_SECS, MIN_TIMEOUT_SECS};
use thiserror::Error;

/// Errors that can occur while configuring or opening the watchdog.
#[derive(Debug, Error)]
pub enum WatchdogError {
    /// Requested timeout lies outside the hardware's supported range.
    #[error("timeout {seconds}s is outside the supported range [{min}, {max}]s")]
    TimeoutOutOfRange {
        /// The rejected timeout in seconds.
        seconds: u32,
        /// Smallest supported timeout.
        min: u32,
        /// Largest supported timeout.
        max: u32,
    },

    /// The kernel refused access to the configuration port pair.
    #[error("failed to acquire I/O port access: {0}")]
    PortPermission(#[source] std::io::Error),
}

impl WatchdogError {
    /// Create a timeout-out-of-range error for `seconds`.
    #[must_use]
    pub fn timeout_out_of_range(seconds: u32) -> Self {
        Self::TimeoutOutOfRange {
            seconds,
            min: MIN_TIMEOUT_SECS,
            max: MAX_TIMEOUT_SECS,
        }
    }
}

/// A specialized `Result` type for watchdog operations.
pub type WatchdogResult<T> = std::result::Result<T, WatchdogError>;
