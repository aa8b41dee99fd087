//! Configuration types for the watchdog controller.

use alim6117_protocol::{DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS, MIN_TIMEOUT_SECS, TimeoutSignal};
use serde::{Deserialize, Serialize};

use crate::error::{WatchdogError, WatchdogResult};

/// Watchdog controller configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchdogConfig {
    /// Timeout in seconds, within `[1, 512]`.
    pub timeout_secs: u32,

    /// Signal raised when the countdown expires.
    pub signal: TimeoutSignal,

    /// Advise the lifecycle manager to refuse magic-close disarming.
    ///
    /// Advisory only: `stop` itself always disarms.
    pub nowayout: bool,
}

impl WatchdogConfig {
    /// Create a configuration with the given timeout.
    ///
    /// An out-of-range timeout falls back to the 60-second default with a
    /// warning, matching the permissive boot-parameter behavior expected
    /// of a watchdog driver.
    #[must_use]
    pub fn new(timeout_secs: u32) -> Self {
        let timeout_secs = if (MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS).contains(&timeout_secs) {
            timeout_secs
        } else {
            tracing::warn!(
                requested = timeout_secs,
                fallback = DEFAULT_TIMEOUT_SECS,
                "watchdog timeout out of range, using default"
            );
            DEFAULT_TIMEOUT_SECS
        };
        Self {
            timeout_secs,
            ..Self::default()
        }
    }

    /// Create a configuration builder.
    #[must_use]
    pub fn builder() -> WatchdogConfigBuilder {
        WatchdogConfigBuilder::default()
    }

    /// Validate the configuration, rejecting instead of clamping.
    ///
    /// # Errors
    ///
    /// Returns [`WatchdogError::TimeoutOutOfRange`] if `timeout_secs` is
    /// outside `[1, 512]`.
    pub fn validate(&self) -> WatchdogResult<()> {
        if !(MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS).contains(&self.timeout_secs) {
            return Err(WatchdogError::timeout_out_of_range(self.timeout_secs));
        }
        Ok(())
    }
}

impl Default for WatchdogConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            signal: TimeoutSignal::default(),
            nowayout: false,
        }
    }
}

/// Builder for [`WatchdogConfig`].
#[derive(Debug, Default)]
pub struct WatchdogConfigBuilder {
    config: WatchdogConfig,
}

impl WatchdogConfigBuilder {
    /// Set the timeout in seconds.
    #[must_use]
    pub fn timeout_secs(mut self, seconds: u32) -> Self {
        self.config.timeout_secs = seconds;
        self
    }

    /// Set the signal raised on expiry.
    #[must_use]
    pub fn signal(mut self, signal: TimeoutSignal) -> Self {
        self.config.signal = signal;
        self
    }

    /// Set the nowayout advisory flag.
    #[must_use]
    pub fn nowayout(mut self, nowayout: bool) -> Self {
        self.config.nowayout = nowayout;
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> WatchdogResult<WatchdogConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
