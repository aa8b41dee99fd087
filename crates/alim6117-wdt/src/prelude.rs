//! Prelude for alim6117-wdt.
//!
//! This module re-exports the most commonly used types for convenient importing.
//!
//! # Example
//!
//! ```rust
//! use alim6117_wdt::prelude::*;
//!
//! let watchdog = M6117Watchdog::new(SimBus::new(), WatchdogConfig::default());
//! watchdog.start();
//! watchdog.ping();
//! watchdog.stop();
//! ```

pub use crate::bus::ConfigBus;
pub use crate::config::{WatchdogConfig, WatchdogConfigBuilder};
pub use crate::error::{WatchdogError, WatchdogResult};
pub use crate::info::{
    M6117_INFO, WDIOF_KEEPALIVEPING, WDIOF_MAGICCLOSE, WDIOF_SETTIMEOUT, WatchdogInfo,
};
pub use crate::ops::WatchdogOps;
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub use crate::pio::PortBus;
pub use crate::sim::{PortAccess, SimBus};
pub use crate::watchdog::M6117Watchdog;

pub use alim6117_protocol::TimeoutSignal;
