//! # alim6117-wdt
//!
//! Register-level controller for the watchdog timer embedded in the ALi
//! M6117 SoC's configuration logic.
//!
//! The M6117 exposes a 24-bit countdown behind the index/data port pair
//! `0x22`/`0x23`. Once armed, the countdown must be restarted within the
//! programmed timeout or the chip raises the configured signal (an IRQ,
//! an NMI, or a full system reset) with no further software involvement.
//! This crate drives that protocol:
//!
//! - [`ConfigBus`] is the byte-level register access contract, with
//!   [`PortBus`](pio::PortBus) executing real `in`/`out` instructions on
//!   x86 and [`SimBus`] emulating the register file for tests and
//!   hardware-free environments.
//! - [`M6117Watchdog`] owns a bus and implements the four operational
//!   primitives (start, stop, ping, set-timeout), each one performed
//!   inside the chip's unlock…relock bracket under a single mutex hold.
//! - [`WatchdogOps`] is the contract an external watchdog lifecycle
//!   manager (device node, ioctl surface, magic-close policy) consumes;
//!   [`WatchdogInfo`] is the capability descriptor it forwards.
//!
//! The register map, counter encoding, and signal table live in the
//! I/O-free `alim6117-protocol` crate.
//!
//! ## Example
//!
//! ```rust
//! use alim6117_wdt::prelude::*;
//!
//! let config = WatchdogConfig::new(60);
//! let watchdog = M6117Watchdog::new(SimBus::new(), config);
//!
//! watchdog.start();
//! watchdog.ping();
//! assert!(!watchdog.timeout_event());
//! watchdog.stop();
//! ```

#![deny(
    unsafe_op_in_unsafe_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::panic,
    missing_docs,
    missing_debug_implementations
)]
#![warn(clippy::pedantic)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod bus;
pub mod config;
pub mod error;
pub mod info;
pub mod ops;
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub mod pio;
pub mod prelude;
pub mod sim;
pub mod watchdog;

pub use bus::ConfigBus;
pub use config::{WatchdogConfig, WatchdogConfigBuilder};
pub use error::{WatchdogError, WatchdogResult};
pub use info::{M6117_INFO, WatchdogInfo};
pub use ops::WatchdogOps;
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub use pio::PortBus;
pub use sim::{PortAccess, SimBus};
pub use watchdog::M6117Watchdog;
