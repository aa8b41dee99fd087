//! Watchdog capability descriptor.
//!
//! The flag values match the de-facto watchdog char-device ioctl ABI, so
//! a device-node layer can forward [`WatchdogInfo`] unmodified.

/// Capability flag: the timeout can be reprogrammed.
pub const WDIOF_SETTIMEOUT: u32 = 0x0080;

/// Capability flag: closing the device with the magic character disarms.
pub const WDIOF_MAGICCLOSE: u32 = 0x0100;

/// Capability flag: the watchdog can be kept alive by pinging.
pub const WDIOF_KEEPALIVEPING: u32 = 0x8000;

/// Identity string advertised by this driver.
pub const IDENTITY: &str = "alim6117-wdt";

/// Static capability descriptor a lifecycle manager forwards to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchdogInfo {
    /// Capability bitmask (`WDIOF_*` flags).
    pub options: u32,

    /// Firmware revision of the watchdog hardware.
    pub firmware_version: u32,

    /// Driver identity, at most the 32 bytes the ioctl ABI carries.
    pub identity: &'static str,
}

/// Capability descriptor for the M6117 watchdog.
pub const M6117_INFO: WatchdogInfo = WatchdogInfo {
    options: WDIOF_SETTIMEOUT | WDIOF_KEEPALIVEPING | WDIOF_MAGICCLOSE,
    firmware_version: 0,
    identity: IDENTITY,
};
