//! Contract between the controller and the watchdog lifecycle manager.

use alim6117_protocol::{MAX_TIMEOUT_SECS, MIN_TIMEOUT_SECS};

use crate::info::WatchdogInfo;

/// Operations an external watchdog lifecycle manager drives.
///
/// The manager owns policy: who may open the device, magic-close
/// handling, and bound checks on requested timeouts. Implementations own
/// the mechanism, so `set_timeout` trusts its argument; the manager is
/// expected to reject requests outside `min_timeout`..=`max_timeout`
/// before they get here.
///
/// All operations are infallible. The hardware protocol is a handful of
/// port accesses with no failure channel, and the manager's contract
/// expects the effect to be applied unconditionally.
pub trait WatchdogOps: Send + Sync {
    /// Capability descriptor for the underlying hardware.
    fn info(&self) -> WatchdogInfo;

    /// Arm the watchdog: program the counter and signal routing, then
    /// enable the countdown.
    fn start(&self);

    /// Disarm the watchdog.
    ///
    /// Always disarms; a `nowayout` policy is enforced by the manager,
    /// not here.
    fn stop(&self);

    /// Restart the countdown from the programmed counter value.
    fn ping(&self);

    /// Reprogram the counter for `seconds` and remember it for
    /// subsequent `start` calls.
    ///
    /// Does not change the armed state: a disarmed watchdog stays
    /// disarmed, an armed one continues with the new period.
    fn set_timeout(&self, seconds: u32);

    /// The currently programmed timeout in seconds.
    fn timeout(&self) -> u32;

    /// Smallest timeout the hardware supports, in seconds.
    fn min_timeout(&self) -> u32 {
        MIN_TIMEOUT_SECS
    }

    /// Largest timeout the hardware supports, in seconds.
    fn max_timeout(&self) -> u32 {
        MAX_TIMEOUT_SECS
    }
}
