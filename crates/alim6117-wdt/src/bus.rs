//! Register access contract.

/// Byte-level access to the M6117 configuration space.
///
/// One call is one full logical register access: the index write on port
/// `0x22` followed by the value transfer on port `0x23`. Implementations
/// must never interleave other traffic between the two steps.
///
/// The port pair is machine-wide shared state. Callers performing an
/// unlock…relock bracket must hold exclusive access to the bus for the
/// whole bracket, not merely for each call; [`M6117Watchdog`] enforces
/// this with a mutex held across every primitive.
///
/// Legacy port I/O has no failure channel, so both operations are
/// infallible.
///
/// [`M6117Watchdog`]: crate::watchdog::M6117Watchdog
pub trait ConfigBus {
    /// Read the register at `index`.
    fn read(&mut self, index: u8) -> u8;

    /// Write `value` to the register at `index`.
    fn write(&mut self, index: u8, value: u8);
}
