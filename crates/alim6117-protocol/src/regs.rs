//! Port addresses, register indices, keys, and bit assignments.
//!
//! A logical register access is always two port operations: write the
//! register index to [`INDEX_PORT`], then read or write the value on
//! [`DATA_PORT`]. Nothing else may touch the pair between the two steps.

/// Index port of the configuration space.
///
/// The 8259 interrupt controller claims ports `0x20`..`0x23` but documents
/// only the lower two; the M6117 repurposes the upper pair for its
/// configuration logic.
pub const INDEX_PORT: u16 = 0x22;

/// Data port of the configuration space.
pub const DATA_PORT: u16 = 0x23;

/// Lock register guarding the configuration space.
pub const LOCK_REGISTER: u8 = 0x13;

/// Key that unlocks the configuration space when written to
/// [`LOCK_REGISTER`].
pub const UNLOCK_KEY: u8 = 0xc5;

/// Key that relocks the configuration space.
pub const LOCK_KEY: u8 = 0x00;

/// Watchdog enable register.
pub const ENABLE_REGISTER: u8 = 0x37;

/// Enable bit within [`ENABLE_REGISTER`]; the other bits are reserved and
/// must be preserved on write.
pub const ENABLE_BIT: u8 = 0x40;

/// Timeout-signal routing register.
pub const SIGNAL_REGISTER: u8 = 0x38;

/// Counter register holding bits 7..0 of the countdown.
pub const COUNTER_LOW_REGISTER: u8 = 0x39;

/// Counter register holding bits 15..8 of the countdown.
pub const COUNTER_MID_REGISTER: u8 = 0x3a;

/// Counter register holding bits 23..16 of the countdown.
pub const COUNTER_HIGH_REGISTER: u8 = 0x3b;

/// Watchdog control/status register.
pub const CONTROL_REGISTER: u8 = 0x3c;

/// Read-only bit of [`CONTROL_REGISTER`]: set when a timeout event has
/// occurred.
pub const TIMEOUT_EVENT_BIT: u8 = 0x80;

/// Write-1 bit of [`CONTROL_REGISTER`]: restarts the countdown from the
/// programmed counter value. Self-clearing.
pub const COUNTER_RESTART_BIT: u8 = 0x40;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_registers_are_contiguous_low_to_high() {
        assert_eq!(COUNTER_MID_REGISTER, COUNTER_LOW_REGISTER + 1);
        assert_eq!(COUNTER_HIGH_REGISTER, COUNTER_MID_REGISTER + 1);
    }

    #[test]
    fn control_bits_do_not_overlap() {
        assert_eq!(TIMEOUT_EVENT_BIT & COUNTER_RESTART_BIT, 0);
    }

    #[test]
    fn data_port_follows_index_port() {
        assert_eq!(DATA_PORT, INDEX_PORT + 1);
    }
}
