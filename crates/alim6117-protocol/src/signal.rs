//! Timeout-signal routing.
//!
//! On expiry the watchdog raises one of thirteen signals, selected through
//! the routing field of register `0x38`. The field is written mask-and-or:
//! the bits covered by [`SIGNAL_PRESERVE_MASK`] keep their current value
//! and the signal pattern is or-ed in.

/// Bits of the routing register preserved across a signal-select write.
pub const SIGNAL_PRESERVE_MASK: u8 = 0xf0;

/// Signal raised when the watchdog counter expires.
///
/// The discriminants are the raw routing patterns the configuration logic
/// expects. IRQ8 and IRQ13 are not routable on this chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[repr(u8)]
pub enum TimeoutSignal {
    /// Raise IRQ3.
    Irq3 = 0x10,
    /// Raise IRQ4.
    Irq4 = 0x20,
    /// Raise IRQ5.
    Irq5 = 0x30,
    /// Raise IRQ6.
    Irq6 = 0x40,
    /// Raise IRQ7.
    Irq7 = 0x50,
    /// Raise IRQ9.
    Irq9 = 0x60,
    /// Raise IRQ10.
    Irq10 = 0x70,
    /// Raise IRQ11.
    Irq11 = 0x80,
    /// Raise IRQ12.
    Irq12 = 0x90,
    /// Raise IRQ14.
    Irq14 = 0xa0,
    /// Raise IRQ15.
    Irq15 = 0xb0,
    /// Raise a non-maskable interrupt.
    Nmi = 0xc0,
    /// Reset the system.
    #[default]
    SystemReset = 0xd0,
}

impl TimeoutSignal {
    /// Every routable signal, in routing-pattern order.
    pub const ALL: [Self; 13] = [
        Self::Irq3,
        Self::Irq4,
        Self::Irq5,
        Self::Irq6,
        Self::Irq7,
        Self::Irq9,
        Self::Irq10,
        Self::Irq11,
        Self::Irq12,
        Self::Irq14,
        Self::Irq15,
        Self::Nmi,
        Self::SystemReset,
    ];

    /// The raw routing pattern for this signal.
    #[must_use]
    pub const fn raw_bits(self) -> u8 {
        self as u8
    }

    /// Parse a raw routing pattern back into a signal.
    ///
    /// Returns `None` for the reserved patterns.
    #[must_use]
    pub const fn from_raw_bits(bits: u8) -> Option<Self> {
        match bits {
            0x10 => Some(Self::Irq3),
            0x20 => Some(Self::Irq4),
            0x30 => Some(Self::Irq5),
            0x40 => Some(Self::Irq6),
            0x50 => Some(Self::Irq7),
            0x60 => Some(Self::Irq9),
            0x70 => Some(Self::Irq10),
            0x80 => Some(Self::Irq11),
            0x90 => Some(Self::Irq12),
            0xa0 => Some(Self::Irq14),
            0xb0 => Some(Self::Irq15),
            0xc0 => Some(Self::Nmi),
            0xd0 => Some(Self::SystemReset),
            _ => None,
        }
    }
}

/// Compute the value to write to the routing register when selecting
/// `signal`, given the register's current value.
///
/// Bits under [`SIGNAL_PRESERVE_MASK`] are kept; the rest of the current
/// value is discarded and the signal pattern or-ed in.
#[must_use]
pub const fn select_signal(current: u8, signal: TimeoutSignal) -> u8 {
    (current & SIGNAL_PRESERVE_MASK) | signal.raw_bits()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_signal_is_system_reset() {
        assert_eq!(TimeoutSignal::default(), TimeoutSignal::SystemReset);
        assert_eq!(TimeoutSignal::default().raw_bits(), 0xd0);
    }

    #[test]
    fn raw_bits_round_trip_for_every_signal() {
        for signal in TimeoutSignal::ALL {
            assert_eq!(TimeoutSignal::from_raw_bits(signal.raw_bits()), Some(signal));
        }
    }

    #[test]
    fn reserved_patterns_do_not_parse() {
        for bits in [0x00, 0x0f, 0x15, 0xe0, 0xf0, 0xff] {
            assert_eq!(TimeoutSignal::from_raw_bits(bits), None);
        }
    }

    #[test]
    fn routing_patterns_are_distinct() {
        for (i, a) in TimeoutSignal::ALL.iter().enumerate() {
            for b in TimeoutSignal::ALL.iter().skip(i + 1) {
                assert_ne!(a.raw_bits(), b.raw_bits());
            }
        }
    }

    #[test]
    fn select_from_cleared_register_writes_raw_pattern() {
        assert_eq!(select_signal(0x00, TimeoutSignal::SystemReset), 0xd0);
        assert_eq!(select_signal(0x00, TimeoutSignal::Irq3), 0x10);
    }

    #[test]
    fn select_keeps_masked_bits_and_drops_the_rest() {
        assert_eq!(select_signal(0xa5, TimeoutSignal::Irq3), 0xb0);
        assert_eq!(select_signal(0x0f, TimeoutSignal::Nmi), 0xc0);
    }
}
