//! Simulated register file for tests and hardware-free environments.

use alim6117_protocol::{
    CONTROL_REGISTER, COUNTER_HIGH_REGISTER, COUNTER_LOW_REGISTER, COUNTER_MID_REGISTER,
    COUNTER_RESTART_BIT, LOCK_REGISTER, TIMEOUT_EVENT_BIT, UNLOCK_KEY,
};

use crate::bus::ConfigBus;

/// One port-level access observed by [`SimBus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortAccess {
    /// A register read and the value it returned.
    Read {
        /// Register index.
        index: u8,
        /// Value the read returned.
        value: u8,
    },
    /// A register write as the caller requested it.
    Write {
        /// Register index.
        index: u8,
        /// Value the caller wrote.
        value: u8,
    },
}

/// Simulated M6117 configuration space.
///
/// A 256-byte register file plus an append-only access log, emulating the
/// chip's protection behavior:
///
/// - powers up locked with every register zero;
/// - writes to the lock register always take effect and toggle
///   protection;
/// - any other write while locked is dropped (the log still records the
///   attempt);
/// - control-register bit 7 is read-only and bit 6 reads back clear
///   (the restart strobe is self-clearing).
///
/// The log records what the caller did, not what the register file ended
/// up holding, so tests can assert exact port traffic.
#[derive(Debug, Clone)]
pub struct SimBus {
    regs: [u8; 256],
    unlocked: bool,
    log: Vec<PortAccess>,
}

impl SimBus {
    /// Create a locked, all-zero register file with an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self {
            regs: [0; 256],
            unlocked: false,
            log: Vec::new(),
        }
    }

    /// Peek a register without logging.
    #[must_use]
    pub fn reg(&self, index: u8) -> u8 {
        self.peek(index)
    }

    /// Poke a register without logging, bypassing the lock protection.
    pub fn set_reg(&mut self, index: u8, value: u8) {
        self.store(index, value);
    }

    /// The three counter bytes, most significant first.
    #[must_use]
    pub fn counter_bytes(&self) -> [u8; 3] {
        [
            self.peek(COUNTER_HIGH_REGISTER),
            self.peek(COUNTER_MID_REGISTER),
            self.peek(COUNTER_LOW_REGISTER),
        ]
    }

    /// Set or clear the read-only timeout-event flag.
    pub fn set_timeout_event(&mut self, event: bool) {
        let current = self.peek(CONTROL_REGISTER);
        let updated = if event {
            current | TIMEOUT_EVENT_BIT
        } else {
            current & !TIMEOUT_EVENT_BIT
        };
        self.store(CONTROL_REGISTER, updated);
    }

    /// Whether the configuration space is currently unlocked.
    #[must_use]
    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// The accesses observed so far.
    #[must_use]
    pub fn log(&self) -> &[PortAccess] {
        &self.log
    }

    /// Drain and return the accesses observed so far.
    pub fn take_log(&mut self) -> Vec<PortAccess> {
        std::mem::take(&mut self.log)
    }

    fn peek(&self, index: u8) -> u8 {
        self.regs.get(usize::from(index)).copied().unwrap_or(0)
    }

    fn store(&mut self, index: u8, value: u8) {
        if let Some(slot) = self.regs.get_mut(usize::from(index)) {
            *slot = value;
        }
    }
}

impl Default for SimBus {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigBus for SimBus {
    fn read(&mut self, index: u8) -> u8 {
        let value = self.peek(index);
        self.log.push(PortAccess::Read { index, value });
        value
    }

    fn write(&mut self, index: u8, value: u8) {
        self.log.push(PortAccess::Write { index, value });
        if index == LOCK_REGISTER {
            self.unlocked = value == UNLOCK_KEY;
            self.store(index, value);
            return;
        }
        if !self.unlocked {
            return;
        }
        if index == CONTROL_REGISTER {
            let current = self.peek(index);
            let kept = current & TIMEOUT_EVENT_BIT;
            self.store(index, kept | (value & !(TIMEOUT_EVENT_BIT | COUNTER_RESTART_BIT)));
            return;
        }
        self.store(index, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alim6117_protocol::{ENABLE_REGISTER, LOCK_KEY};

    #[test]
    fn powers_up_locked_and_zeroed() {
        let bus = SimBus::new();
        assert!(!bus.is_unlocked());
        assert_eq!(bus.reg(ENABLE_REGISTER), 0);
        assert_eq!(bus.counter_bytes(), [0, 0, 0]);
        assert!(bus.log().is_empty());
    }

    #[test]
    fn writes_while_locked_are_dropped_but_logged() {
        let mut bus = SimBus::new();
        bus.write(ENABLE_REGISTER, 0x40);
        assert_eq!(bus.reg(ENABLE_REGISTER), 0);
        assert_eq!(
            bus.log(),
            [PortAccess::Write {
                index: ENABLE_REGISTER,
                value: 0x40
            }]
        );
    }

    #[test]
    fn unlock_key_enables_writes_and_relock_disables_them() {
        let mut bus = SimBus::new();
        bus.write(LOCK_REGISTER, UNLOCK_KEY);
        assert!(bus.is_unlocked());
        bus.write(ENABLE_REGISTER, 0x40);
        assert_eq!(bus.reg(ENABLE_REGISTER), 0x40);

        bus.write(LOCK_REGISTER, LOCK_KEY);
        assert!(!bus.is_unlocked());
        bus.write(ENABLE_REGISTER, 0x00);
        assert_eq!(bus.reg(ENABLE_REGISTER), 0x40);
    }

    #[test]
    fn wrong_key_does_not_unlock() {
        let mut bus = SimBus::new();
        bus.write(LOCK_REGISTER, 0x5c);
        assert!(!bus.is_unlocked());
    }

    #[test]
    fn control_event_bit_is_read_only() {
        let mut bus = SimBus::new();
        bus.write(LOCK_REGISTER, UNLOCK_KEY);
        bus.write(CONTROL_REGISTER, 0xff);
        assert_eq!(bus.reg(CONTROL_REGISTER) & TIMEOUT_EVENT_BIT, 0);

        bus.set_timeout_event(true);
        bus.write(CONTROL_REGISTER, 0x00);
        assert_ne!(bus.reg(CONTROL_REGISTER) & TIMEOUT_EVENT_BIT, 0);
    }

    #[test]
    fn restart_strobe_reads_back_clear() {
        let mut bus = SimBus::new();
        bus.write(LOCK_REGISTER, UNLOCK_KEY);
        bus.write(CONTROL_REGISTER, COUNTER_RESTART_BIT);
        assert_eq!(bus.reg(CONTROL_REGISTER) & COUNTER_RESTART_BIT, 0);
    }

    #[test]
    fn timeout_event_is_visible_through_the_bus() {
        let mut bus = SimBus::new();
        bus.set_timeout_event(true);
        assert_ne!(bus.read(CONTROL_REGISTER) & TIMEOUT_EVENT_BIT, 0);
        bus.set_timeout_event(false);
        assert_eq!(bus.read(CONTROL_REGISTER) & TIMEOUT_EVENT_BIT, 0);
    }

    #[test]
    fn take_log_drains_the_history() {
        let mut bus = SimBus::new();
        bus.write(LOCK_REGISTER, UNLOCK_KEY);
        assert_eq!(bus.take_log().len(), 1);
        assert!(bus.log().is_empty());
    }
}
