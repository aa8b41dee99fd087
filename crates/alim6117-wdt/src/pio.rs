//! Production port-I/O backend.
//!
//! Executes real `in`/`out` byte instructions on the configuration port
//! pair. Only built on x86 targets; everything else drives the watchdog
//! through [`SimBus`](crate::sim::SimBus) or a custom bus.

use alim6117_protocol::{DATA_PORT, INDEX_PORT};

use crate::bus::ConfigBus;
#[cfg(target_os = "linux")]
use crate::error::{WatchdogError, WatchdogResult};

/// Direct port-I/O access to the M6117 configuration space.
///
/// Each [`ConfigBus`] call is one index write on port `0x22` followed by
/// one data transfer on port `0x23`. The handle stands for the right to
/// touch the pair: constructing it is a claim of both I/O privilege and
/// machine-wide exclusivity, which is why plain construction is `unsafe`
/// and [`PortBus::open`] exists on Linux to at least establish the
/// privilege half.
#[derive(Debug)]
pub struct PortBus {
    _exclusive: (),
}

impl PortBus {
    /// Create a bus handle without acquiring port permission.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that this process may execute `in`/`out`
    /// on ports `0x22` and `0x23` (via `ioperm`, `iopl`, or ring 0), and
    /// that nothing else on the machine touches the pair for the lifetime
    /// of the handle.
    #[must_use]
    pub const unsafe fn new() -> Self {
        Self { _exclusive: () }
    }

    /// Acquire permission for the port pair and open the bus.
    ///
    /// Uses `ioperm(2)`, which needs `CAP_SYS_RAWIO`. Exclusive use of
    /// the pair remains the caller's system-configuration responsibility:
    /// nothing else (the kernel's own drivers included) may be bound to
    /// the M6117 configuration ports.
    ///
    /// # Errors
    ///
    /// Returns [`WatchdogError::PortPermission`] when the kernel refuses
    /// the permission change.
    #[cfg(target_os = "linux")]
    pub fn open() -> WatchdogResult<Self> {
        // SAFETY: requests user-space access to the two configuration
        // ports; no memory is touched.
        let rc = unsafe { libc::ioperm(libc::c_ulong::from(INDEX_PORT), 2, 1) };
        if rc != 0 {
            return Err(WatchdogError::PortPermission(
                std::io::Error::last_os_error(),
            ));
        }
        tracing::debug!(
            index_port = INDEX_PORT,
            data_port = DATA_PORT,
            "I/O port access granted"
        );
        // SAFETY: ioperm granted in/out on the pair; exclusivity is the
        // caller's documented responsibility.
        Ok(unsafe { Self::new() })
    }
}

impl ConfigBus for PortBus {
    fn read(&mut self, index: u8) -> u8 {
        // SAFETY: construction established privilege and exclusivity for
        // the fixed pair.
        unsafe { outb(INDEX_PORT, index) };
        // SAFETY: as above.
        unsafe { inb(DATA_PORT) }
    }

    fn write(&mut self, index: u8, value: u8) {
        // SAFETY: construction established privilege and exclusivity for
        // the fixed pair.
        unsafe { outb(INDEX_PORT, index) };
        // SAFETY: as above.
        unsafe { outb(DATA_PORT, value) };
    }
}

/// Write a byte to an I/O port.
///
/// # Safety
///
/// The caller must ensure `port` is safe for this process to write.
#[inline]
unsafe fn outb(port: u16, value: u8) {
    // SAFETY: `out dx, al` writes a single byte to the given port.
    unsafe {
        core::arch::asm!(
            "out dx, al",
            in("dx") port,
            in("al") value,
            options(nomem, nostack, preserves_flags),
        );
    }
}

/// Read a byte from an I/O port.
///
/// # Safety
///
/// The caller must ensure `port` is safe for this process to read.
#[inline]
unsafe fn inb(port: u16) -> u8 {
    let value: u8;
    // SAFETY: `in al, dx` reads a single byte from the given port.
    unsafe {
        core::arch::asm!(
            "in al, dx",
            in("dx") port,
            out("al") value,
            options(nomem, nostack, preserves_flags),
        );
    }
    value
}
