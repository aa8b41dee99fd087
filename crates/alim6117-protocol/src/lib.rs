//! ALi M6117 watchdog register protocol: constants and pure encoders.
//!
//! The M6117 is a 386SX-class SoC whose configuration logic embeds a
//! 24-bit watchdog countdown. Configuration registers are reached through
//! the index/data port pair `0x22`/`0x23` (the two 8259 ports that plain
//! PC-compatible operation never programs), and are write-protected by a
//! lock register until a magic key is written.
//!
//! # Register map
//! ```text
//! 0x13  lock      write 0xc5 to unlock the configuration space, 0x00 to relock
//! 0x37  enable    bit 6 enables the countdown, remaining bits reserved
//! 0x38  select    signal routing field, written mask-and-or
//! 0x39  counter   bits 7..0 of the countdown (LSB)
//! 0x3a  counter   bits 15..8 of the countdown
//! 0x3b  counter   bits 23..16 of the countdown (MSB)
//! 0x3c  control   bit 7 timeout-event flag (read-only), bit 6 restart strobe
//! ```
//!
//! The counter ticks at [`TICKS_PER_SECOND`] (32768 Hz); logical timeouts
//! are whole seconds in `[1, 512]`. This crate performs no I/O: it holds
//! the addresses, keys, masks, the timeout-signal table, and the
//! seconds-to-counter-bytes conversions, leaving port access to the
//! controller crate.

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

pub mod counter;
pub mod regs;
pub mod signal;

pub use counter::{
    COUNTER_PERIOD_TICKS, DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS, MIN_TIMEOUT_SECS,
    TICKS_PER_SECOND, counter_ticks, decode_counter, encode_counter,
};
pub use regs::{
    CONTROL_REGISTER, COUNTER_HIGH_REGISTER, COUNTER_LOW_REGISTER, COUNTER_MID_REGISTER,
    COUNTER_RESTART_BIT, DATA_PORT, ENABLE_BIT, ENABLE_REGISTER, INDEX_PORT, LOCK_KEY,
    LOCK_REGISTER, SIGNAL_REGISTER, TIMEOUT_EVENT_BIT, UNLOCK_KEY,
};
pub use signal::{SIGNAL_PRESERVE_MASK, TimeoutSignal, select_signal};
