//! Timeout-to-counter conversions.
//!
//! The watchdog counts a 24-bit value down at 32768 ticks per second, so a
//! timeout of `t` seconds is programmed as `t * 0x8000` split across the
//! three counter registers:
//!
//! ```text
//!    0x3b          0x3a          0x39
//! D7......D0    D7......D0    D7......D0
//!   MSB.............................LSB
//! ```
//!
//! `512 * 0x8000` is exactly `2^24`, which truncates to an all-zero
//! pattern; the counter treats zero as the full 2^24-tick period, so the
//! advertised maximum of 512 seconds is programmable.

/// Counter ticks per second of logical timeout.
pub const TICKS_PER_SECOND: u32 = 0x8000;

/// Smallest programmable timeout in seconds.
pub const MIN_TIMEOUT_SECS: u32 = 1;

/// Largest programmable timeout in seconds.
pub const MAX_TIMEOUT_SECS: u32 = 512;

/// Default timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u32 = 60;

/// Full counter period in ticks, denoted by an all-zero counter.
pub const COUNTER_PERIOD_TICKS: u32 = 0x0100_0000;

/// Convert a timeout in seconds to counter ticks.
///
/// The multiplication wraps, mirroring the truncation the 24-bit counter
/// applies to oversized values.
#[must_use]
pub const fn counter_ticks(seconds: u32) -> u32 {
    seconds.wrapping_mul(TICKS_PER_SECOND)
}

/// Encode a timeout in seconds as the three counter bytes, most
/// significant first.
///
/// The result is written to registers `0x3b`, `0x3a`, `0x39` in that
/// order. Values whose tick count exceeds 24 bits truncate modulo `2^24`;
/// in particular 512 seconds encodes as `[0x00, 0x00, 0x00]`, the full
/// period.
#[must_use]
pub const fn encode_counter(seconds: u32) -> [u8; 3] {
    let [_, high, mid, low] = counter_ticks(seconds).to_be_bytes();
    [high, mid, low]
}

/// Decode the three counter bytes (most significant first) back into
/// ticks.
///
/// An all-zero pattern denotes the full [`COUNTER_PERIOD_TICKS`] period,
/// making this the inverse of [`encode_counter`] for every timeout in
/// `[MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS]`.
#[must_use]
pub const fn decode_counter(bytes: [u8; 3]) -> u32 {
    let [high, mid, low] = bytes;
    let ticks = u32::from_be_bytes([0, high, mid, low]);
    if ticks == 0 { COUNTER_PERIOD_TICKS } else { ticks }
}
