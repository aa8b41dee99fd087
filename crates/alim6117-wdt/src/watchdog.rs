//! Control layer over the configuration-space protocol.
//!
//! Every primitive runs inside the chip's unlock…relock bracket and under
//! one mutex hold, so the index/data pattern and the bracket can never be
//! interleaved between threads.

use parking_lot::Mutex;
use tracing::Level;

use alim6117_protocol::{
    CONTROL_REGISTER, COUNTER_HIGH_REGISTER, COUNTER_LOW_REGISTER, COUNTER_MID_REGISTER,
    COUNTER_RESTART_BIT, ENABLE_BIT, ENABLE_REGISTER, LOCK_KEY, LOCK_REGISTER, SIGNAL_REGISTER,
    TIMEOUT_EVENT_BIT, TimeoutSignal, UNLOCK_KEY, encode_counter, select_signal,
};

use crate::bus::ConfigBus;
use crate::config::WatchdogConfig;
use crate::info::{M6117_INFO, WatchdogInfo};
use crate::ops::WatchdogOps;

/// Controller for the watchdog timer in the M6117 configuration space.
///
/// Owns a [`ConfigBus`] and the programmed timeout; the hardware itself
/// is the armed/disarmed state. All operations take `&self` and
/// serialize internally, so a single controller can be shared across
/// threads (or handed to a lifecycle manager as `dyn WatchdogOps`).
///
/// The operations live on the [`WatchdogOps`] trait; see the crate-level
/// example.
#[derive(Debug)]
pub struct M6117Watchdog<B: ConfigBus> {
    inner: Mutex<Inner<B>>,
    signal: TimeoutSignal,
    nowayout: bool,
}

#[derive(Debug)]
struct Inner<B> {
    bus: B,
    timeout_secs: u32,
}

impl<B: ConfigBus> M6117Watchdog<B> {
    /// Create a controller over `bus`.
    ///
    /// No port traffic happens here; the hardware keeps whatever state it
    /// is in until the first primitive runs.
    #[must_use]
    pub fn new(bus: B, config: WatchdogConfig) -> Self {
        Self {
            inner: Mutex::new(Inner {
                bus,
                timeout_secs: config.timeout_secs,
            }),
            signal: config.signal,
            nowayout: config.nowayout,
        }
    }

    /// The signal raised when the countdown expires.
    #[must_use]
    pub fn signal(&self) -> TimeoutSignal {
        self.signal
    }

    /// Whether the lifecycle manager was advised to refuse magic-close
    /// disarming.
    ///
    /// Advisory only: [`WatchdogOps::stop`] always disarms.
    #[must_use]
    pub fn nowayout(&self) -> bool {
        self.nowayout
    }

    /// Whether the hardware has recorded a timeout event.
    ///
    /// Reads the control register's read-only event flag. Reads do not
    /// need the configuration space unlocked, so this is a single
    /// register access.
    #[must_use]
    pub fn timeout_event(&self) -> bool {
        let mut inner = self.inner.lock();
        inner.bus.read(CONTROL_REGISTER) & TIMEOUT_EVENT_BIT != 0
    }

    /// Tear down the controller and return the bus.
    #[must_use]
    pub fn into_bus(self) -> B {
        self.inner.into_inner().bus
    }
}

impl<B: ConfigBus + Send> WatchdogOps for M6117Watchdog<B> {
    fn info(&self) -> WatchdogInfo {
        M6117_INFO
    }

    fn start(&self) {
        let mut inner = self.inner.lock();
        let seconds = inner.timeout_secs;
        let signal = self.signal;
        with_unlocked(&mut inner.bus, |bus| {
            disable_countdown(bus);
            write_counter(bus, seconds);
            route_signal(bus, signal);
            enable_countdown(bus);
        });
        tracing::debug!(timeout_secs = seconds, signal = ?signal, "watchdog armed");
    }

    fn stop(&self) {
        let mut inner = self.inner.lock();
        with_unlocked(&mut inner.bus, disable_countdown);
        tracing::debug!("watchdog disarmed");
    }

    fn ping(&self) {
        let mut inner = self.inner.lock();
        with_unlocked(&mut inner.bus, restart_countdown);
        tracing::trace!("watchdog countdown restarted");
    }

    fn set_timeout(&self, seconds: u32) {
        let mut inner = self.inner.lock();
        inner.timeout_secs = seconds;
        with_unlocked(&mut inner.bus, |bus| write_counter(bus, seconds));
        tracing::debug!(timeout_secs = seconds, "watchdog counter reprogrammed");
    }

    fn timeout(&self) -> u32 {
        self.inner.lock().timeout_secs
    }
}

/// Run `mutate` with the configuration space unlocked, relocking on the
/// way out.
///
/// The closure scope is the bracket: no register mutation can escape it,
/// and the relock write is unconditional.
fn with_unlocked<B: ConfigBus>(bus: &mut B, mutate: impl FnOnce(&mut B)) {
    bus.write(LOCK_REGISTER, UNLOCK_KEY);
    trace_registers(bus, "unlocked");
    mutate(bus);
    trace_registers(bus, "relocking");
    bus.write(LOCK_REGISTER, LOCK_KEY);
}

/// Emit a TRACE-level snapshot of the seven watchdog registers.
///
/// Gated on subscriber interest so the snapshot's port reads never happen
/// when TRACE is off; exact-sequence tests rely on that.
fn trace_registers<B: ConfigBus>(bus: &mut B, stage: &'static str) {
    if !tracing::enabled!(Level::TRACE) {
        return;
    }
    let lock = bus.read(LOCK_REGISTER);
    let enable = bus.read(ENABLE_REGISTER);
    let control = bus.read(CONTROL_REGISTER);
    let select = bus.read(SIGNAL_REGISTER);
    let counter_high = bus.read(COUNTER_HIGH_REGISTER);
    let counter_mid = bus.read(COUNTER_MID_REGISTER);
    let counter_low = bus.read(COUNTER_LOW_REGISTER);
    tracing::trace!(
        stage,
        lock,
        enable,
        control,
        select,
        counter_high,
        counter_mid,
        counter_low,
        "register snapshot"
    );
}

fn disable_countdown<B: ConfigBus>(bus: &mut B) {
    let value = bus.read(ENABLE_REGISTER);
    bus.write(ENABLE_REGISTER, value & !ENABLE_BIT);
}

fn enable_countdown<B: ConfigBus>(bus: &mut B) {
    let value = bus.read(ENABLE_REGISTER);
    bus.write(ENABLE_REGISTER, value | ENABLE_BIT);
}

/// Write the counter bytes for `seconds`, most significant register
/// first.
fn write_counter<B: ConfigBus>(bus: &mut B, seconds: u32) {
    let [high, mid, low] = encode_counter(seconds);
    bus.write(COUNTER_HIGH_REGISTER, high);
    bus.write(COUNTER_MID_REGISTER, mid);
    bus.write(COUNTER_LOW_REGISTER, low);
}

fn route_signal<B: ConfigBus>(bus: &mut B, signal: TimeoutSignal) {
    let value = bus.read(SIGNAL_REGISTER);
    bus.write(SIGNAL_REGISTER, select_signal(value, signal));
}

fn restart_countdown<B: ConfigBus>(bus: &mut B) {
    let value = bus.read(CONTROL_REGISTER);
    bus.write(CONTROL_REGISTER, value | COUNTER_RESTART_BIT);
}
