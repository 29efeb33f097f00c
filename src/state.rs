//! Cross-task shared state
//!
//! Single-word values exchanged with the control tick use atomics so the
//! tick never blocks; the multi-field power monitor status goes behind an
//! embassy-sync mutex. The motor control task is the sole writer of
//! commutation state, so nothing else needs locking.

use core::sync::atomic::{AtomicBool, AtomicI16, AtomicU32};

use embassy_sync::blocking_mutex::raw::ThreadModeRawMutex;
use embassy_sync::mutex::Mutex;

use crate::power_monitor::PowerMonitorState;

/// Drive enable flag. Cleared by the power monitor on a supply fault;
/// takes effect on the next control tick.
pub static MOTOR_ENABLE: AtomicBool = AtomicBool::new(false);

/// Commanded duty in [-1000, 1000], written by the throttle task.
pub static DUTY_COMMAND: AtomicI16 = AtomicI16::new(0);

/// Ticks per electrical revolution, published by the control task
/// (0 until the first completed revolution).
pub static SPEED_PERIOD_TICKS: AtomicU32 = AtomicU32::new(0);

/// Filtered supply voltage/current and fault flags.
pub static POWER_STATE: Mutex<ThreadModeRawMutex, PowerMonitorState> =
    Mutex::new(PowerMonitorState::new());
