//! Task module
//!
//! One embassy task per concern: commutation tick, throttle sampling,
//! supply monitoring, status LED.

pub mod led;
pub mod motor_control;
pub mod power_monitor;
pub mod throttle;

// Re-export task functions
pub use led::led_task;
pub use motor_control::motor_control_task;
pub use power_monitor::power_monitor_task;
pub use throttle::throttle_task;
