//! Status LED task
//!
//! Slow blink while idle, fast blink while the drive is enabled.

use core::sync::atomic::Ordering;

use embassy_stm32::gpio::Output;
use embassy_time::{Duration, Timer};

use crate::state::MOTOR_ENABLE;

#[embassy_executor::task]
pub async fn led_task(mut led: Output<'static>) {
    loop {
        let period_ms = if MOTOR_ENABLE.load(Ordering::Relaxed) {
            100
        } else {
            500
        };
        led.toggle();
        Timer::after(Duration::from_millis(period_ms)).await;
    }
}
