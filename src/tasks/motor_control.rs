//! Motor control task
//!
//! The commutation tick: samples the Hall state, runs the six-step engine
//! and writes the resulting compare values to the power stage. Enable flag
//! and duty command come in through the shared atomics; speed telemetry
//! goes back out the same way.

use core::sync::atomic::Ordering;

use embassy_time::{Duration, Ticker};

use crate::bldc::MotorController;
use crate::config::{CONTROL_FREQ_HZ, FILTER_SHIFT, PWM_GUARD};
use crate::fmt::*;
use crate::hall::HallInputs;
use crate::motor_driver::MotorDriver;
use crate::state::{DUTY_COMMAND, MOTOR_ENABLE, SPEED_PERIOD_TICKS};

/// Log divider: one debug line per second at the control frequency
const LOG_DIVIDER: u32 = CONTROL_FREQ_HZ as u32;

#[embassy_executor::task]
pub async fn motor_control_task(mut driver: MotorDriver, halls: HallInputs) {
    let period = driver.max_duty();
    let mut controller = MotorController::new(period, PWM_GUARD, FILTER_SHIFT);

    info!(
        "Motor control task started: {}Hz tick, PWM period {} counts",
        CONTROL_FREQ_HZ, period
    );

    let mut ticker = Ticker::every(Duration::from_hz(CONTROL_FREQ_HZ));
    let mut was_enabled = false;
    let mut log_counter = 0u32;

    loop {
        ticker.next().await;

        let enabled = MOTOR_ENABLE.load(Ordering::Relaxed);
        if enabled != was_enabled {
            if enabled {
                info!("Motor enabled");
            } else {
                info!("Motor disabled, parking power stage");
            }
            was_enabled = enabled;
        }

        controller.set_enabled(enabled);
        controller.set_duty_command(DUTY_COMMAND.load(Ordering::Relaxed));

        let hall = halls.read_state();
        let output = controller.step(hall);

        if output.output_enabled {
            driver.set_compare_ybg(output.y, output.b, output.g);
            driver.enable_output();
        } else {
            driver.stop();
        }

        SPEED_PERIOD_TICKS.store(controller.speed_period_ticks(), Ordering::Relaxed);

        log_counter += 1;
        if log_counter >= LOG_DIVIDER {
            log_counter = 0;
            debug!(
                "[bldc] hall={} compare Y/B/G={}/{}/{} period_ticks={}",
                hall,
                output.y,
                output.b,
                output.g,
                controller.speed_period_ticks()
            );
        }
    }
}
