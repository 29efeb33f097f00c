//! Throttle sampling task
//!
//! Reads the throttle trigger ADC at 100Hz, maps it to a duty command and
//! publishes it for the control tick. A live throttle also enables the
//! drive; a released one leaves the enable state alone so a protection
//! shutdown stays latched until the rider lets go and pulls again.

use core::sync::atomic::Ordering;

use embassy_stm32::{adc::Adc, peripherals};
use embassy_time::{Duration, Ticker};

use crate::config::throttle as cfg;
use crate::fmt::*;
use crate::state::{DUTY_COMMAND, MOTOR_ENABLE, POWER_STATE};
use crate::throttle::ThrottleMap;

#[embassy_executor::task]
pub async fn throttle_task(
    mut adc: Adc<'static, peripherals::ADC1>,
    mut throttle_pin: embassy_stm32::adc::AnyAdcChannel<peripherals::ADC1>,
) {
    info!(
        "Throttle task started: raw range {}..{}, dead band {}",
        cfg::ADC_MIN,
        cfg::ADC_MAX,
        cfg::DEAD_BAND
    );

    let map = ThrottleMap::new(cfg::ADC_MIN, cfg::ADC_MAX, cfg::DEAD_BAND);
    let mut ticker = Ticker::every(Duration::from_millis(cfg::SAMPLE_PERIOD_MS));
    let mut was_released = true;

    loop {
        ticker.next().await;

        let raw = adc.blocking_read(&mut throttle_pin);
        let duty = map.duty_from_adc(raw);
        DUTY_COMMAND.store(duty, Ordering::Relaxed);

        if duty > 0 {
            // Fresh pull after release arms the drive, but never past a
            // standing supply fault
            if was_released {
                let supply_ok = POWER_STATE.lock().await.is_ok();
                if supply_ok {
                    MOTOR_ENABLE.store(true, Ordering::Relaxed);
                } else {
                    warn!("Throttle pulled with supply fault active, staying disabled");
                }
                was_released = false;
            }
        } else {
            was_released = true;
        }
    }
}
