//! Supply monitoring task
//!
//! Samples battery voltage and DC-link current, updates the shared power
//! state and shuts the drive down on overvoltage, undervoltage or
//! overcurrent.

use core::sync::atomic::Ordering;

use embassy_stm32::{adc::Adc, peripherals};
use embassy_time::{Duration, Ticker};

use crate::config::power as cfg;
use crate::fmt::*;
use crate::power_monitor::{PowerMonitor, PowerMonitorConfig};
use crate::state::{DUTY_COMMAND, MOTOR_ENABLE, POWER_STATE};

#[embassy_executor::task]
pub async fn power_monitor_task(
    mut adc: Adc<'static, peripherals::ADC2>,
    mut voltage_pin: embassy_stm32::adc::AnyAdcChannel<peripherals::ADC2>,
    mut current_pin: embassy_stm32::adc::AnyAdcChannel<peripherals::ADC2>,
) {
    info!("Power monitor task started");

    let mut monitor = PowerMonitor::new(PowerMonitorConfig {
        volts_per_count: cfg::VOLTS_PER_COUNT,
        amps_per_count: cfg::AMPS_PER_COUNT,
        filter_alpha: cfg::FILTER_ALPHA,
        overvoltage_threshold: cfg::OVERVOLTAGE_THRESHOLD,
        undervoltage_threshold: cfg::UNDERVOLTAGE_THRESHOLD,
        overcurrent_threshold: cfg::OVERCURRENT_THRESHOLD,
    });

    // Seed the filters so boot does not trip the undervoltage flag
    let voltage_raw = adc.blocking_read(&mut voltage_pin);
    let current_raw = adc.blocking_read(&mut current_pin);
    monitor.initialize_with_adc(voltage_raw, current_raw);
    let state = monitor.get_state();
    info!(
        "Initial supply: {}V / {}A (raw {}/{})",
        state.voltage, state.current, voltage_raw, current_raw
    );

    let mut ticker = Ticker::every(Duration::from_millis(cfg::SAMPLE_PERIOD_MS));
    let mut log_counter = 0u32;

    loop {
        ticker.next().await;

        let voltage_raw = adc.blocking_read(&mut voltage_pin);
        let current_raw = adc.blocking_read(&mut current_pin);
        let state = monitor.update(voltage_raw, current_raw);

        *POWER_STATE.lock().await = state;

        if !state.is_ok() && MOTOR_ENABLE.load(Ordering::Relaxed) {
            error!(
                "Supply fault, disabling motor: {}V OV={} UV={}, {}A OC={}",
                state.voltage, state.overvoltage, state.undervoltage, state.current,
                state.overcurrent
            );
            MOTOR_ENABLE.store(false, Ordering::Relaxed);
            DUTY_COMMAND.store(0, Ordering::Relaxed);
        }

        // One telemetry line every ~10s
        log_counter += 1;
        if log_counter >= 100 {
            log_counter = 0;
            debug!("[supply] {}V {}A", state.voltage, state.current);
        }
    }
}
