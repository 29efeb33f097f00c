#![no_std]
#![no_main]

mod bldc;
mod config;
mod fmt;
mod hall;
mod hardware;
mod motor_driver;
mod power_monitor;
mod state;
mod tasks;
mod throttle;

#[cfg(not(feature = "defmt"))]
use panic_halt as _;
#[cfg(feature = "defmt")]
use {defmt_rtt as _, panic_probe as _};

use embassy_executor::Spawner;
use embassy_stm32::{
    adc::{Adc, AdcChannel, SampleTime},
    gpio::{Input, Level, Output, Pull, Speed},
    timer::{
        complementary_pwm::{ComplementaryPwm, ComplementaryPwmPin},
        low_level::CountingMode,
        simple_pwm::PwmPin,
    },
};
use embassy_time::{Duration, Timer};

use fmt::*;
use hall::HallInputs;
use motor_driver::MotorDriver;
use tasks::{led_task, motor_control_task, power_monitor_task, throttle_task};

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let clock_config = hardware::create_clock_config();
    let p = embassy_stm32::init(clock_config);

    info!("Hub motor driver starting: six-step Hall commutation, 16kHz PWM");

    // Latch the power rail: the board keeps itself powered once the power
    // button has brought it up
    let _self_hold = Output::new(p.PB2, Level::High, Speed::Low);

    // Status LED
    let led = Output::new(p.PC13, Level::High, Speed::Low);
    spawner.spawn(led_task(led)).unwrap();

    // Throttle input on PA0 (ADC1)
    let mut adc1 = Adc::new(p.ADC1);
    adc1.set_sample_time(SampleTime::CYCLES640_5);
    let throttle_pin = p.PA0.degrade_adc();
    spawner.spawn(throttle_task(adc1, throttle_pin)).unwrap();

    // Battery voltage on PA4 and DC-link current on PA6 (ADC2)
    let mut adc2 = Adc::new(p.ADC2);
    adc2.set_sample_time(SampleTime::CYCLES640_5);
    let voltage_pin = p.PA4.degrade_adc();
    let current_pin = p.PA6.degrade_adc();
    spawner
        .spawn(power_monitor_task(adc2, voltage_pin, current_pin))
        .unwrap();
    info!("Supply monitoring started on PA4/PA6");

    // Three-phase complementary PWM on TIM1
    let mut ybg_pwm = ComplementaryPwm::new(
        p.TIM1,
        Some(PwmPin::new(
            p.PE9,
            embassy_stm32::gpio::OutputType::PushPull,
        )),
        Some(ComplementaryPwmPin::new(
            p.PE8,
            embassy_stm32::gpio::OutputType::PushPull,
        )),
        Some(PwmPin::new(
            p.PE11,
            embassy_stm32::gpio::OutputType::PushPull,
        )),
        Some(ComplementaryPwmPin::new(
            p.PE10,
            embassy_stm32::gpio::OutputType::PushPull,
        )),
        Some(PwmPin::new(
            p.PE13,
            embassy_stm32::gpio::OutputType::PushPull,
        )),
        Some(ComplementaryPwmPin::new(
            p.PE12,
            embassy_stm32::gpio::OutputType::PushPull,
        )),
        None,
        None,
        config::pwm::FREQUENCY,
        CountingMode::EdgeAlignedUp,
    );
    ybg_pwm.set_dead_time(config::pwm::DEAD_TIME);

    // Stage stays parked until the control task enables it
    let mut driver = MotorDriver::new(ybg_pwm);
    driver.stop();
    info!("Power stage ready: period {} counts", driver.max_duty());

    // Hall sensors A/B/C
    let halls = HallInputs::new(
        Input::new(p.PB6, Pull::Up),
        Input::new(p.PB7, Pull::Up),
        Input::new(p.PB8, Pull::Up),
    );

    spawner.spawn(motor_control_task(driver, halls)).unwrap();

    loop {
        Timer::after(Duration::from_millis(100)).await;
    }
}
