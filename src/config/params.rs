//! Drive and board parameters

/// Control loop frequency [Hz]
///
/// The commutation tick. The duty filter time constant and the speed
/// telemetry are expressed in ticks of this loop.
pub const CONTROL_FREQ_HZ: u64 = 8_000;

/// Duty filter shift: time constant is 2^12 = 4096 control ticks
pub const FILTER_SHIFT: u8 = 12;

/// Compare guard band [timer counts], keeps duty off the 0%/100% rails
pub const PWM_GUARD: u16 = 10;

/// PWM settings
pub mod pwm {
    use embassy_stm32::time::Hertz;

    /// Switching frequency
    pub const FREQUENCY: Hertz = Hertz(16_000);

    /// Complementary dead time [timer counts]
    pub const DEAD_TIME: u16 = 60;
}

/// Throttle input scaling
pub mod throttle {
    /// Raw ADC count where the throttle starts to engage
    pub const ADC_MIN: u16 = 200;

    /// Raw ADC count for full throttle
    pub const ADC_MAX: u16 = 3_900;

    /// Commands below this are treated as released (per-mille duty)
    pub const DEAD_BAND: i16 = 20;

    /// Sampling period [ms]
    pub const SAMPLE_PERIOD_MS: u64 = 10;
}

/// Supply monitoring scaling and limits
pub mod power {
    /// Battery volts per raw ADC count (divider on the VBAT pin)
    pub const VOLTS_PER_COUNT: f32 = 0.024169921875;

    /// DC-link amps per raw ADC count (shunt + amplifier chain)
    pub const AMPS_PER_COUNT: f32 = 0.201465201465;

    /// 10S li-ion pack limits
    pub const OVERVOLTAGE_THRESHOLD: f32 = 42.0;
    pub const UNDERVOLTAGE_THRESHOLD: f32 = 30.0;

    /// DC-link current trip level [A]
    pub const OVERCURRENT_THRESHOLD: f32 = 25.0;

    /// Low-pass filter coefficient for both readings (0.0-1.0)
    pub const FILTER_ALPHA: f32 = 0.1;

    /// Sampling period [ms]
    pub const SAMPLE_PERIOD_MS: u64 = 100;
}
