//! Supply monitoring
//!
//! Converts raw ADC counts into battery voltage and DC-link current with the
//! board's linear scale constants, low-pass filters both, and raises
//! overvoltage / undervoltage / overcurrent flags the tasks use to shut the
//! drive down.

/// Scaling and limits for the supply monitor.
pub struct PowerMonitorConfig {
    /// Battery volts per raw ADC count
    pub volts_per_count: f32,
    /// DC-link amps per raw ADC count
    pub amps_per_count: f32,
    /// Low-pass filter coefficient (0.0-1.0, higher = faster response)
    pub filter_alpha: f32,
    /// Overvoltage threshold [V]
    pub overvoltage_threshold: f32,
    /// Undervoltage threshold [V]
    pub undervoltage_threshold: f32,
    /// Overcurrent threshold [A]
    pub overcurrent_threshold: f32,
}

/// Filtered readings and fault flags.
#[derive(Copy, Clone)]
pub struct PowerMonitorState {
    /// Battery voltage [V], filtered
    pub voltage: f32,
    /// DC-link current [A], filtered
    pub current: f32,
    pub overvoltage: bool,
    pub undervoltage: bool,
    pub overcurrent: bool,
}

impl PowerMonitorState {
    pub const fn new() -> Self {
        Self {
            voltage: 0.0,
            current: 0.0,
            overvoltage: false,
            undervoltage: false,
            overcurrent: false,
        }
    }

    /// `true` while the supply is inside all limits.
    pub fn is_ok(&self) -> bool {
        !self.overvoltage && !self.undervoltage && !self.overcurrent
    }
}

pub struct PowerMonitor {
    config: PowerMonitorConfig,
    state: PowerMonitorState,
}

impl PowerMonitor {
    pub fn new(config: PowerMonitorConfig) -> Self {
        Self {
            config,
            state: PowerMonitorState::new(),
        }
    }

    /// Seed both filters from a first reading so boot does not trip the
    /// undervoltage flag while the voltage filter climbs from zero.
    pub fn initialize_with_adc(&mut self, voltage_raw: u16, current_raw: u16) {
        self.state.voltage = voltage_raw as f32 * self.config.volts_per_count;
        self.state.current = current_raw as f32 * self.config.amps_per_count;
        self.check_limits();
    }

    /// Feed one pair of raw samples and return the updated state.
    pub fn update(&mut self, voltage_raw: u16, current_raw: u16) -> PowerMonitorState {
        let alpha = self.config.filter_alpha;
        let voltage = voltage_raw as f32 * self.config.volts_per_count;
        let current = current_raw as f32 * self.config.amps_per_count;

        self.state.voltage = alpha * voltage + (1.0 - alpha) * self.state.voltage;
        self.state.current = alpha * current + (1.0 - alpha) * self.state.current;
        self.check_limits();
        self.state
    }

    pub fn get_state(&self) -> PowerMonitorState {
        self.state
    }

    fn check_limits(&mut self) {
        self.state.overvoltage = self.state.voltage > self.config.overvoltage_threshold;
        self.state.undervoltage = self.state.voltage < self.config.undervoltage_threshold;
        self.state.overcurrent = self.state.current > self.config.overcurrent_threshold;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monitor() -> PowerMonitor {
        PowerMonitor::new(PowerMonitorConfig {
            volts_per_count: 0.024169921875,
            amps_per_count: 0.201465201465,
            filter_alpha: 0.1,
            overvoltage_threshold: 42.0,
            undervoltage_threshold: 30.0,
            overcurrent_threshold: 25.0,
        })
    }

    /// Raw count producing roughly the given voltage.
    fn volts_raw(v: f32) -> u16 {
        (v / 0.024169921875) as u16
    }

    fn amps_raw(a: f32) -> u16 {
        (a / 0.201465201465) as u16
    }

    #[test]
    fn test_seeding_avoids_boot_undervoltage() {
        let mut mon = monitor();
        mon.initialize_with_adc(volts_raw(36.0), 0);
        let state = mon.get_state();
        assert!(state.is_ok());
        assert!((state.voltage - 36.0).abs() < 0.1);
    }

    #[test]
    fn test_undervoltage_latches_after_filter_settles() {
        let mut mon = monitor();
        mon.initialize_with_adc(volts_raw(36.0), 0);
        let mut state = mon.get_state();
        for _ in 0..100 {
            state = mon.update(volts_raw(28.0), 0);
        }
        assert!(state.undervoltage);
        assert!(!state.overvoltage);
        assert!(!state.is_ok());
    }

    #[test]
    fn test_overvoltage_detected() {
        let mut mon = monitor();
        mon.initialize_with_adc(volts_raw(36.0), 0);
        let mut state = mon.get_state();
        for _ in 0..100 {
            state = mon.update(volts_raw(44.0), 0);
        }
        assert!(state.overvoltage);
    }

    #[test]
    fn test_overcurrent_detected_and_clears() {
        let mut mon = monitor();
        mon.initialize_with_adc(volts_raw(36.0), 0);
        let mut state = mon.get_state();
        for _ in 0..100 {
            state = mon.update(volts_raw(36.0), amps_raw(30.0));
        }
        assert!(state.overcurrent);
        for _ in 0..100 {
            state = mon.update(volts_raw(36.0), amps_raw(5.0));
        }
        assert!(!state.overcurrent);
        assert!(state.is_ok());
    }

    #[test]
    fn test_single_sample_spike_is_filtered() {
        let mut mon = monitor();
        mon.initialize_with_adc(volts_raw(36.0), amps_raw(5.0));
        // One noisy sample moves the filtered current by only alpha of the step
        let state = mon.update(volts_raw(36.0), amps_raw(40.0));
        assert!(!state.overcurrent);
    }
}
