//! Throttle input mapping
//!
//! Linear map from the throttle trigger's calibrated ADC range to a duty
//! command in 0..=1000, with a low-end dead band so a released trigger (and
//! ADC noise around it) always reads as zero drive.

use crate::bldc::controller::DUTY_LIMIT;

/// Calibrated throttle range and dead band.
pub struct ThrottleMap {
    adc_min: u16,
    adc_max: u16,
    dead_band: i16,
}

impl ThrottleMap {
    pub const fn new(adc_min: u16, adc_max: u16, dead_band: i16) -> Self {
        Self {
            adc_min,
            adc_max,
            dead_band,
        }
    }

    /// Convert a raw ADC sample to a duty command in 0..=1000.
    ///
    /// Below `adc_min` the output is 0, above `adc_max` it saturates at
    /// full scale; the mapping between them is linear. Results inside the
    /// dead band collapse to 0.
    pub fn duty_from_adc(&self, raw: u16) -> i16 {
        if raw <= self.adc_min {
            return 0;
        }
        let span = (self.adc_max - self.adc_min) as i32;
        let offset = (raw.min(self.adc_max) - self.adc_min) as i32;
        let duty = (offset * DUTY_LIMIT as i32 / span) as i16;
        if duty < self.dead_band {
            0
        } else {
            duty
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAP: ThrottleMap = ThrottleMap::new(200, 3900, 20);

    #[test]
    fn test_released_trigger_reads_zero() {
        assert_eq!(MAP.duty_from_adc(0), 0);
        assert_eq!(MAP.duty_from_adc(200), 0);
    }

    #[test]
    fn test_dead_band_collapses_to_zero() {
        // Just above the low endpoint: mapped duty under the dead band
        assert_eq!(MAP.duty_from_adc(210), 0);
    }

    #[test]
    fn test_full_throttle_and_saturation() {
        assert_eq!(MAP.duty_from_adc(3900), 1000);
        // Raw counts past the calibrated maximum saturate
        assert_eq!(MAP.duty_from_adc(4095), 1000);
    }

    #[test]
    fn test_midpoint_is_half_scale() {
        let duty = MAP.duty_from_adc(200 + (3900 - 200) / 2);
        assert!((duty - 500).abs() <= 1, "midpoint mapped to {}", duty);
    }

    #[test]
    fn test_monotonic_over_full_range() {
        let mut prev = 0;
        for raw in 0..=4095u16 {
            let duty = MAP.duty_from_adc(raw);
            assert!(duty >= prev || duty == 0);
            assert!((0..=1000).contains(&duty));
            if duty != 0 {
                prev = duty;
            }
        }
    }
}
