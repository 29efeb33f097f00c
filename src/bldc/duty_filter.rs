//! Duty-command low-pass filter
//!
//! Single-pole IIR smoothing of the commanded duty so throttle steps turn
//! into torque ramps instead of current spikes. Pure shift-based integer
//! arithmetic: no floating point, no overshoot, bounded by the accumulator
//! width.

/// Shift-based exponential moving average over the duty command.
///
/// Update rule: `acc = acc - (acc >> shift) + input`, output `acc >> shift`.
/// The time constant is `2^shift` control ticks. The `i32` accumulator never
/// exceeds `(1000 << shift) + 1000` in magnitude for inputs in ±1000, so
/// overflow is impossible for any shift up to 20.
pub struct DutyFilter {
    accumulator: i32,
    shift: u8,
}

impl DutyFilter {
    pub const fn new(shift: u8) -> Self {
        Self {
            accumulator: 0,
            shift,
        }
    }

    /// Advance the filter by one control tick and return the smoothed duty.
    pub fn update(&mut self, input: i16) -> i16 {
        self.accumulator = self.accumulator - (self.accumulator >> self.shift) + input as i32;
        self.output()
    }

    /// Current smoothed duty without advancing the filter.
    pub fn output(&self) -> i16 {
        (self.accumulator >> self.shift) as i16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHIFT: u8 = 12;

    #[test]
    fn test_first_tick_truncates_to_zero() {
        // Slow-start: a full-scale step produces no output on the first tick
        let mut filter = DutyFilter::new(SHIFT);
        assert_eq!(filter.update(1000), 1000 >> SHIFT);
        assert_eq!(filter.output(), 0);
    }

    #[test]
    fn test_converges_to_constant_input() {
        let mut filter = DutyFilter::new(SHIFT);
        let mut out = 0;
        // ~5 time constants is plenty to settle
        for _ in 0..(5 << SHIFT) {
            out = filter.update(1000);
        }
        assert!((out - 1000).abs() <= 1, "settled at {}", out);
    }

    #[test]
    fn test_negative_input_is_symmetric() {
        let mut filter = DutyFilter::new(SHIFT);
        let mut out = 0;
        for _ in 0..(5 << SHIFT) {
            out = filter.update(-1000);
        }
        assert!((out + 1000).abs() <= 1, "settled at {}", out);
    }

    #[test]
    fn test_monotonic_approach_without_overshoot() {
        let mut filter = DutyFilter::new(SHIFT);
        let mut prev = 0;
        for _ in 0..(5 << SHIFT) {
            let out = filter.update(500);
            assert!(out >= prev);
            assert!(out <= 500);
            prev = out;
        }
    }

    #[test]
    fn test_accumulator_stays_bounded() {
        let mut filter = DutyFilter::new(SHIFT);
        for _ in 0..1_000_000 {
            filter.update(1000);
        }
        // Fixed point of the update rule: acc ~= 1000 << shift (+ input term)
        assert!(filter.accumulator <= (1000 << SHIFT) + 1000);
        assert_eq!(filter.output(), 1000);
    }

    #[test]
    fn test_decays_back_to_zero() {
        let mut filter = DutyFilter::new(SHIFT);
        for _ in 0..(5 << SHIFT) {
            filter.update(800);
        }
        let mut out = filter.output();
        // Truncation makes the tail of the decay linear, so allow extra ticks
        for _ in 0..(10 << SHIFT) {
            out = filter.update(0);
        }
        assert_eq!(out, 0);
    }
}
