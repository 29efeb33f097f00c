//! Signed phase value to PWM compare register mapping
//!
//! Centers the signed drive value on half the PWM period and keeps the
//! result a guard band away from both rails. Compare values of exactly 0 or
//! full period can produce a glitch pulse or defeat complementary dead-time
//! insertion on some timer hardware, so they are never emitted.

/// Map a signed phase value into the compare range `[guard, period - guard]`.
///
/// Saturates instead of wrapping: inputs past the usable range pin to the
/// respective guard bound.
#[inline]
pub fn clamp_compare(phase: i32, period: u16, guard: u16) -> u16 {
    let centered = phase + (period as i32) / 2;
    centered.clamp(guard as i32, (period - guard) as i32) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: u16 = 2250;
    const GUARD: u16 = 10;

    #[test]
    fn test_zero_centers_at_half_period() {
        assert_eq!(clamp_compare(0, PERIOD, GUARD), PERIOD / 2);
    }

    #[test]
    fn test_symmetric_about_center() {
        for v in [1i32, 100, 500, 1000] {
            let up = clamp_compare(v, PERIOD, GUARD) as i32;
            let down = clamp_compare(-v, PERIOD, GUARD) as i32;
            assert_eq!(up - PERIOD as i32 / 2, PERIOD as i32 / 2 - down);
        }
    }

    #[test]
    fn test_always_inside_guard_band() {
        for v in -(PERIOD as i32) / 2..=(PERIOD as i32) / 2 {
            let compare = clamp_compare(v, PERIOD, GUARD);
            assert!(compare >= GUARD);
            assert!(compare <= PERIOD - GUARD);
        }
    }

    #[test]
    fn test_saturates_at_guard_bounds() {
        assert_eq!(clamp_compare(-(PERIOD as i32), PERIOD, GUARD), GUARD);
        assert_eq!(clamp_compare(PERIOD as i32, PERIOD, GUARD), PERIOD - GUARD);
        // Far past the rails still saturates, never wraps
        assert_eq!(clamp_compare(i32::MIN / 2, PERIOD, GUARD), GUARD);
        assert_eq!(clamp_compare(i32::MAX / 2, PERIOD, GUARD), PERIOD - GUARD);
    }
}
