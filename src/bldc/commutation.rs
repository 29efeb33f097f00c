//! Hall state decoding and six-step phase mixing
//!
//! Maps the packed 3-bit Hall sensor state to one of six electrical sectors
//! and turns a signed duty value into the per-phase drive pattern for that
//! sector. Everything here is pure integer math with no hardware access.

/// Hall state to commutation sector lookup table
/// Index is the packed Hall state (A=1, B=2, C=4). Sector 0 means "no drive":
/// states 0b000 and 0b111 cannot occur with three healthy 120-degree sensors
/// and are treated as transient glitches, not faults.
/// Valid sectors cycle 1 -> 2 -> 3 -> 4 -> 5 -> 6 -> 1 in one direction.
pub const HALL_TO_SECTOR: [u8; 8] = [
    0, // 0b000: invalid
    3, // 0b001: A          -> sector 3
    5, // 0b010: B          -> sector 5
    4, // 0b011: A+B        -> sector 4
    1, // 0b100: C          -> sector 1
    2, // 0b101: A+C        -> sector 2
    6, // 0b110: B+C        -> sector 6
    0, // 0b111: invalid
];

/// Pack the three Hall inputs into the 3-bit state (A=1, B=2, C=4).
#[inline]
pub fn hall_state(a: bool, b: bool, c: bool) -> u8 {
    (a as u8) | ((b as u8) << 1) | ((c as u8) << 2)
}

/// Look up the commutation sector (0-6) for a packed Hall state.
///
/// Out-of-range values decode to sector 0, same as the invalid Hall states.
#[inline]
pub fn sector_from_hall(hall: u8) -> u8 {
    HALL_TO_SECTOR[(hall & 0x07) as usize]
}

/// `true` for the six drivable sectors, `false` for sector 0.
#[allow(dead_code)]
pub fn is_valid_sector(sector: u8) -> bool {
    (1..=6).contains(&sector)
}

/// Signed per-phase drive values before PWM centering.
///
/// For any valid sector exactly one phase is zero and the other two carry
/// `+pwm` / `-pwm`; for sector 0 all three are zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseValues {
    pub y: i32,
    pub b: i32,
    pub g: i32,
}

impl PhaseValues {
    pub const ZERO: Self = Self { y: 0, b: 0, g: 0 };
}

/// Six-step commutation truth table.
///
/// The pattern is fixed by the winding physics: two phases carry symmetric
/// drive while the third idles, rotating through the legs as the sector
/// advances. Do not reorder entries independently of the phase wiring.
///
/// # Arguments
/// * `pwm` - Filtered signed duty value (sign selects rotation direction)
/// * `sector` - Commutation sector from [`sector_from_hall`]
pub fn mix_phases(pwm: i32, sector: u8) -> PhaseValues {
    match sector {
        1 => PhaseValues {
            y: 0,
            b: pwm,
            g: -pwm,
        },
        2 => PhaseValues {
            y: -pwm,
            b: pwm,
            g: 0,
        },
        3 => PhaseValues {
            y: -pwm,
            b: 0,
            g: pwm,
        },
        4 => PhaseValues {
            y: 0,
            b: -pwm,
            g: pwm,
        },
        5 => PhaseValues {
            y: pwm,
            b: -pwm,
            g: 0,
        },
        6 => PhaseValues {
            y: pwm,
            b: 0,
            g: -pwm,
        },
        _ => PhaseValues::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hall_table_fixed_values() {
        assert_eq!(HALL_TO_SECTOR, [0, 3, 5, 4, 1, 2, 6, 0]);
        // Both no-sensor and all-sensor states decode to "no drive"
        assert_eq!(sector_from_hall(0), 0);
        assert_eq!(sector_from_hall(7), 0);
    }

    #[test]
    fn test_hall_state_packing() {
        assert_eq!(hall_state(false, false, false), 0b000);
        assert_eq!(hall_state(true, false, false), 0b001);
        assert_eq!(hall_state(false, true, false), 0b010);
        assert_eq!(hall_state(false, false, true), 0b100);
        assert_eq!(hall_state(true, true, true), 0b111);
    }

    #[test]
    fn test_every_hall_state_decodes() {
        for hall in 0u8..8 {
            let sector = sector_from_hall(hall);
            assert!(sector <= 6);
            if hall == 0 || hall == 7 {
                assert!(!is_valid_sector(sector));
            } else {
                assert!(is_valid_sector(sector));
            }
        }
    }

    #[test]
    fn test_mix_matches_truth_table() {
        let pwm = 1000;
        assert_eq!(mix_phases(pwm, 1), PhaseValues { y: 0, b: 1000, g: -1000 });
        assert_eq!(mix_phases(pwm, 2), PhaseValues { y: -1000, b: 1000, g: 0 });
        assert_eq!(mix_phases(pwm, 3), PhaseValues { y: -1000, b: 0, g: 1000 });
        assert_eq!(mix_phases(pwm, 4), PhaseValues { y: 0, b: -1000, g: 1000 });
        assert_eq!(mix_phases(pwm, 5), PhaseValues { y: 1000, b: -1000, g: 0 });
        assert_eq!(mix_phases(pwm, 6), PhaseValues { y: 1000, b: 0, g: -1000 });
    }

    #[test]
    fn test_mix_one_idle_phase_per_sector() {
        for pwm in [-1000i32, -1, 1, 473, 1000] {
            for sector in 1u8..=6 {
                let p = mix_phases(pwm, sector);
                let phases = [p.y, p.b, p.g];
                assert_eq!(phases.iter().filter(|v| **v == 0).count(), 1);
                assert!(phases.contains(&pwm));
                assert!(phases.contains(&-pwm));
                // The two driven phases cancel
                assert_eq!(p.y + p.b + p.g, 0);
            }
        }
    }

    #[test]
    fn test_mix_invalid_sector_is_silent() {
        assert_eq!(mix_phases(1000, 0), PhaseValues::ZERO);
        assert_eq!(mix_phases(1000, 7), PhaseValues::ZERO);
        assert_eq!(mix_phases(-500, 255), PhaseValues::ZERO);
    }
}
