//! Commutation engine orchestration
//!
//! [`MotorController`] owns all per-motor runtime state (enable flag, duty
//! command, filter accumulator, sector history, speed counters) and runs one
//! control tick as a pure computation: Hall decode -> duty filter -> phase
//! mix -> compare clamp. Hardware writes stay in the control task so the
//! whole control law is testable off-target.

use super::commutation::{mix_phases, sector_from_hall};
use super::duty_filter::DutyFilter;
use super::pwm_clamp::clamp_compare;
use super::speed::SpeedEstimator;

/// Duty command full scale (per-mille of supply, sign = direction).
pub const DUTY_LIMIT: i16 = 1000;

/// Result of one control tick: the three compare register values and
/// whether the power stage output should be on at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseOutput {
    pub y: u16,
    pub b: u16,
    pub g: u16,
    pub output_enabled: bool,
}

impl PhaseOutput {
    /// Power stage off, compares parked at zero.
    pub const DISABLED: Self = Self {
        y: 0,
        b: 0,
        g: 0,
        output_enabled: false,
    };
}

/// Six-step commutation controller for a single motor.
pub struct MotorController {
    enabled: bool,
    duty_command: i16,
    filter: DutyFilter,
    last_sector: u8,
    speed: SpeedEstimator,
    /// PWM full-scale count from the timer hardware
    period: u16,
    /// Compare guard band keeping duty off the 0%/100% rails
    guard: u16,
}

impl MotorController {
    pub fn new(period: u16, guard: u16, filter_shift: u8) -> Self {
        Self {
            enabled: false,
            duty_command: 0,
            filter: DutyFilter::new(filter_shift),
            last_sector: 0,
            speed: SpeedEstimator::new(),
            period,
            guard,
        }
    }

    /// Enable or disable the drive.
    ///
    /// Disabling takes effect on the next tick. Enabling does not reset the
    /// filter accumulator: output ramps on from the last filtered value
    /// instead of jumping, at the cost of a possible step if the command
    /// changed a lot while disabled.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    #[allow(dead_code)]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Store the duty command for the next ticks, silently clamped to
    /// [-1000, 1000]. Out-of-range commands are caller bugs that must not
    /// reach the power stage.
    pub fn set_duty_command(&mut self, duty: i16) {
        self.duty_command = duty.clamp(-DUTY_LIMIT, DUTY_LIMIT);
    }

    /// Run one control tick with the packed 3-bit Hall state.
    ///
    /// While disabled the compares are parked at zero and Hall/speed state
    /// is left untouched, but the duty filter keeps settling toward the
    /// stored command so re-enable starts from a pre-settled value.
    pub fn step(&mut self, hall: u8) -> PhaseOutput {
        let filtered = self.filter.update(self.duty_command) as i32;

        if !self.enabled {
            return PhaseOutput::DISABLED;
        }

        let sector = sector_from_hall(hall);
        let phases = mix_phases(filtered, sector);

        let output = PhaseOutput {
            y: clamp_compare(phases.y, self.period, self.guard),
            b: clamp_compare(phases.b, self.period, self.guard),
            g: clamp_compare(phases.g, self.period, self.guard),
            output_enabled: true,
        };

        self.speed.update(self.last_sector, sector);
        self.last_sector = sector;

        output
    }

    /// Ticks per electrical revolution from the last completed revolution.
    pub fn speed_period_ticks(&self) -> u32 {
        self.speed.period_ticks()
    }
}
