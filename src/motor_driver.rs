//! Motor driver abstraction layer
//!
//! Hides direct PWM hardware access behind the small interface the
//! commutation engine needs: compare writes per phase and whole-output-stage
//! enable/disable.

use embassy_stm32::{
    peripherals,
    timer::{complementary_pwm::ComplementaryPwm, Channel},
};

/// Three-phase power stage on TIM1 complementary PWM.
///
/// Channel mapping follows the board wiring: Ch1 = Y, Ch2 = B, Ch3 = G.
pub struct MotorDriver {
    pwm: ComplementaryPwm<'static, peripherals::TIM1>,
    max_duty: u16,
}

impl MotorDriver {
    pub fn new(pwm: ComplementaryPwm<'static, peripherals::TIM1>) -> Self {
        let max_duty = pwm.get_max_duty();
        Self { pwm, max_duty }
    }

    /// PWM full-scale count (the compare clamp's `period`).
    pub fn max_duty(&self) -> u16 {
        self.max_duty
    }

    /// Write the three phase compare registers.
    pub fn set_compare_ybg(&mut self, y: u16, b: u16, g: u16) {
        self.pwm.set_duty(Channel::Ch1, y);
        self.pwm.set_duty(Channel::Ch2, b);
        self.pwm.set_duty(Channel::Ch3, g);
    }

    /// Turn the power stage output on.
    pub fn enable_output(&mut self) {
        self.pwm.enable(Channel::Ch1);
        self.pwm.enable(Channel::Ch2);
        self.pwm.enable(Channel::Ch3);
    }

    /// Turn the power stage output off. Safe to call every disabled tick.
    pub fn disable_output(&mut self) {
        self.pwm.disable(Channel::Ch1);
        self.pwm.disable(Channel::Ch2);
        self.pwm.disable(Channel::Ch3);
    }

    /// Park all compares at zero and shut the stage off.
    pub fn stop(&mut self) {
        self.set_compare_ybg(0, 0, 0);
        self.disable_output();
    }
}
