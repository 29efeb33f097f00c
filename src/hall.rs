//! Hall sensor inputs
//!
//! Three digital inputs, one per phase, packed into the 3-bit state the
//! commutation table indexes with (A=1, B=2, C=4).

use embassy_stm32::gpio::Input;

use crate::bldc::hall_state;

pub struct HallInputs {
    a: Input<'static>,
    b: Input<'static>,
    c: Input<'static>,
}

impl HallInputs {
    pub fn new(a: Input<'static>, b: Input<'static>, c: Input<'static>) -> Self {
        Self { a, b, c }
    }

    /// Sample all three sensors and pack them into the 3-bit Hall state.
    pub fn read_state(&self) -> u8 {
        hall_state(self.a.is_high(), self.b.is_high(), self.c.is_high())
    }
}
