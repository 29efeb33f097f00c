// BLDC six-step commutation engine
// Hall-sensor based trapezoidal drive with duty smoothing and speed estimation

pub mod commutation;
pub mod controller;
pub mod duty_filter;
pub mod pwm_clamp;
pub mod speed;

// Re-export main types for easier access
pub use commutation::{hall_state, mix_phases, sector_from_hall, PhaseValues};
pub use controller::{MotorController, PhaseOutput};
pub use duty_filter::DutyFilter;
pub use pwm_clamp::clamp_compare;
pub use speed::SpeedEstimator;
