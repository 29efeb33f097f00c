//! Library target exposing the hardware-independent modules so their unit
//! tests can run with the host test harness. The firmware binary keeps its
//! own module tree in `main.rs`.

#![cfg_attr(not(test), no_std)]

pub mod bldc;
pub mod power_monitor;
pub mod throttle;
