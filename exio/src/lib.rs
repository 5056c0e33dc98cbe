//! Expansion I/O drivers for the Waveshare ESP32-S3 touch-LCD boards.
//!
//! These boards route their extra digital I/O (peripheral resets, backlight
//! enable, the buzzer line, ...) through a TCA9554PWR port expander sitting
//! on the main I2C bus. This crate holds the hardware-independent pieces:
//! the expander driver, the buzzer driver, and the one-shot bring-up routine
//! that puts both into a known state at boot.
//!
//! Everything is generic over the `embedded-hal` 1.0 traits, so the drivers
//! run against the real bus on target and against mocks on the host.

#![cfg_attr(not(test), no_std)]

mod bringup;
mod buzzer;
mod tca9554;

pub use bringup::{BringupError, BuzzerPort, ExpanderPort, ExpansionIo, BASELINE_DIRECTIONS};
pub use buzzer::Buzzer;
pub use tca9554::{Direction, Pin, Tca9554, ALL_OUTPUTS, DEFAULT_ADDRESS};
