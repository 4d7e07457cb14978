//! Hardware driver implementations
//!
//! This crate provides the concrete RTC 3 (BQ32000) driver on top of the
//! traits defined in rtc3-hal and rtc3-core:
//!
//! - Register read/write primitives over I2C
//! - Time and date accessors with BCD encoding
//! - Oscillator, calibration, trickle charge and special-function control
//! - Interrupt line polling

#![no_std]
#![deny(unsafe_code)]

pub mod rtc;

pub use rtc::Rtc3;
