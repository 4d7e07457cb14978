//! Board-agnostic core for the RTC 3 (BQ32000) driver
//!
//! This crate contains everything that does not touch the bus:
//!
//! - Register map and bit constants
//! - Packed BCD codec with per-field tens-digit widths
//! - Time, date and configuration value types
//! - Device configuration
//! - The [`traits::RealTimeClock`] trait

#![no_std]
#![deny(unsafe_code)]

pub mod bcd;
pub mod config;
pub mod registers;
pub mod time;
pub mod traits;

pub use bcd::Field;
pub use config::{Rtc3Config, SecondsWritePolicy};
pub use time::{CalendarDate, CalibrationSign, FrequencyOutput, SwitchState, TimeOfDay, Weekday};
pub use traits::RealTimeClock;
