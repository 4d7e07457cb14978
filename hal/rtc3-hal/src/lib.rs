//! RTC 3 Hardware Abstraction Layer
//!
//! This crate defines the bus and pin traits the RTC driver is written
//! against. Chip-specific HALs plug in either by implementing the traits
//! directly or through the `embedded-hal` 1.0 adapters provided here.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application                            │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  rtc3-drivers (Rtc3 device handle)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  rtc3-hal (this crate - traits)         │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ embedded-hal  │       │  custom bus   │
//! │   adapters    │       │ (tests, mocks)│
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`i2c::I2cBus`] - I2C master transactions
//! - [`gpio::InputPin`] - Digital input (interrupt line)

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod i2c;

// Re-export key traits at crate root for convenience
pub use gpio::{EhInputPin, InputPin};
pub use i2c::{EhI2c, I2cBus, I2cBusError};
