//! RTC device configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::registers;

/// How a seconds write treats the oscillator stop bit
///
/// Seconds and the oscillator stop flag share register 0x00, so writing the
/// seconds value always rewrites bit 7 as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SecondsWritePolicy {
    /// Read the register first and keep bit 7 as it was
    #[default]
    PreserveOscillator,
    /// Write the BCD value alone, which clears bit 7 and restarts a
    /// halted oscillator
    ClearOscillatorStop,
}

/// RTC device configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rtc3Config {
    /// 7-bit I2C slave address
    pub address: u8,
    /// Seconds write behavior
    pub seconds_write: SecondsWritePolicy,
}

impl Default for Rtc3Config {
    fn default() -> Self {
        Self {
            address: registers::DEFAULT_ADDRESS,
            seconds_write: SecondsWritePolicy::PreserveOscillator,
        }
    }
}

impl Rtc3Config {
    /// Use a non-default slave address
    pub fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    /// Choose the seconds write behavior
    pub fn with_seconds_write(mut self, policy: SecondsWritePolicy) -> Self {
        self.seconds_write = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Rtc3Config::default();
        assert_eq!(config.address, 0x68);
        assert_eq!(config.seconds_write, SecondsWritePolicy::PreserveOscillator);
    }

    #[test]
    fn test_builders() {
        let config = Rtc3Config::default()
            .with_address(0x69)
            .with_seconds_write(SecondsWritePolicy::ClearOscillatorStop);
        assert_eq!(config.address, 0x69);
        assert_eq!(config.seconds_write, SecondsWritePolicy::ClearOscillatorStop);
    }
}
