//! Packed BCD codec for the time and date registers
//!
//! Each register stores the ones digit in bits 0-3 and the tens digit in
//! the bits above it. How many tens bits exist depends on the field's legal
//! range, so every field carries its own tens mask.
//!
//! Writes never reject a value. The input is wrapped with the field's
//! modulus and, for fields that cannot be zero, 0 becomes 1.

use crate::registers;

/// Mask of the ones digit, common to every BCD field
pub const ONES_MASK: u8 = 0x0F;

/// Layout and write rules of one BCD register field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Field {
    /// Register address holding the field
    pub register: u8,
    /// Bits holding the tens digit
    pub tens_mask: u8,
    /// Values are reduced modulo this before encoding
    pub modulus: u16,
    /// Whether a wrapped value of 0 is written as 1
    pub coerce_zero: bool,
}

impl Field {
    /// Seconds: 3 tens bits, 0-59
    pub const SECONDS: Field = Field {
        register: registers::SECONDS,
        tens_mask: 0x70,
        modulus: 60,
        coerce_zero: false,
    };

    /// Minutes: 3 tens bits, 0-59
    pub const MINUTES: Field = Field {
        register: registers::MINUTES,
        tens_mask: 0x70,
        modulus: 60,
        coerce_zero: false,
    };

    /// Hours (24 h): 2 tens bits, 0-23
    pub const HOURS: Field = Field {
        register: registers::HOURS,
        tens_mask: 0x30,
        modulus: 24,
        coerce_zero: false,
    };

    /// Day of month: 2 tens bits, 1-31
    pub const DATE_DAY: Field = Field {
        register: registers::DATE_DAY,
        tens_mask: 0x30,
        modulus: 32,
        coerce_zero: true,
    };

    /// Month: 1 tens bit, 1-12
    pub const DATE_MONTH: Field = Field {
        register: registers::DATE_MONTH,
        tens_mask: 0x10,
        modulus: 13,
        coerce_zero: true,
    };

    /// Two-digit year: full upper nibble, 0-99
    pub const DATE_YEAR: Field = Field {
        register: registers::DATE_YEAR,
        tens_mask: 0xF0,
        modulus: 100,
        coerce_zero: false,
    };

    /// Wrap a caller value into the field's legal range
    pub fn normalize(&self, value: u16) -> u8 {
        let wrapped = (value % self.modulus) as u8;
        if self.coerce_zero && wrapped == 0 {
            1
        } else {
            wrapped
        }
    }

    /// Encode a value into the register byte
    ///
    /// Bits outside the field (such as the oscillator stop flag) are zero.
    pub fn encode(&self, value: u16) -> u8 {
        to_bcd(self.normalize(value))
    }

    /// Decode the field from a raw register byte
    ///
    /// Bits outside the field are ignored.
    pub fn decode(&self, raw: u8) -> u8 {
        let tens = (raw & self.tens_mask) >> 4;
        let ones = raw & ONES_MASK;
        10 * tens + ones
    }

    /// Mask of every bit the field occupies
    pub fn mask(&self) -> u8 {
        self.tens_mask | ONES_MASK
    }
}

/// Pack a value below 100 as two BCD digits
pub fn to_bcd(value: u8) -> u8 {
    ((value / 10) << 4) | (value % 10)
}

/// Unpack a full byte of two BCD digits
pub fn from_bcd(raw: u8) -> u8 {
    Field::DATE_YEAR.decode(raw)
}

/// Wrap a day-of-week value into 1-7
///
/// The day-of-week register is plain binary, not BCD. The value is reduced
/// modulo 8 and 0 becomes 1, so 8 maps to Monday.
pub fn normalize_weekday(value: u8) -> u8 {
    match value % 8 {
        0 => 1,
        w => w,
    }
}
