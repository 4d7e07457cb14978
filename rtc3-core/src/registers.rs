//! BQ32000 register map
//!
//! Addresses and bit patterns are fixed by the chip; nothing here is
//! computed at runtime.

/// Factory I2C slave address (7-bit)
pub const DEFAULT_ADDRESS: u8 = 0x68;

/// Seconds, BCD in bits 0-6; bit 7 is the oscillator stop flag
pub const SECONDS: u8 = 0x00;
/// Minutes, BCD in bits 0-6
pub const MINUTES: u8 = 0x01;
/// Hours, BCD in bits 0-5
pub const HOURS: u8 = 0x02;
/// Day of week, plain binary 1-7
pub const DAY_OF_WEEK: u8 = 0x03;
/// Day of month, BCD in bits 0-5
pub const DATE_DAY: u8 = 0x04;
/// Month, BCD in bits 0-4
pub const DATE_MONTH: u8 = 0x05;
/// Two-digit year, BCD in the full byte
pub const DATE_YEAR: u8 = 0x06;
/// Calibration and frequency output configuration
pub const CONFIG1: u8 = 0x07;
/// Trickle charge switch 2
pub const TRICKLE_CHARGE2: u8 = 0x08;
/// Trickle charge FET bypass configuration
pub const CONFIG2: u8 = 0x09;
/// Special-function unlock key 1
pub const SF_KEY1: u8 = 0x20;
/// Special-function unlock key 2
pub const SF_KEY2: u8 = 0x21;
/// Special-function register
pub const SFR: u8 = 0x22;

/// Oscillator stop bit in [`SECONDS`] (1 = halted)
pub const OSC_STOP: u8 = 0x80;
/// Mask of the BCD seconds value, [`OSC_STOP`] excluded
pub const SECONDS_MASK: u8 = 0x7F;

/// Fixed bits written with every [`CONFIG1`] update (OUT = 1)
pub const CONFIG1_INITIAL: u8 = 0x80;
/// Calibration sign bit in [`CONFIG1`]
pub const CAL_SIGN: u8 = 0x20;
/// Calibration magnitude bits in [`CONFIG1`]
pub const CAL_MAGNITUDE_MASK: u8 = 0x1F;

/// Trickle charge switch closed, in [`TRICKLE_CHARGE2`]
pub const TCH2_CLOSED: u8 = 0x20;
/// Trickle charge FET bypass closed, in [`CONFIG2`]
pub const TCFE_CLOSED: u8 = 0x20;

/// Calibration output at 512 Hz, in [`SFR`]
pub const FTF_512_HZ: u8 = 0x00;
/// Calibration output at 1 Hz, in [`SFR`]
pub const FTF_1_HZ: u8 = 0x01;

/// Value the chip expects in [`SF_KEY1`] before an [`SFR`] write
pub const SF_KEY1_VALUE: u8 = 0x5E;
/// Value the chip expects in [`SF_KEY2`] before an [`SFR`] write
pub const SF_KEY2_VALUE: u8 = 0xC7;
