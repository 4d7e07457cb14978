//! BQ32000 real-time clock (RTC 3 click)
//!
//! The BQ32000 keeps time in packed BCD registers and runs from a backup
//! supply when main power is gone. It is reached over I2C at 0x68.
//!
//! # Bus transactions
//!
//! - Register read: write the register address, repeated START, read one
//!   byte, STOP.
//! - Register write: write `[address, value]`, STOP.
//!
//! Every getter and setter is a fresh transaction. Nothing is cached, so
//! the chip stays the only source of truth for the time.
//!
//! # Multi-register updates
//!
//! Time and date span several registers written one at a time. A clock that
//! ticks over between two writes can leave a torn value. Use
//! [`Rtc3::with_oscillator_halted`] (or [`Rtc3::set_date_time`]) to stop
//! counting for the duration of the update.
//!
//! # Special-function register
//!
//! The SFR only accepts a write right after key 1 then key 2 have been
//! written with the chip's key values. [`Rtc3::set_frequency_calibration`]
//! does not unlock by itself; [`Rtc3::set_frequency_calibration_unlocked`]
//! does.

use rtc3_core::bcd::{self, Field};
use rtc3_core::registers as reg;
use rtc3_core::traits::RealTimeClock;
use rtc3_core::{
    CalendarDate, CalibrationSign, FrequencyOutput, Rtc3Config, SecondsWritePolicy, SwitchState,
    TimeOfDay,
};
use rtc3_hal::{I2cBus, InputPin};

/// RTC 3 device handle
///
/// Owns the bus, the interrupt pin and the slave address. Several chips on
/// different buses (or addresses) are simply several handles.
pub struct Rtc3<I2C, INT> {
    i2c: I2C,
    int: INT,
    config: Rtc3Config,
}

impl<I2C, INT> Rtc3<I2C, INT> {
    /// Create a driver for a chip with its interrupt line wired
    pub fn new(i2c: I2C, int: INT, config: Rtc3Config) -> Self {
        Self { i2c, int, config }
    }

    /// Get the configuration
    pub fn config(&self) -> &Rtc3Config {
        &self.config
    }

    /// Slave address every transaction goes to
    pub fn address(&self) -> u8 {
        self.config.address
    }

    /// Give back the bus and the interrupt pin
    pub fn release(self) -> (I2C, INT) {
        (self.i2c, self.int)
    }
}

impl<I2C> Rtc3<I2C, ()> {
    /// Create a driver for a chip without an interrupt line
    pub fn new_without_interrupt(i2c: I2C, config: Rtc3Config) -> Self {
        Self::new(i2c, (), config)
    }
}

impl<I2C, INT> Rtc3<I2C, INT>
where
    I2C: I2cBus,
{
    /// Read one register
    ///
    /// The address is not checked; anything the caller passes goes to the bus.
    pub fn read_register(&mut self, register: u8) -> Result<u8, I2C::Error> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(self.config.address, &[register], &mut buf)?;
        #[cfg(feature = "defmt")]
        defmt::trace!("rtc3 read  {=u8:#x} -> {=u8:#x}", register, buf[0]);
        Ok(buf[0])
    }

    /// Write one register
    pub fn write_register(&mut self, register: u8, value: u8) -> Result<(), I2C::Error> {
        #[cfg(feature = "defmt")]
        defmt::trace!("rtc3 write {=u8:#x} <- {=u8:#x}", register, value);
        self.i2c.write(self.config.address, &[register, value])
    }

    /// Read-modify-write: clear `clear` bits, then set `set` bits
    fn modify_register(&mut self, register: u8, clear: u8, set: u8) -> Result<(), I2C::Error> {
        let current = self.read_register(register)?;
        self.write_register(register, (current & !clear) | set)
    }

    fn read_field(&mut self, field: Field) -> Result<u8, I2C::Error> {
        let raw = self.read_register(field.register)?;
        Ok(field.decode(raw))
    }

    fn write_field(&mut self, field: Field, value: u16) -> Result<(), I2C::Error> {
        self.write_register(field.register, field.encode(value))
    }

    // --- Oscillator ---

    /// Start (`true`) or halt (`false`) the oscillator
    ///
    /// Only bit 7 of the seconds register changes; the seconds value is kept.
    pub fn set_oscillator_enabled(&mut self, enabled: bool) -> Result<(), I2C::Error> {
        #[cfg(feature = "defmt")]
        defmt::debug!("rtc3 oscillator {}", if enabled { "start" } else { "halt" });
        let set = if enabled { 0 } else { reg::OSC_STOP };
        self.modify_register(reg::SECONDS, reg::OSC_STOP, set)
    }

    /// Start counting
    pub fn enable_counting(&mut self) -> Result<(), I2C::Error> {
        self.set_oscillator_enabled(true)
    }

    /// Stop counting
    pub fn disable_counting(&mut self) -> Result<(), I2C::Error> {
        self.set_oscillator_enabled(false)
    }

    /// Check if the oscillator is counting
    pub fn is_oscillator_enabled(&mut self) -> Result<bool, I2C::Error> {
        Ok(self.read_register(reg::SECONDS)? & reg::OSC_STOP == 0)
    }

    /// Halt the oscillator, run `update`, then start it again
    ///
    /// Counting is restarted even when `update` fails; the error of `update`
    /// takes precedence over a failed restart.
    pub fn with_oscillator_halted<T, F>(&mut self, update: F) -> Result<T, I2C::Error>
    where
        F: FnOnce(&mut Self) -> Result<T, I2C::Error>,
    {
        self.disable_counting()?;
        let result = update(&mut *self);
        let restart = self.enable_counting();
        let value = result?;
        restart?;
        Ok(value)
    }

    // --- Time ---

    /// Read seconds (0-59)
    pub fn seconds(&mut self) -> Result<u8, I2C::Error> {
        self.read_field(Field::SECONDS)
    }

    /// Write seconds, wrapped modulo 60
    ///
    /// What happens to the oscillator stop bit depends on
    /// [`Rtc3Config::seconds_write`].
    pub fn set_seconds(&mut self, seconds: u8) -> Result<(), I2C::Error> {
        let encoded = Field::SECONDS.encode(seconds as u16);
        match self.config.seconds_write {
            SecondsWritePolicy::PreserveOscillator => {
                self.modify_register(reg::SECONDS, reg::SECONDS_MASK, encoded)
            }
            SecondsWritePolicy::ClearOscillatorStop => {
                self.write_register(reg::SECONDS, encoded)
            }
        }
    }

    /// Read minutes (0-59)
    pub fn minutes(&mut self) -> Result<u8, I2C::Error> {
        self.read_field(Field::MINUTES)
    }

    /// Write minutes, wrapped modulo 60
    pub fn set_minutes(&mut self, minutes: u8) -> Result<(), I2C::Error> {
        self.write_field(Field::MINUTES, minutes as u16)
    }

    /// Read hours (0-23)
    pub fn hours(&mut self) -> Result<u8, I2C::Error> {
        self.read_field(Field::HOURS)
    }

    /// Write hours, wrapped modulo 24
    pub fn set_hours(&mut self, hours: u8) -> Result<(), I2C::Error> {
        self.write_field(Field::HOURS, hours as u16)
    }

    /// Write hours, minutes, seconds (in that order)
    pub fn set_time(&mut self, hours: u8, minutes: u8, seconds: u8) -> Result<(), I2C::Error> {
        self.set_hours(hours)?;
        self.set_minutes(minutes)?;
        self.set_seconds(seconds)
    }

    /// Read hours, minutes, seconds (in that order)
    pub fn time(&mut self) -> Result<TimeOfDay, I2C::Error> {
        let hours = self.hours()?;
        let minutes = self.minutes()?;
        let seconds = self.seconds()?;
        Ok(TimeOfDay::new(hours, minutes, seconds))
    }

    // --- Date ---

    /// Read the raw day-of-week register (1 = Monday ... 7 = Sunday)
    pub fn day_of_week(&mut self) -> Result<u8, I2C::Error> {
        self.read_register(reg::DAY_OF_WEEK)
    }

    /// Write day of week, wrapped modulo 8 with 0 written as 1
    pub fn set_day_of_week(&mut self, day_of_week: u8) -> Result<(), I2C::Error> {
        self.write_register(reg::DAY_OF_WEEK, bcd::normalize_weekday(day_of_week))
    }

    /// Read day of month (1-31)
    pub fn date_day(&mut self) -> Result<u8, I2C::Error> {
        self.read_field(Field::DATE_DAY)
    }

    /// Write day of month, wrapped modulo 32 with 0 written as 1
    pub fn set_date_day(&mut self, day: u8) -> Result<(), I2C::Error> {
        self.write_field(Field::DATE_DAY, day as u16)
    }

    /// Read month (1-12)
    pub fn date_month(&mut self) -> Result<u8, I2C::Error> {
        self.read_field(Field::DATE_MONTH)
    }

    /// Write month, wrapped modulo 13 with 0 written as 1
    pub fn set_date_month(&mut self, month: u8) -> Result<(), I2C::Error> {
        self.write_field(Field::DATE_MONTH, month as u16)
    }

    /// Read the two-digit year (0-99)
    pub fn date_year(&mut self) -> Result<u8, I2C::Error> {
        self.read_field(Field::DATE_YEAR)
    }

    /// Write the year modulo 100 (2018 is stored as 18)
    pub fn set_date_year(&mut self, year: u16) -> Result<(), I2C::Error> {
        self.write_field(Field::DATE_YEAR, year)
    }

    /// Write day of week, day, month, year (in that order)
    pub fn set_date(
        &mut self,
        day_of_week: u8,
        day: u8,
        month: u8,
        year: u16,
    ) -> Result<(), I2C::Error> {
        self.set_day_of_week(day_of_week)?;
        self.set_date_day(day)?;
        self.set_date_month(month)?;
        self.set_date_year(year)
    }

    /// Read day of week, day, month, two-digit year (in that order)
    pub fn date(&mut self) -> Result<CalendarDate, I2C::Error> {
        let day_of_week = self.day_of_week()?;
        let day = self.date_day()?;
        let month = self.date_month()?;
        let year = self.date_year()?;
        Ok(CalendarDate::new(day_of_week, day, month, year as u16))
    }

    /// Write date then time with the oscillator halted
    ///
    /// Counting resumes once both are written, so the chip never exposes a
    /// mix of old and new fields.
    pub fn set_date_time(
        &mut self,
        date: CalendarDate,
        time: TimeOfDay,
    ) -> Result<(), I2C::Error> {
        self.with_oscillator_halted(|rtc| {
            rtc.set_date(date.day_of_week, date.day, date.month, date.year)?;
            rtc.set_time(time.hours, time.minutes, time.seconds)
        })
    }

    // --- Configuration ---

    /// Write the calibration register
    ///
    /// The byte is `0x80 | sign << 5 | magnitude`, with the magnitude
    /// limited to 5 bits.
    pub fn set_calibration(
        &mut self,
        sign: CalibrationSign,
        magnitude: u8,
    ) -> Result<(), I2C::Error> {
        let mut value = reg::CONFIG1_INITIAL;
        if sign == CalibrationSign::Positive {
            value |= reg::CAL_SIGN;
        }
        value |= magnitude & reg::CAL_MAGNITUDE_MASK;
        self.write_register(reg::CONFIG1, value)
    }

    /// Open or close the trickle charge switch
    ///
    /// Other bits of the register are kept.
    pub fn set_trickle_charge(&mut self, state: SwitchState) -> Result<(), I2C::Error> {
        let set = match state {
            SwitchState::Open => 0,
            SwitchState::Closed => reg::TCH2_CLOSED,
        };
        self.modify_register(reg::TRICKLE_CHARGE2, reg::TCH2_CLOSED, set)
    }

    /// Open or close the trickle charge FET bypass
    ///
    /// Other bits of the register are kept.
    pub fn set_trickle_charge_bypass(&mut self, state: SwitchState) -> Result<(), I2C::Error> {
        let set = match state {
            SwitchState::Open => 0,
            SwitchState::Closed => reg::TCFE_CLOSED,
        };
        self.modify_register(reg::CONFIG2, reg::TCFE_CLOSED, set)
    }

    /// Write special-function key 1
    pub fn set_special_function_key1(&mut self, key: u8) -> Result<(), I2C::Error> {
        self.write_register(reg::SF_KEY1, key)
    }

    /// Write special-function key 2
    ///
    /// Must follow key 1 for the chip to accept the next SFR write.
    pub fn set_special_function_key2(&mut self, key: u8) -> Result<(), I2C::Error> {
        self.write_register(reg::SF_KEY2, key)
    }

    /// Write both unlock keys with the chip's values, key 1 first
    pub fn unlock_special_function(&mut self) -> Result<(), I2C::Error> {
        self.set_special_function_key1(reg::SF_KEY1_VALUE)?;
        self.set_special_function_key2(reg::SF_KEY2_VALUE)
    }

    /// Select the calibration output frequency
    ///
    /// The chip ignores this unless the SFR was unlocked just before.
    pub fn set_frequency_calibration(&mut self, mode: FrequencyOutput) -> Result<(), I2C::Error> {
        let value = match mode {
            FrequencyOutput::Hz512 => reg::FTF_512_HZ,
            FrequencyOutput::Hz1 => reg::FTF_1_HZ,
        };
        self.write_register(reg::SFR, value)
    }

    /// Unlock the SFR and select the calibration output frequency
    pub fn set_frequency_calibration_unlocked(
        &mut self,
        mode: FrequencyOutput,
    ) -> Result<(), I2C::Error> {
        self.unlock_special_function()?;
        self.set_frequency_calibration(mode)
    }
}

impl<I2C, INT> Rtc3<I2C, INT>
where
    INT: InputPin,
{
    /// Level of the interrupt line (`true` = high)
    ///
    /// Read from the GPIO directly; no bus traffic.
    pub fn interrupt(&self) -> bool {
        self.int.is_high()
    }
}

impl<I2C, INT> RealTimeClock for Rtc3<I2C, INT>
where
    I2C: I2cBus,
{
    type Error = I2C::Error;

    fn time(&mut self) -> Result<TimeOfDay, Self::Error> {
        Rtc3::time(self)
    }

    fn set_time(&mut self, time: TimeOfDay) -> Result<(), Self::Error> {
        Rtc3::set_time(self, time.hours, time.minutes, time.seconds)
    }

    fn date(&mut self) -> Result<CalendarDate, Self::Error> {
        Rtc3::date(self)
    }

    fn set_date(&mut self, date: CalendarDate) -> Result<(), Self::Error> {
        Rtc3::set_date(self, date.day_of_week, date.day, date.month, date.year)
    }

    fn set_running(&mut self, running: bool) -> Result<(), Self::Error> {
        self.set_oscillator_enabled(running)
    }

    fn is_running(&mut self) -> Result<bool, Self::Error> {
        self.is_oscillator_enabled()
    }
}
