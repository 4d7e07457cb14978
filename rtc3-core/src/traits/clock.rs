//! Real-time clock trait

use crate::time::{CalendarDate, TimeOfDay};

/// Trait for battery-backed real-time clocks
///
/// Implementations hold no copy of the time: every call goes to the chip.
/// Reading or writing time and date touches several registers, one
/// transaction each, so the result can be torn across a rollover. Halt the
/// oscillator around the update when that matters.
pub trait RealTimeClock {
    /// Transport error
    type Error;

    /// Read hours, minutes and seconds
    fn time(&mut self) -> Result<TimeOfDay, Self::Error>;

    /// Write hours, minutes and seconds
    ///
    /// Out-of-range values are wrapped, not rejected.
    fn set_time(&mut self, time: TimeOfDay) -> Result<(), Self::Error>;

    /// Read day of week, day, month and two-digit year
    fn date(&mut self) -> Result<CalendarDate, Self::Error>;

    /// Write day of week, day, month and year
    ///
    /// The year is stored modulo 100.
    fn set_date(&mut self, date: CalendarDate) -> Result<(), Self::Error>;

    /// Start or halt the oscillator
    fn set_running(&mut self, running: bool) -> Result<(), Self::Error>;

    /// Check if the oscillator is counting
    fn is_running(&mut self) -> Result<bool, Self::Error>;

    /// Read date and time back to back
    fn date_time(&mut self) -> Result<(CalendarDate, TimeOfDay), Self::Error> {
        let date = self.date()?;
        let time = self.time()?;
        Ok((date, time))
    }
}
