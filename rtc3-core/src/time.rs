//! Time, date and configuration value types

use core::fmt::Write;

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Capacity of formatted time/date strings
pub const MAX_FORMAT_LEN: usize = 24;

/// Time of day in 24-hour form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeOfDay {
    /// 0-23
    pub hours: u8,
    /// 0-59
    pub minutes: u8,
    /// 0-59
    pub seconds: u8,
}

impl TimeOfDay {
    /// Create a time of day
    ///
    /// Values are not checked here; the driver wraps them on write.
    pub const fn new(hours: u8, minutes: u8, seconds: u8) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// 00:00:00
    pub fn is_midnight(&self) -> bool {
        (self.hours | self.minutes | self.seconds) == 0
    }

    /// Seconds elapsed since midnight
    pub fn seconds_since_midnight(&self) -> u32 {
        self.hours as u32 * 3600 + self.minutes as u32 * 60 + self.seconds as u32
    }

    /// Render as `HH:MM:SS`
    pub fn format(&self) -> String<MAX_FORMAT_LEN> {
        let mut out = String::new();
        let _ = write!(
            out,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        );
        out
    }
}

/// Day of the week as numbered by the chip
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Weekday {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl Weekday {
    /// Map a register value to a weekday
    ///
    /// Returns `None` for anything outside 1-7.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Weekday::Monday),
            2 => Some(Weekday::Tuesday),
            3 => Some(Weekday::Wednesday),
            4 => Some(Weekday::Thursday),
            5 => Some(Weekday::Friday),
            6 => Some(Weekday::Saturday),
            7 => Some(Weekday::Sunday),
            _ => None,
        }
    }

    /// Register value (1-7)
    pub fn number(self) -> u8 {
        self as u8
    }

    /// English name
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

/// Calendar date as stored on the chip
///
/// `year` is the two-digit year when read back from the device. When
/// writing, any year is accepted and reduced modulo 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalendarDate {
    /// 1 = Monday ... 7 = Sunday
    pub day_of_week: u8,
    /// 1-31
    pub day: u8,
    /// 1-12
    pub month: u8,
    /// 0-99 on read
    pub year: u16,
}

impl Default for CalendarDate {
    fn default() -> Self {
        Self {
            day_of_week: 1,
            day: 1,
            month: 1,
            year: 0,
        }
    }
}

impl CalendarDate {
    /// Create a date
    pub const fn new(day_of_week: u8, day: u8, month: u8, year: u16) -> Self {
        Self {
            day_of_week,
            day,
            month,
            year,
        }
    }

    /// Typed weekday, if the stored number is valid
    pub fn weekday(&self) -> Option<Weekday> {
        Weekday::from_number(self.day_of_week)
    }

    /// First of January
    pub fn is_new_year(&self) -> bool {
        self.day == 1 && self.month == 1
    }

    /// Render as `Weekday DD.MM.YY`
    ///
    /// An out-of-range weekday is rendered as `?`.
    pub fn format(&self) -> String<MAX_FORMAT_LEN> {
        let mut out = String::new();
        let name = self.weekday().map(Weekday::name).unwrap_or("?");
        let _ = write!(
            out,
            "{} {:02}.{:02}.{:02}",
            name,
            self.day,
            self.month,
            self.year % 100
        );
        out
    }
}

/// Direction of the oscillator calibration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalibrationSign {
    /// Sign bit clear
    Negative = 0,
    /// Sign bit set
    Positive = 1,
}

impl From<bool> for CalibrationSign {
    fn from(positive: bool) -> Self {
        if positive {
            CalibrationSign::Positive
        } else {
            CalibrationSign::Negative
        }
    }
}

/// Frequency of the calibration output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FrequencyOutput {
    /// Normal 512 Hz output
    #[default]
    Hz512,
    /// 1 Hz output
    Hz1,
}

/// State of a trickle charge switch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SwitchState {
    /// Switch open, no charge current
    #[default]
    Open,
    /// Switch closed
    Closed,
}

impl From<bool> for SwitchState {
    fn from(closed: bool) -> Self {
        if closed {
            SwitchState::Closed
        } else {
            SwitchState::Open
        }
    }
}
