use crate::consts::{
    CENTURY_CYCLE, DATE_SEPARATOR, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE, MAX_HOUR, MAX_MINUTE, MAX_MONTH, MAX_YEAR, MIN_YEAR, TIME_DESIGNATOR,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// Why a set of calendar fields does not denote a real date/time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum FieldError {
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(i32),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },
    #[display(fmt = "Invalid hour: {} (must be 0-{})", "_0", MAX_HOUR)]
    InvalidHour(u8),
    #[display(fmt = "Invalid minute: {} (must be 0-{})", "_0", MAX_MINUTE)]
    InvalidMinute(u8),
}

impl std::error::Error for FieldError {}

/// A year value guaranteed to be in the range `MIN_YEAR..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it lies within `MIN_YEAR..=MAX_YEAR`
    ///
    /// # Errors
    /// Returns `FieldError::InvalidYear` if the value is out of range.
    pub fn new(value: i32) -> Result<Self, FieldError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&value) {
            return Err(FieldError::InvalidYear(value));
        }
        u16::try_from(value)
            .ok()
            .and_then(NonZeroU16::new)
            .map(Self)
            .ok_or(FieldError::InvalidYear(value))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<i32> for Year {
    type Error = FieldError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for i32 {
    fn from(year: Year) -> Self {
        Self::from(year.0.get())
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A one-based month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `FieldError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, FieldError> {
        let non_zero = NonZeroU8::new(value).ok_or(FieldError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(FieldError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Returns the zero-based month index (January = 0)
    #[inline]
    pub const fn index(self) -> u8 {
        self.0.get() - 1
    }
}

impl TryFrom<u8> for Month {
    type Error = FieldError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the given year and month
    ///
    /// # Errors
    /// Returns `FieldError::InvalidDay` if the value is 0 or invalid for the given year and month.
    pub fn new(value: u8, year: Year, month: Month) -> Result<Self, FieldError> {
        let invalid = FieldError::InvalidDay {
            year: year.into(),
            month: month.get(),
            day: value,
        };
        let non_zero = NonZeroU8::new(value).ok_or(invalid)?;
        if value > days_in_month(year.get(), month.get()) {
            return Err(invalid);
        }
        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = FieldError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't validate the upper bound without year/month context
        NonZeroU8::new(value).map(Self).ok_or(FieldError::InvalidDay {
            year: 0,
            month: 0,
            day: value,
        })
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An hour of the 24-hour clock, `0..=MAX_HOUR`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Into)]
#[serde(try_from = "u8", into = "u8")]
pub struct Hour(u8);

impl Hour {
    /// Creates a new Hour, validating that it's <= `MAX_HOUR`
    ///
    /// # Errors
    /// Returns `FieldError::InvalidHour` if the value is > `MAX_HOUR`.
    pub const fn new(value: u8) -> Result<Self, FieldError> {
        if value > MAX_HOUR {
            return Err(FieldError::InvalidHour(value));
        }
        Ok(Self(value))
    }

    /// Returns the hour value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Hour {
    type Error = FieldError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Hour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A minute of the hour, `0..=MAX_MINUTE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Into)]
#[serde(try_from = "u8", into = "u8")]
pub struct Minute(u8);

impl Minute {
    /// Creates a new Minute, validating that it's <= `MAX_MINUTE`
    ///
    /// # Errors
    /// Returns `FieldError::InvalidMinute` if the value is > `MAX_MINUTE`.
    pub const fn new(value: u8) -> Result<Self, FieldError> {
        if value > MAX_MINUTE {
            return Err(FieldError::InvalidMinute(value));
        }
        Ok(Self(value))
    }

    /// Returns the minute value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Minute {
    type Error = FieldError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Minute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A local calendar date and wall-clock time, to minute precision.
///
/// Every field is validated on construction, so holding one means the value
/// denotes a real proleptic Gregorian date/time. No timezone is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDateTime {
    year: Year,
    month: Month,
    day: Day,
    hour: Hour,
    minute: Minute,
}

impl CivilDateTime {
    /// Creates a date/time from raw fields; `month` is one-based.
    ///
    /// # Errors
    /// Returns the `FieldError` of the first field that is out of range.
    pub fn new(year: i32, month: u8, day: u8, hour: u8, minute: u8) -> Result<Self, FieldError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self {
            year,
            month,
            day,
            hour: Hour::new(hour)?,
            minute: Minute::new(minute)?,
        })
    }

    /// Creates a date/time at midnight.
    ///
    /// # Errors
    /// Returns the `FieldError` of the first field that is out of range.
    pub fn from_date(year: i32, month: u8, day: u8) -> Result<Self, FieldError> {
        Self::new(year, month, day, 0, 0)
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> Day {
        self.day
    }

    pub const fn hour(&self) -> Hour {
        self.hour
    }

    pub const fn minute(&self) -> Minute {
        self.minute
    }

    /// Zero-based day of the week, 0 = Sunday (Sakamoto's method).
    pub fn weekday(&self) -> u8 {
        const MONTH_OFFSETS: [i32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

        let month = self.month.get();
        let mut year = i32::from(self.year);
        // January and February count as months 13 and 14 of the previous year
        if month < 3 {
            year -= 1;
        }
        let leap_days = year / LEAP_YEAR_CYCLE - year / CENTURY_CYCLE + year / GREGORIAN_CYCLE;
        let days = year
            + leap_days
            + MONTH_OFFSETS[usize::from(self.month.index())]
            + i32::from(self.day.get());
        // year >= 0 here, so the remainder is already in 0..7
        u8::try_from(days.rem_euclid(7)).unwrap_or_default()
    }
}

impl fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}{DATE_SEPARATOR}{:02}{DATE_SEPARATOR}{:02}{TIME_DESIGNATOR}{:02}:{:02}",
            self.year.get(),
            self.month.get(),
            self.day.get(),
            self.hour.get(),
            self.minute.get()
        )
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    let year = year as i32;
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
