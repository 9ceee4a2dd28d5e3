use serde::Serialize;

use crate::{CivilDateTime, NOON, prelude::*};

/// The half of the day a 12-hour clock reading belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
pub enum Meridiem {
    #[display(fmt = "AM")]
    #[serde(rename = "AM")]
    Am,
    #[display(fmt = "PM")]
    #[serde(rename = "PM")]
    Pm,
}

/// A date broken into the fields every pattern renders from.
///
/// `month` and `weekday` are zero-based (January = 0, Sunday = 0) so they
/// index straight into the name tables; `hour` is on the 12-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateParts {
    year: u16,
    month: u8,
    day: u8,
    weekday: u8,
    hour: u8,
    minute: u8,
    meridiem: Meridiem,
}

impl DateParts {
    /// Decomposes a validated date/time into display fields.
    pub fn extract(date: &CivilDateTime) -> Self {
        let (hour, meridiem) = to_twelve_hour(date.hour().get());
        Self {
            year: date.year().get(),
            month: date.month().index(),
            day: date.day().get(),
            weekday: date.weekday(),
            hour,
            minute: date.minute().get(),
            meridiem,
        }
    }

    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Zero-based month, January = 0
    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Zero-based day of the week, Sunday = 0
    pub const fn weekday(&self) -> u8 {
        self.weekday
    }

    /// Hour on the 12-hour clock, `1..=12`
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    pub const fn minute(&self) -> u8 {
        self.minute
    }

    pub const fn meridiem(&self) -> Meridiem {
        self.meridiem
    }
}

impl From<&CivilDateTime> for DateParts {
    fn from(date: &CivilDateTime) -> Self {
        Self::extract(date)
    }
}

/// Maps a 24-hour reading onto the 12-hour clock. Never yields hour 0.
const fn to_twelve_hour(hour: u8) -> (u8, Meridiem) {
    match hour {
        0 => (NOON, Meridiem::Am),
        h if h < NOON => (h, Meridiem::Am),
        h if h == NOON => (NOON, Meridiem::Pm),
        h => (h - NOON, Meridiem::Pm),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twelve_hour_conversion() {
        let cases = [
            (0, 12, Meridiem::Am),
            (1, 1, Meridiem::Am),
            (8, 8, Meridiem::Am),
            (11, 11, Meridiem::Am),
            (12, 12, Meridiem::Pm),
            (13, 1, Meridiem::Pm),
            (20, 8, Meridiem::Pm),
            (23, 11, Meridiem::Pm),
        ];

        for (h24, hour, meridiem) in cases {
            assert_eq!(to_twelve_hour(h24), (hour, meridiem), "hour {h24}");
        }
    }

    #[test]
    fn test_hour_is_never_zero() {
        for h24 in 0..=23 {
            let (hour, _) = to_twelve_hour(h24);
            assert!((1..=12).contains(&hour), "hour {h24} mapped to {hour}");
        }
    }

    #[test]
    fn test_extract() {
        let date = CivilDateTime::new(2024, 1, 5, 20, 0).unwrap();
        let parts = DateParts::extract(&date);
        assert_eq!(
            parts,
            DateParts {
                year: 2024,
                month: 0,
                day: 5,
                weekday: 5,
                hour: 8,
                minute: 0,
                meridiem: Meridiem::Pm,
            }
        );
    }

    #[test]
    fn test_extract_midnight() {
        let date = CivilDateTime::new(2024, 7, 5, 0, 2).unwrap();
        let parts = DateParts::from(&date);
        assert_eq!(parts.month(), 6);
        assert_eq!(parts.hour(), 12);
        assert_eq!(parts.minute(), 2);
        assert_eq!(parts.meridiem(), Meridiem::Am);
    }

    #[test]
    fn test_meridiem_display() {
        assert_eq!(Meridiem::Am.to_string(), "AM");
        assert_eq!(Meridiem::Pm.to_string(), "PM");
    }

    #[test]
    fn test_parts_serialize() {
        let date = CivilDateTime::new(2024, 5, 20, 8, 9).unwrap();
        let json = serde_json::to_string(&DateParts::extract(&date)).unwrap();
        assert_eq!(
            json,
            r#"{"year":2024,"month":4,"day":20,"weekday":1,"hour":8,"minute":9,"meridiem":"AM"}"#
        );
    }
}
