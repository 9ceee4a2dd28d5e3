use std::str::FromStr;

use serde::Deserialize;

use crate::{FormatError, prelude::*};

/// One of the supported date-filter patterns.
///
/// The set is closed: each variant renders exactly as its literal, and any
/// other string is rejected when parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Pattern {
    /// Day of month, unpadded: `5`
    #[display(fmt = "d")]
    Day,
    /// Day of month, two digits: `05`
    #[display(fmt = "dd")]
    PaddedDay,
    /// Full weekday name: `Friday`
    #[display(fmt = "EEE")]
    Weekday,
    /// `Friday Jan 5, 2024 8:00 PM`
    #[display(fmt = "EEE MMM d, y h:mm a")]
    WeekdayDateTime,
    /// Month number, unpadded: `1`
    #[display(fmt = "M")]
    Month,
    /// Month number, two digits: `01`
    #[display(fmt = "MM")]
    PaddedMonth,
    /// `1/5/24`
    #[display(fmt = "M/d/yy")]
    ShortDate,
    /// `01/05/24`
    #[display(fmt = "MM/dd/yy")]
    PaddedShortDate,
    /// Abbreviated month name: `Jan`
    #[display(fmt = "MMM")]
    MonthAbbrev,
    /// Full month name: `January`
    #[display(fmt = "MMMM")]
    MonthName,
    /// `January 2024`
    #[display(fmt = "MMMM y")]
    MonthYear,
    /// Full year: `2024`
    #[display(fmt = "y")]
    Year,
    /// Year from its third digit on: `24`
    #[display(fmt = "yy")]
    ShortYear,
}

impl Pattern {
    pub const ALL: [Self; 13] = [
        Self::Day,
        Self::PaddedDay,
        Self::Weekday,
        Self::WeekdayDateTime,
        Self::Month,
        Self::PaddedMonth,
        Self::ShortDate,
        Self::PaddedShortDate,
        Self::MonthAbbrev,
        Self::MonthName,
        Self::MonthYear,
        Self::Year,
        Self::ShortYear,
    ];

    /// Returns the literal pattern string
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "d",
            Self::PaddedDay => "dd",
            Self::Weekday => "EEE",
            Self::WeekdayDateTime => "EEE MMM d, y h:mm a",
            Self::Month => "M",
            Self::PaddedMonth => "MM",
            Self::ShortDate => "M/d/yy",
            Self::PaddedShortDate => "MM/dd/yy",
            Self::MonthAbbrev => "MMM",
            Self::MonthName => "MMMM",
            Self::MonthYear => "MMMM y",
            Self::Year => "y",
            Self::ShortYear => "yy",
        }
    }

    /// Whether the pattern is rendered by joining other patterns
    pub const fn is_composite(self) -> bool {
        !self.components().is_empty()
    }

    /// Sub-patterns a composite pattern is assembled from, in order.
    /// The hour, minute and meridiem of `WeekdayDateTime` have no standalone
    /// pattern and are not listed.
    pub const fn components(self) -> &'static [Self] {
        match self {
            Self::ShortDate => &[Self::Month, Self::Day, Self::ShortYear],
            Self::PaddedShortDate => &[Self::PaddedMonth, Self::PaddedDay, Self::ShortYear],
            Self::MonthYear => &[Self::MonthName, Self::Year],
            Self::WeekdayDateTime => {
                &[Self::Weekday, Self::MonthAbbrev, Self::Day, Self::Year]
            }
            _ => &[],
        }
    }
}

impl FromStr for Pattern {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|pattern| pattern.as_str() == s)
            .ok_or_else(|| FormatError::UnsupportedPattern(s.to_owned()))
    }
}

impl TryFrom<&str> for Pattern {
    type Error = FormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl serde::Serialize for Pattern {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
