#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

mod config;
mod consts;
mod parts;
mod pattern;
mod prelude;
mod source;
mod types;

pub use config::FormatterConfig;
pub use consts::*;
pub use parts::{DateParts, Meridiem};
pub use pattern::Pattern;
pub use source::DateLike;
pub use types::{CivilDateTime, Day, FieldError, Hour, Minute, Month, Year};

/// Error raised when a formatter cannot be configured.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// No name tables exist for the requested locale.
    #[error("Only {supported} is supported, got {0:?}", supported = SUPPORTED_LOCALE)]
    UnsupportedLocale(String),
}

/// Error raised by [`DateFormatter::format`] and friends.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// No date was given.
    #[error("Date is required.")]
    MissingInput,

    /// The date's fields do not denote a real calendar date/time.
    #[error("Invalid Date: {0}")]
    InvalidDate(#[from] FieldError),

    /// The pattern is not one of the supported literals.
    #[error("The pattern {0:?} is not supported.")]
    UnsupportedPattern(String),
}

/// Renders dates through the fixed en-US pattern table.
///
/// ```
/// use date_filter::{CivilDateTime, DateFormatter, Pattern};
///
/// let formatter = DateFormatter::default();
/// let date = CivilDateTime::new(2024, 1, 5, 20, 0)?;
/// assert_eq!(
///     formatter.format(Some(&date), Pattern::WeekdayDateTime)?,
///     "Friday Jan 5, 2024 8:00 PM"
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateFormatter {
    locale: String,
}

impl DateFormatter {
    /// Creates a formatter for `locale`.
    ///
    /// # Errors
    /// Returns `ConfigError::UnsupportedLocale` for anything but `SUPPORTED_LOCALE`.
    pub fn new(locale: &str) -> Result<Self, ConfigError> {
        if locale != SUPPORTED_LOCALE {
            return Err(ConfigError::UnsupportedLocale(locale.to_owned()));
        }
        Ok(Self {
            locale: locale.to_owned(),
        })
    }

    /// Returns the locale the formatter was built for
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Formats `date` with `pattern`.
    ///
    /// # Errors
    /// Returns `FormatError::MissingInput` if `date` is `None` and
    /// `FormatError::InvalidDate` if it is not a real calendar date/time.
    pub fn format<D: DateLike + ?Sized>(
        &self,
        date: Option<&D>,
        pattern: Pattern,
    ) -> Result<String, FormatError> {
        let parts = Self::parts_of(date)?;
        Ok(self.format_parts(&parts, pattern))
    }

    /// Formats `date` with a pattern given as its literal string.
    ///
    /// The date is checked before the pattern.
    ///
    /// # Errors
    /// As [`DateFormatter::format`], plus `FormatError::UnsupportedPattern`
    /// if `pattern` is not one of the supported literals.
    pub fn format_str<D: DateLike + ?Sized>(
        &self,
        date: Option<&D>,
        pattern: &str,
    ) -> Result<String, FormatError> {
        let parts = Self::parts_of(date)?;
        let pattern = pattern.parse::<Pattern>().inspect_err(|e| {
            log::debug!("format_str: {e}");
        })?;
        Ok(self.format_parts(&parts, pattern))
    }

    /// Renders already extracted parts. Composite patterns recurse into
    /// their component patterns, so they always agree with them.
    pub fn format_parts(&self, parts: &DateParts, pattern: Pattern) -> String {
        log::trace!("format_parts: pattern={pattern} parts={parts:?}");

        match pattern {
            Pattern::Day => parts.day().to_string(),
            Pattern::PaddedDay => prepend_zero(u32::from(parts.day()), FIELD_WIDTH),
            Pattern::Weekday => DAY_NAMES[usize::from(parts.weekday())].0.to_owned(),
            Pattern::WeekdayDateTime => format!(
                "{} {} {}, {} {}:{} {}",
                self.format_parts(parts, Pattern::Weekday),
                self.format_parts(parts, Pattern::MonthAbbrev),
                self.format_parts(parts, Pattern::Day),
                self.format_parts(parts, Pattern::Year),
                parts.hour(),
                prepend_zero(u32::from(parts.minute()), FIELD_WIDTH),
                parts.meridiem(),
            ),
            Pattern::Month => (u32::from(parts.month()) + 1).to_string(),
            Pattern::PaddedMonth => prepend_zero(u32::from(parts.month()) + 1, FIELD_WIDTH),
            Pattern::ShortDate => [Pattern::Month, Pattern::Day, Pattern::ShortYear]
                .map(|p| self.format_parts(parts, p))
                .join("/"),
            Pattern::PaddedShortDate => {
                [Pattern::PaddedMonth, Pattern::PaddedDay, Pattern::ShortYear]
                    .map(|p| self.format_parts(parts, p))
                    .join("/")
            }
            Pattern::MonthAbbrev => MONTH_NAMES[usize::from(parts.month())].1.to_owned(),
            Pattern::MonthName => MONTH_NAMES[usize::from(parts.month())].0.to_owned(),
            Pattern::MonthYear => [Pattern::MonthName, Pattern::Year]
                .map(|p| self.format_parts(parts, p))
                .join(" "),
            Pattern::Year => parts.year().to_string(),
            Pattern::ShortYear => {
                let year = self.format_parts(parts, Pattern::Year);
                // From the third character on, not the last two: 206 -> "6"
                year.get(consts::SHORT_YEAR_OFFSET..)
                    .unwrap_or_default()
                    .to_owned()
            }
        }
    }

    fn parts_of<D: DateLike + ?Sized>(date: Option<&D>) -> Result<DateParts, FormatError> {
        let Some(date) = date else {
            log::debug!("format: no date given");
            return Err(FormatError::MissingInput);
        };
        let civil = date.to_civil().inspect_err(|e| {
            log::debug!("format: rejecting date: {e}");
        })?;
        Ok(DateParts::extract(&civil))
    }
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self {
            locale: SUPPORTED_LOCALE.to_owned(),
        }
    }
}

impl TryFrom<&str> for DateFormatter {
    type Error = ConfigError;

    fn try_from(locale: &str) -> Result<Self, Self::Error> {
        Self::new(locale)
    }
}

/// Renders `num` in decimal behind `ZERO_PAD` and keeps the rightmost
/// `width` characters. Values wider than `width` lose their leading digits.
pub fn prepend_zero(num: u32, width: usize) -> String {
    let padded = format!("{}{num}", consts::ZERO_PAD);
    padded[padded.len().saturating_sub(width)..].to_owned()
}
