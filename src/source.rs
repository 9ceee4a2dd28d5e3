use crate::{CivilDateTime, FieldError};

/// A date/time value that can be read as local calendar fields.
///
/// Implementations that can hold values which are not real calendar dates
/// (raw field tuples, for instance) report that through `FieldError`.
pub trait DateLike {
    /// # Errors
    /// Returns the `FieldError` of the first field that is out of range.
    fn to_civil(&self) -> Result<CivilDateTime, FieldError>;
}

impl DateLike for CivilDateTime {
    fn to_civil(&self) -> Result<CivilDateTime, FieldError> {
        Ok(*self)
    }
}

/// Raw `(year, month, day, hour, minute)` fields; `month` is one-based.
impl DateLike for (i32, u8, u8, u8, u8) {
    fn to_civil(&self) -> Result<CivilDateTime, FieldError> {
        let (year, month, day, hour, minute) = *self;
        CivilDateTime::new(year, month, day, hour, minute)
    }
}

/// Raw `(year, month, day)` fields at midnight; `month` is one-based.
impl DateLike for (i32, u8, u8) {
    fn to_civil(&self) -> Result<CivilDateTime, FieldError> {
        let (year, month, day) = *self;
        CivilDateTime::from_date(year, month, day)
    }
}

impl<T: DateLike + ?Sized> DateLike for &T {
    fn to_civil(&self) -> Result<CivilDateTime, FieldError> {
        (**self).to_civil()
    }
}

#[cfg(feature = "chrono")]
mod chrono_impls {
    use chrono::{Datelike, Timelike};

    use super::DateLike;
    use crate::{CivilDateTime, FieldError};

    fn civil_from<T: Datelike + Timelike>(value: &T) -> Result<CivilDateTime, FieldError> {
        CivilDateTime::new(
            value.year(),
            narrow(value.month()),
            narrow(value.day()),
            narrow(value.hour()),
            narrow(value.minute()),
        )
    }

    // chrono keeps these fields far below u8::MAX; saturating still fails validation
    fn narrow(field: u32) -> u8 {
        u8::try_from(field).unwrap_or(u8::MAX)
    }

    impl DateLike for chrono::NaiveDateTime {
        fn to_civil(&self) -> Result<CivilDateTime, FieldError> {
            civil_from(self)
        }
    }

    /// Uses the wall-clock fields in the value's own offset; nothing is converted.
    impl<Tz: chrono::TimeZone> DateLike for chrono::DateTime<Tz> {
        fn to_civil(&self) -> Result<CivilDateTime, FieldError> {
            civil_from(&self.naive_local())
        }
    }

    impl DateLike for chrono::NaiveDate {
        fn to_civil(&self) -> Result<CivilDateTime, FieldError> {
            civil_from(&self.and_time(chrono::NaiveTime::MIN))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Fields = (i32, u8, u8, u8, u8);
    type DateFields = (i32, u8, u8);

    #[test]
    fn test_tuple_fields() {
        let fields: Fields = (2024, 1, 5, 20, 0);
        assert_eq!(
            fields.to_civil().unwrap(),
            CivilDateTime::new(2024, 1, 5, 20, 0).unwrap()
        );

        let fields: DateFields = (2020, 1, 15);
        let civil = fields.to_civil().unwrap();
        assert_eq!(civil.hour().get(), 0);
        assert_eq!(civil.minute().get(), 0);
    }

    #[test]
    fn test_tuple_rejects_unreal_dates() {
        let leap_day: DateFields = (2023, 2, 29);
        assert!(matches!(
            leap_day.to_civil(),
            Err(FieldError::InvalidDay { .. })
        ));

        let month_zero: Fields = (2024, 0, 1, 0, 0);
        assert!(matches!(
            month_zero.to_civil(),
            Err(FieldError::InvalidMonth(0))
        ));

        let year_zero: DateFields = (0, 1, 1);
        assert!(matches!(
            year_zero.to_civil(),
            Err(FieldError::InvalidYear(0))
        ));
    }

    #[test]
    fn test_reference_forwards() {
        let civil = CivilDateTime::new(2024, 7, 5, 0, 2).unwrap();
        let by_ref: &dyn DateLike = &civil;
        assert_eq!((&by_ref).to_civil().unwrap(), civil);
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_chrono_naive() {
        let naive = chrono::NaiveDate::from_ymd_opt(2024, 5, 20)
            .and_then(|d| d.and_hms_opt(8, 9, 30))
            .unwrap();
        assert_eq!(
            naive.to_civil().unwrap(),
            CivilDateTime::new(2024, 5, 20, 8, 9).unwrap()
        );

        let date = chrono::NaiveDate::from_ymd_opt(2024, 12, 5).unwrap();
        assert_eq!(
            date.to_civil().unwrap(),
            CivilDateTime::from_date(2024, 12, 5).unwrap()
        );
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_chrono_keeps_wall_clock() {
        use chrono::TimeZone;

        let offset = chrono::FixedOffset::west_opt(5 * 3600).unwrap();
        let dt = offset
            .with_ymd_and_hms(2024, 1, 5, 20, 0, 0)
            .single()
            .unwrap();
        assert_eq!(
            dt.to_civil().unwrap(),
            CivilDateTime::new(2024, 1, 5, 20, 0).unwrap()
        );
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_chrono_year_out_of_range() {
        let naive = chrono::NaiveDate::from_ymd_opt(12_000, 1, 1).unwrap();
        assert!(matches!(
            naive.to_civil(),
            Err(FieldError::InvalidYear(12_000))
        ));
    }
}
