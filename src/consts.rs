/// The only locale with name tables; also the default
pub const SUPPORTED_LOCALE: &str = "en-US";

/// Minimum valid year (inclusive)
pub const MIN_YEAR: i32 = 1;

/// Maximum valid year (inclusive)
pub const MAX_YEAR: i32 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Last hour of the 24-hour clock
pub const MAX_HOUR: u8 = 23;

/// Last minute of the hour
pub const MAX_MINUTE: u8 = 59;

/// First hour of the afternoon, and the length of each 12-hour half of the day
pub const NOON: u8 = 12;

/// Zeros prepended to a number before its rightmost digits are sliced off
pub(crate) const ZERO_PAD: &str = "0000";

/// Width of the zero-padded `dd`/`MM`/minute fields
pub const FIELD_WIDTH: usize = 2;

/// Byte offset `yy` slices the decimal year from
pub(crate) const SHORT_YEAR_OFFSET: usize = 2;

/// Month names as `(full, abbreviated)`, indexed by zero-based month
pub const MONTH_NAMES: [(&str, &str); 12] = [
    ("January", "Jan"),
    ("February", "Feb"),
    ("March", "Mar"),
    ("April", "Apr"),
    ("May", "May"),
    ("June", "Jun"),
    ("July", "Jul"),
    ("August", "Aug"),
    ("September", "Sep"),
    ("October", "Oct"),
    ("November", "Nov"),
    ("December", "Dec"),
];

/// Day names as `(full, abbreviated)`, indexed by zero-based weekday (0 = Sunday)
pub const DAY_NAMES: [(&str, &str); 7] = [
    ("Sunday", "Sun"),
    ("Monday", "Mon"),
    ("Tuesday", "Tue"),
    ("Wednesday", "Wed"),
    ("Thursday", "Thu"),
    ("Friday", "Fri"),
    ("Saturday", "Sat"),
];

/// Date component separator used by `CivilDateTime`'s display form
pub const DATE_SEPARATOR: char = '-';
/// Separator between the date and time halves of `CivilDateTime`'s display form
pub const TIME_DESIGNATOR: char = 'T';
