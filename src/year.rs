use std::fmt;
use std::iter::successors;
use std::str::FromStr;
use thiserror::Error;
use time::{Date, Month};

/// Earliest and latest years whose neighbouring years can still be
/// represented, as the calendar pads its first and last rows with dates from
/// them
const MIN_YEAR: i32 = -9998;
const MAX_YEAR: i32 = 9998;

/// A calendar year for which a holiday table can be drawn
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct Year {
    first: Date,
    last: Date,
}

impl Year {
    pub(crate) fn new(year: i32) -> Result<Year, InvalidYearError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(InvalidYearError::OutOfRange(year));
        }
        let first = Date::from_calendar_date(year, Month::January, 1)
            .map_err(|_| InvalidYearError::OutOfRange(year))?;
        let last = Date::from_calendar_date(year, Month::December, 31)
            .map_err(|_| InvalidYearError::OutOfRange(year))?;
        Ok(Year { first, last })
    }

    /// The year after the one containing `today`
    pub(crate) fn after(today: Date) -> Result<Year, InvalidYearError> {
        Year::new(today.year().saturating_add(1))
    }

    pub(crate) fn number(&self) -> i32 {
        self.first.year()
    }

    pub(crate) fn first_day(&self) -> Date {
        self.first
    }

    pub(crate) fn last_day(&self) -> Date {
        self.last
    }

    pub(crate) fn contains(&self, date: Date) -> bool {
        (self.first..=self.last).contains(&date)
    }

    /// Iterate over every day of the year, weekends included
    pub(crate) fn days(&self) -> impl Iterator<Item = Date> {
        let last = self.last;
        successors(Some(self.first), move |&d| d.next_day().filter(|&d| d <= last))
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl FromStr for Year {
    type Err = InvalidYearError;

    fn from_str(s: &str) -> Result<Year, InvalidYearError> {
        let year = s
            .trim()
            .parse::<i32>()
            .map_err(|_| InvalidYearError::Unparsable(s.to_owned()))?;
        Year::new(year)
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub(crate) enum InvalidYearError {
    #[error("invalid year {0:?}: not an integer")]
    Unparsable(String),
    #[error("year {0} is out of range; expected {MIN_YEAR} through {MAX_YEAR}")]
    OutOfRange(i32),
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_parse() {
        let year = "2024".parse::<Year>();
        assert_eq!(year.as_ref().map(Year::number), Ok(2024));
        assert_eq!(year.map(|y| y.first_day()), Ok(date!(2024 - 01 - 01)));
    }

    #[test]
    fn test_parse_garbage() {
        assert_eq!(
            "twenty".parse::<Year>(),
            Err(InvalidYearError::Unparsable(String::from("twenty")))
        );
        assert_eq!(
            "".parse::<Year>(),
            Err(InvalidYearError::Unparsable(String::new()))
        );
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(Year::new(9999), Err(InvalidYearError::OutOfRange(9999)));
        assert_eq!(Year::new(-9999), Err(InvalidYearError::OutOfRange(-9999)));
        assert!(Year::new(9998).is_ok(), "9998 should be a usable year");
    }

    #[test]
    fn test_after() {
        assert_eq!(
            Year::after(date!(2026 - 10 - 19)).map(|y| y.number()),
            Ok(2027)
        );
    }

    #[test]
    fn test_contains() -> Result<(), InvalidYearError> {
        let year = Year::new(2021)?;
        assert!(year.contains(date!(2021 - 01 - 01)), "Jan 1 is in the year");
        assert!(year.contains(date!(2021 - 12 - 31)), "Dec 31 is in the year");
        assert!(!year.contains(date!(2020 - 12 - 31)), "previous year");
        assert!(!year.contains(date!(2022 - 01 - 01)), "next year");
        Ok(())
    }

    #[test]
    fn test_days() -> Result<(), InvalidYearError> {
        assert_eq!(Year::new(2023)?.days().count(), 365);
        assert_eq!(Year::new(2024)?.days().count(), 366);
        assert_eq!(
            Year::new(2024)?.days().last(),
            Some(date!(2024 - 12 - 31))
        );
        Ok(())
    }
}
