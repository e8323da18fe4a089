use crate::calendar::Absentees;
use crate::roster::{Person, Roster};
use crate::year::Year;
use std::collections::BTreeMap;
use std::str::FromStr;
use thiserror::Error;
use time::{format_description::FormatItem, macros::format_description, Date};

static YMD_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Who is away on which day of a year
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct AbsenceRegistry {
    year: Year,
    roster: Roster,
    away: BTreeMap<Date, Vec<Person>>,
}

impl AbsenceRegistry {
    pub(crate) fn new(year: Year, roster: Roster) -> Self {
        AbsenceRegistry {
            year,
            roster,
            away: BTreeMap::new(),
        }
    }

    pub(crate) fn year(&self) -> Year {
        self.year
    }

    pub(crate) fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Mark `name` as away on `date`.
    ///
    /// Registering the same person for the same date twice lists them twice.
    pub(crate) fn register_single_day(
        &mut self,
        name: &str,
        date: Date,
    ) -> Result<(), AbsenceError> {
        let person = self.lookup(name)?.clone();
        self.check_in_year(date)?;
        log::debug!("Registering {name} as away on {date}");
        self.away.entry(date).or_default().push(person);
        Ok(())
    }

    /// Mark `name` as away on every day from `begin` through `end`, weekends
    /// included.  `begin` must be strictly before `end`.
    pub(crate) fn register_range(
        &mut self,
        name: &str,
        begin: Date,
        end: Date,
    ) -> Result<(), AbsenceError> {
        let person = self.lookup(name)?.clone();
        if begin >= end {
            return Err(AbsenceError::InvalidRange { begin, end });
        }
        self.check_in_year(begin)?;
        self.check_in_year(end)?;
        log::debug!("Registering {name} as away from {begin} through {end}");
        let year = self.year;
        for d in year
            .days()
            .skip_while(|&d| d < begin)
            .take_while(|&d| d <= end)
        {
            self.away.entry(d).or_default().push(person.clone());
        }
        Ok(())
    }

    pub(crate) fn register(&mut self, spec: &AwaySpec) -> Result<(), AbsenceError> {
        match spec.end {
            Some(end) => self.register_range(&spec.name, spec.begin, end),
            None => self.register_single_day(&spec.name, spec.begin),
        }
    }

    fn lookup(&self, name: &str) -> Result<&Person, AbsenceError> {
        self.roster
            .get(name)
            .ok_or_else(|| AbsenceError::UnknownPerson(name.to_owned()))
    }

    fn check_in_year(&self, date: Date) -> Result<(), AbsenceError> {
        if self.year.contains(date) {
            Ok(())
        } else {
            Err(AbsenceError::OutOfYear {
                date,
                year: self.year,
            })
        }
    }
}

impl Absentees for AbsenceRegistry {
    fn absentees(&self, date: Date) -> &[Person] {
        self.away.get(&date).map(Vec::as_slice).unwrap_or_default()
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub(crate) enum AbsenceError {
    #[error("{0:?} is not in the list of names")]
    UnknownPerson(String),
    #[error("invalid absence range: {begin} is not before {end}")]
    InvalidRange { begin: Date, end: Date },
    #[error("{date} is not in {year}")]
    OutOfYear { date: Date, year: Year },
}

/// An absence given on the command line, written `NAME=YYYY-MM-DD` for a
/// single day or `NAME=YYYY-MM-DD..YYYY-MM-DD` for a range
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct AwaySpec {
    name: String,
    begin: Date,
    end: Option<Date>,
}

impl FromStr for AwaySpec {
    type Err = AwaySpecError;

    fn from_str(s: &str) -> Result<AwaySpec, AwaySpecError> {
        let Some((name, dates)) = s.rsplit_once('=') else {
            return Err(AwaySpecError::MissingDates);
        };
        if name.trim().is_empty() {
            return Err(AwaySpecError::MissingName);
        }
        let parse_date = |d: &str| {
            Date::parse(d.trim(), &YMD_FMT).map_err(|_| AwaySpecError::InvalidDate(d.to_owned()))
        };
        let (begin, end) = match dates.split_once("..") {
            Some((begin, end)) => (parse_date(begin)?, Some(parse_date(end)?)),
            None => (parse_date(dates)?, None),
        };
        Ok(AwaySpec {
            name: name.to_owned(),
            begin,
            end,
        })
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub(crate) enum AwaySpecError {
    #[error("expected NAME=DATE or NAME=DATE..DATE")]
    MissingDates,
    #[error("no name given before '='")]
    MissingName,
    #[error("invalid date {0:?}; expected YYYY-MM-DD")]
    InvalidDate(String),
}
