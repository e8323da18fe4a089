use crate::roster::Person;
use std::iter::successors;
use time::{Date, Weekday};

pub(super) const WORKDAYS_IN_WEEK: u8 = 5;

pub(super) trait WeekdayExt {
    /// Monday is 0, Sunday is 6
    fn index0(&self) -> u8;

    fn is_weekend(&self) -> bool;
}

impl WeekdayExt for Weekday {
    fn index0(&self) -> u8 {
        self.number_days_from_monday()
    }

    fn is_weekend(&self) -> bool {
        self.index0() >= WORKDAYS_IN_WEEK
    }
}

/// The text shown at the top of a day's cell, in reduced-size font
pub(super) fn date_text(date: Date) -> String {
    format!(
        "<font size=\"0.8\">{} {}</font>",
        date.day(),
        date.month()
    )
}

/// The line added to a day's cell for someone who is away that day
pub(super) fn absentee_text(person: &Person) -> String {
    format!(
        "\n<br><font color=\"{}\">{}</font>",
        person.color(),
        person.name()
    )
}

/// Join the date texts of `dates` into cells of a single row
pub(super) fn join_cells<I: IntoIterator<Item = Date>>(dates: I) -> String {
    dates
        .into_iter()
        .map(date_text)
        .collect::<Vec<_>>()
        .join(" || ")
}

pub(super) fn iter_days_after(date: Date) -> impl Iterator<Item = Date> {
    successors(Some(date), |&d| d.next_day()).skip(1)
}

pub(super) fn iter_days_before(date: Date) -> impl Iterator<Item = Date> {
    successors(Some(date), |&d| d.previous_day()).skip(1)
}
