use super::util::{
    absentee_text, date_text, iter_days_after, iter_days_before, join_cells, WeekdayExt,
    WORKDAYS_IN_WEEK,
};
use super::Absentees;
use crate::year::Year;
use std::iter::{once, successors};
use time::{Date, Duration, Weekday};

static HEADER: &str =
    "{| class=\"wikitable\"\n|-\n! Monday !! Tuesday !! Wednesday !! Thursday !! Friday\n|-\n";

static ROW_BREAK: &str = "\n|-\n|";

static FOOTER: &str = "\n|}";

/// Separator placed before every cell but a Monday's
static CELL_SEP: &str = "\n\n|| ";

#[derive(Clone, Debug, Eq, PartialEq)]
// Invariant: Five consecutive dates, Monday through Friday
pub(super) struct Week(Vec<Date>);

impl Week {
    fn starting(monday: Date) -> Week {
        Week(
            once(monday)
                .chain(iter_days_after(monday))
                .take(usize::from(WORKDAYS_IN_WEEK))
                .collect(),
        )
    }

    pub(super) fn days(&self) -> &[Date] {
        &self.0
    }
}

/// A wikitable with one row per week of a year and one column per workday,
/// listing in each cell the people who are away that day
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct CalendarTable<A> {
    year: Year,
    absentees: A,
}

impl<A: Absentees> CalendarTable<A> {
    pub(crate) fn new(year: Year, absentees: A) -> Self {
        CalendarTable { year, absentees }
    }

    /// The weeks shown in the table.  The first and last weeks may include
    /// days from the neighbouring years so that every row is complete.
    pub(super) fn weeks(&self) -> Vec<Week> {
        let first = self.year.first_day();
        let last = self.year.last_day();
        // If the year starts on a weekend, the table starts on the following
        // Monday rather than with a row of the previous year's dates.
        let start = once(first)
            .chain(iter_days_after(first))
            .find(|d| !d.weekday().is_weekend())
            .unwrap_or(first);
        let monday = iter_days_before(start)
            .take(usize::from(start.weekday().index0()))
            .last()
            .unwrap_or(start);
        successors(Some(monday), |&m| m.checked_add(Duration::weeks(1)))
            .take_while(|&m| m <= last)
            .map(Week::starting)
            .collect()
    }

    /// The wikitable source as an ordered sequence of fragments whose
    /// concatenation is the complete table
    pub(crate) fn fragments(&self) -> Vec<String> {
        let mut frags = vec![String::from(HEADER)];
        for (i, week) in self.weeks().into_iter().enumerate() {
            let days = week.days();
            let leading = days
                .iter()
                .take_while(|&&d| d < self.year.first_day())
                .count();
            if i == 0 {
                frags.push(format!(
                    "| {}",
                    join_cells(days.iter().take(leading).copied())
                ));
            } else {
                frags.push(String::from(ROW_BREAK));
            }
            for &d in days.iter().skip(leading) {
                if self.year.contains(d) {
                    let sep = if d.weekday() == Weekday::Monday {
                        ""
                    } else {
                        CELL_SEP
                    };
                    frags.push(format!("{sep} {} ", date_text(d)));
                    frags.extend(self.absentees.absentees(d).iter().map(absentee_text));
                } else {
                    frags.push(format!("{CELL_SEP} {} ", date_text(d)));
                }
            }
        }
        frags.push(String::from(FOOTER));
        frags
    }

    pub(crate) fn render(&self) -> String {
        self.fragments().concat()
    }
}
