mod table;
mod util;
pub(crate) use self::table::CalendarTable;
use crate::roster::Person;
use time::Date;

/// Source of the people to list in a date's cell
pub(crate) trait Absentees {
    fn absentees(&self, date: Date) -> &[Person];
}

impl<T: Absentees + ?Sized> Absentees for &T {
    fn absentees(&self, date: Date) -> &[Person] {
        (**self).absentees(date)
    }
}
