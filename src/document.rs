use crate::absence::AbsenceRegistry;
use crate::calendar::CalendarTable;
use crate::legend::LegendTable;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

static HEADER: &[&str] = &[
    "[[Category:HolidayRoster]]",
    "",
    "You can find how to correctly edit this page in [[:Category:HolidayRoster | the category page]].",
    "==Holidays==",
];

static HOW_TO_ADD: &[&str] = &[
    "",
    "==How to add to the table==",
    "To add your own name, just find the correct cell.",
    "Add your own name, with a nice color by using HTML.",
    "<syntaxhighlight lang=\"html4strict\">",
    "<br/> <font color=\"<yourColor>\"> <yourname> </font>",
    "</syntaxhighlight>",
    "",
    "==List of names and colors==",
    "The following is a list of all names that have been used already",
];

static COMBINED_FILE: &str = "calendar.txt";
static CALENDAR_FILE: &str = "rawcalendar.txt";
static LEGEND_FILE: &str = "names.txt";

/// Everything written by a run, rendered up front so that nothing is written
/// if rendering fails
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Document {
    calendar: String,
    legend: String,
}

impl Document {
    pub(crate) fn new(registry: &AbsenceRegistry) -> Document {
        let calendar = CalendarTable::new(registry.year(), registry).render();
        let legend = LegendTable::new(registry.roster()).render();
        Document { calendar, legend }
    }

    /// The calendar table on its own
    pub(crate) fn calendar(&self) -> &str {
        &self.calendar
    }

    /// The legend table on its own
    pub(crate) fn legend(&self) -> &str {
        &self.legend
    }

    /// The full wiki page: introduction, calendar, instructions, legend
    pub(crate) fn combined(&self) -> String {
        let mut s = String::new();
        for line in HEADER {
            s.push_str(line);
            s.push('\n');
        }
        s.push_str(&self.calendar);
        for line in HOW_TO_ADD {
            s.push_str(line);
            s.push('\n');
        }
        s.push_str(&self.legend);
        s
    }

    /// Write the combined page, the calendar, and the legend to their files
    /// in `outdir`, overwriting any existing files, and return the paths
    /// written
    pub(crate) fn write(&self, outdir: &Path) -> anyhow::Result<Vec<PathBuf>> {
        let combined = self.combined();
        let mut written = Vec::with_capacity(3);
        for (filename, content) in [
            (COMBINED_FILE, combined.as_str()),
            (CALENDAR_FILE, self.calendar()),
            (LEGEND_FILE, self.legend()),
        ] {
            let path = outdir.join(filename);
            fs::write(&path, content)
                .with_context(|| format!("failed to write {}", path.display()))?;
            log::info!("Wrote {}", path.display());
            written.push(path);
        }
        Ok(written)
    }
}
