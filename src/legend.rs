use crate::roster::{Person, Roster};

static HEADER: &str = "\n\n\n{| class=\"wikitable\"\n|-\n! Name !! Color !! HTML Line\n|-\n";

static FOOTER: &str = "|}";

/// A wikitable listing each person's name, color, and the markup for adding
/// themselves to the calendar, one row per person sorted by name
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct LegendTable<'a>(&'a Roster);

impl<'a> LegendTable<'a> {
    pub(crate) fn new(roster: &'a Roster) -> Self {
        LegendTable(roster)
    }

    pub(crate) fn fragments(&self) -> Vec<String> {
        let mut frags = vec![String::from(HEADER)];
        frags.extend(self.0.sorted().into_iter().map(row));
        frags.push(String::from(FOOTER));
        frags
    }

    pub(crate) fn render(&self) -> String {
        self.fragments().concat()
    }
}

fn row(person: &Person) -> String {
    let name = person.name();
    let color = person.color();
    format!(
        "|<font color={color}>{name}</font> || {color}|| <syntaxhighlight lang=\"html4strict\"><br /><font color={color}>{name}</font></syntaxhighlight>\n|-\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::ConfigurationError;

    #[test]
    fn test_rows_sorted() -> Result<(), ConfigurationError> {
        let roster = Roster::new(["Bo", "Ann"])?;
        let frags = LegendTable::new(&roster).fragments();
        assert_eq!(frags.len(), 4);
        assert_eq!(frags[0], HEADER);
        assert_eq!(
            frags[1],
            "|<font color=red>Ann</font> || red|| <syntaxhighlight lang=\"html4strict\"><br /><font color=red>Ann</font></syntaxhighlight>\n|-\n"
        );
        assert_eq!(
            frags[2],
            "|<font color=green>Bo</font> || green|| <syntaxhighlight lang=\"html4strict\"><br /><font color=green>Bo</font></syntaxhighlight>\n|-\n"
        );
        assert_eq!(frags[3], FOOTER);
        Ok(())
    }

    #[test]
    fn test_one_row_per_person() -> Result<(), ConfigurationError> {
        let roster = Roster::new(["Mo", "Cy", "Zed", "Ann", "Bo"])?;
        let text = LegendTable::new(&roster).render();
        assert_eq!(text.matches("\n|-\n|<font").count(), 5);
        assert!(text.ends_with("|}"), "legend should be closed");
        Ok(())
    }
}
