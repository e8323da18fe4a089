use std::collections::HashSet;
use thiserror::Error;

/// Display colors handed out to people in roster order
pub(crate) static PALETTE: &[&str] = &[
    "green", "red", "purple", "magenta", "orange", "blue", "cyan", "violet", "yellow", "wheat",
];

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Person {
    name: String,
    color: &'static str,
}

impl Person {
    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn color(&self) -> &'static str {
        self.color
    }
}

/// The people taking part in a holiday calendar, each with their own color.
///
/// The `n`-th name given to [`Roster::new`] is assigned the `n`-th entry of
/// [`PALETTE`]; the assignment never changes afterwards.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Roster(Vec<Person>);

impl Roster {
    pub(crate) fn new<I, S>(names: I) -> Result<Roster, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut people = Vec::new();
        let mut seen = HashSet::new();
        for name in names {
            let name = name.into();
            if name.trim().is_empty() {
                return Err(ConfigurationError::EmptyName);
            }
            if !seen.insert(name.clone()) {
                return Err(ConfigurationError::DuplicateName(name));
            }
            let Some(&color) = PALETTE.get(people.len()) else {
                return Err(ConfigurationError::TooManyPeople {
                    colors: PALETTE.len(),
                });
            };
            people.push(Person { name, color });
        }
        Ok(Roster(people))
    }

    pub(crate) fn get(&self, name: &str) -> Option<&Person> {
        self.0.iter().find(|p| p.name == name)
    }

    /// People in the order their names were given
    pub(crate) fn iter(&self) -> std::slice::Iter<'_, Person> {
        self.0.iter()
    }

    /// People sorted by name
    pub(crate) fn sorted(&self) -> Vec<&Person> {
        let mut people = self.0.iter().collect::<Vec<_>>();
        people.sort_by(|a, b| a.name.cmp(&b.name));
        people
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub(crate) enum ConfigurationError {
    #[error("too many people: only {colors} display colors are available")]
    TooManyPeople { colors: usize },
    #[error("name {0:?} was given more than once")]
    DuplicateName(String),
    #[error("names must not be empty")]
    EmptyName,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors_in_order() -> Result<(), ConfigurationError> {
        let roster = Roster::new(["Ann", "Bo", "Cy"])?;
        let assigned = roster
            .iter()
            .map(|p| (p.name(), p.color()))
            .collect::<Vec<_>>();
        assert_eq!(
            assigned,
            [("Ann", "green"), ("Bo", "red"), ("Cy", "purple")]
        );
        Ok(())
    }

    #[test]
    fn test_full_palette() -> Result<(), ConfigurationError> {
        let names = (0..PALETTE.len()).map(|i| format!("Person {i}"));
        let roster = Roster::new(names)?;
        assert_eq!(roster.iter().count(), PALETTE.len());
        let colors = roster.iter().map(Person::color).collect::<HashSet<_>>();
        assert_eq!(colors.len(), PALETTE.len());
        Ok(())
    }

    #[test]
    fn test_too_many_people() {
        let names = (0..=PALETTE.len()).map(|i| format!("Person {i}"));
        assert_eq!(
            Roster::new(names),
            Err(ConfigurationError::TooManyPeople {
                colors: PALETTE.len()
            })
        );
    }

    #[test]
    fn test_duplicate_name() {
        assert_eq!(
            Roster::new(["Ann", "Bo", "Ann"]),
            Err(ConfigurationError::DuplicateName(String::from("Ann")))
        );
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(
            Roster::new(["Ann", " "]),
            Err(ConfigurationError::EmptyName)
        );
    }

    #[test]
    fn test_get() -> Result<(), ConfigurationError> {
        let roster = Roster::new(["Ann", "Bo"])?;
        assert_eq!(roster.get("Bo").map(Person::color), Some("red"));
        assert_eq!(roster.get("Cy"), None);
        Ok(())
    }

    #[test]
    fn test_sorted() -> Result<(), ConfigurationError> {
        let roster = Roster::new(["Zed", "Ann", "Mo"])?;
        let names = roster.sorted().into_iter().map(Person::name).collect::<Vec<_>>();
        assert_eq!(names, ["Ann", "Mo", "Zed"]);
        assert_eq!(roster.get("Zed").map(Person::color), Some("green"));
        Ok(())
    }
}
