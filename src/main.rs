mod absence;
mod calendar;
mod document;
mod legend;
mod roster;
mod year;
use crate::absence::{AbsenceRegistry, AwaySpec};
use crate::document::Document;
use crate::roster::Roster;
use crate::year::Year;
use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use std::path::PathBuf;
use time::OffsetDateTime;

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run {
        year: Option<Year>,
        silent: bool,
        outdir: PathBuf,
        away: Vec<AwaySpec>,
        names: Vec<String>,
    },
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut year = None;
        let mut silent = false;
        let mut outdir = PathBuf::from(".");
        let mut away = Vec::new();
        let mut names = Vec::new();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('y') | Arg::Long("year") => year = Some(parser.value()?.parse()?),
                Arg::Short('s') | Arg::Long("silent") => silent = true,
                Arg::Short('o') | Arg::Long("output-dir") => outdir = parser.value()?.into(),
                Arg::Short('a') | Arg::Long("away") => away.push(parser.value()?.parse()?),
                Arg::Value(value) => names.push(value.string()?),
                _ => return Err(arg.unexpected()),
            }
        }
        if names.is_empty() {
            return Err("at least one name is required".into());
        }
        Ok(Command::Run {
            year,
            silent,
            outdir,
            away,
            names,
        })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run {
                year,
                silent,
                outdir,
                away,
                names,
            } => {
                let year = match year {
                    Some(y) => y,
                    None => {
                        let today = OffsetDateTime::now_local()
                            .context("failed to determine local date")?
                            .date();
                        Year::after(today)?
                    }
                };
                let roster = Roster::new(names)?;
                for person in roster.iter() {
                    log::debug!("{} is shown in {}", person.name(), person.color());
                }
                let mut registry = AbsenceRegistry::new(year, roster);
                for spec in &away {
                    registry.register(spec)?;
                }
                let doc = Document::new(&registry);
                for path in doc.write(&outdir)? {
                    if !silent {
                        println!("Wrote {}", path.display());
                    }
                }
                Ok(())
            }
            Command::Help => {
                println!("Usage: wikiaway [<options>] <name> ...");
                println!();
                println!("Generate MediaWiki holiday calendars marking who is away on which weekday");
                println!();
                println!("Options:");
                println!("  -a, --away <NAME=DATE[..DATE]>");
                println!("                    Mark NAME as away on DATE (YYYY-MM-DD) or on every");
                println!("                    day of an inclusive date range; may be repeated");
                println!();
                println!("  -o, --output-dir <DIR>");
                println!("                    Write the output files to DIR [default: .]");
                println!();
                println!("  -s, --silent      Do not report the files written");
                println!();
                println!("  -y, --year <YEAR> Draw the calendar for YEAR [default: next year]");
                println!();
                println!("  -h, --help        Display this help message and exit");
                println!("  -V, --version     Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    Command::from_parser(Parser::from_env())?.run()
}
