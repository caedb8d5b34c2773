use log::LevelFilter;
use std::ffi::OsString;
use structopt::StructOpt;

const NAME: &str = "lazyblast";

const ABOUT: &str = "
lazyblast is the proof-state core of a backtracking proof search:
hypotheses, per-branch extension indices, and a unit-propagation action.
";

#[derive(Debug, StructOpt)]
#[structopt(name = NAME, about = ABOUT)]
pub struct Options {
    #[structopt(long, help = "disable the unit-propagation action")]
    pub no_unit: bool,

    #[structopt(
        long,
        help = "do not derive negated antecedents from refuted conclusions"
    )]
    pub no_contrapositive: bool,

    #[structopt(
        long,
        help = "log level",
        possible_values = &["off", "error", "warn", "info", "debug", "trace"],
        default_value = "warn"
    )]
    pub log_level: LevelFilter,
}

impl Options {
    pub fn parse_from<I>(args: I) -> Result<Self, structopt::clap::Error>
    where
        I: IntoIterator,
        I::Item: Into<OsString> + Clone,
    {
        Self::from_iter_safe(args)
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::from_iter(&[NAME])
    }
}
