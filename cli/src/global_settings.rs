use clap::{arg, value_parser, Arg, ArgMatches, ValueEnum};
use log::LevelFilter;

/// Which kind of range the command works on.  Payloads do not record
/// their domain, so it must be given on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Domain {
    /// int4range, 32 bits integer bounds
    Int4,

    /// float8range, double-precision bounds
    Float8,
}

pub struct GlobalSettings {
    pub domain: Domain,

    // Print results as JSON rather than plain text
    pub json: bool,

    // Number of -v switches
    pub verbosity: u8,
}

impl GlobalSettings {
    /// Return the command line switches to configure the global settings
    pub fn cli() -> impl IntoIterator<Item = Arg> {
        [
            arg!(--domain <DOMAIN> "Scalar domain of the ranges")
                .value_parser(value_parser!(Domain))
                .default_value("int4")
                .global(true),
            arg!(--json "Output results as JSON").global(true),
            arg!(-v --verbose ... "More logging, repeat for more details")
                .global(true),
        ]
    }

    /// Create the settings from the command line arguments.
    pub fn new(args: &ArgMatches) -> Self {
        GlobalSettings {
            domain: args
                .get_one::<Domain>("domain")
                .copied()
                .unwrap_or(Domain::Int4),
            json: args.get_flag("json"),
            verbosity: args.get_count("verbose"),
        }
    }

    /// The log level selected by the -v switches.  RUST_LOG, when set,
    /// takes precedence.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::args::build_cli;
    use crate::global_settings::{Domain, GlobalSettings};
    use log::LevelFilter;

    #[test]
    fn test_settings() -> Result<(), clap::Error> {
        let m = build_cli().try_get_matches_from(["ranges", "parse", "[1,2)"])?;
        let s = GlobalSettings::new(&m);
        assert_eq!(s.domain, Domain::Int4);
        assert!(!s.json);
        assert_eq!(s.log_level(), LevelFilter::Warn);

        // global switches are accepted after the subcommand too
        let m = build_cli().try_get_matches_from([
            "ranges", "-vv", "parse", "[1,2)", "--domain", "float8", "--json",
        ])?;
        let s = GlobalSettings::new(&m);
        assert_eq!(s.domain, Domain::Float8);
        assert!(s.json);
        assert_eq!(s.log_level(), LevelFilter::Debug);

        assert!(build_cli()
            .try_get_matches_from(["ranges", "--domain", "int8", "parse", "[1,2)"])
            .is_err());
        Ok(())
    }
}
