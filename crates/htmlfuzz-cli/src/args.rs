//! Command definitions
//!
//! Each binary's [`Command`] is built here so argument contracts can be
//! tested without spawning processes.

use clap::{value_parser, Arg, ArgAction, Command};
use htmlfuzz_session::SessionSeed;
use std::path::PathBuf;

/// Lowest port accepted for listeners
pub const MIN_PORT: u16 = 1024;

const RETENTION_HELP: &str = "Number of generated documents kept on disk [default: 20]";

fn port_arg() -> Arg {
    Arg::new("port")
        .required(true)
        .value_parser(value_parser!(u16).range(i64::from(MIN_PORT)..))
        .help("TCP port to listen on (1024-65535)")
}

fn directory_arg(help: &'static str) -> Arg {
    Arg::new("directory")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help(help)
}

fn seed_arg(help: &'static str) -> Arg {
    Arg::new("seed")
        .long("seed")
        .value_parser(|s: &str| s.parse::<SessionSeed>())
        .help(help)
}

fn logging_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Enable debug logging"),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON"),
        )
}

/// `htmlfuzz <port>`
#[must_use]
pub fn htmlfuzz_command() -> Command {
    let command = Command::new("htmlfuzz")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Serve a fresh grammar-generated HTML document on every request")
        .arg(port_arg())
        .arg(seed_arg("Replay an earlier session seed (e.g. 1480275799.153212)"))
        .arg(
            Arg::new("start-at")
                .long("start-at")
                .default_value("1")
                .value_parser(value_parser!(u64).range(1..))
                .help("Sequence number of the first document to serve"),
        )
        .arg(
            Arg::new("retention")
                .long("retention")
                .value_parser(value_parser!(u64).range(1..))
                .help(RETENTION_HELP),
        )
        .arg(
            Arg::new("output-root")
                .long("output-root")
                .default_value(".")
                .value_parser(value_parser!(PathBuf))
                .help("Directory in which the session directory is created"),
        );
    logging_args(command)
}

/// `htmlgen <directory> <number-of-files>`
#[must_use]
pub fn htmlgen_command() -> Command {
    let command = Command::new("htmlgen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Write a corpus of grammar-generated HTML pages")
        .arg(directory_arg("Existing directory to write page{i}.html files into"))
        .arg(
            Arg::new("number-of-files")
                .required(true)
                .value_parser(value_parser!(usize))
                .help("Number of pages to generate"),
        )
        .arg(seed_arg("Seed for reproducible output"));
    logging_args(command)
}

/// `htmlharness <directory> <port>`
#[must_use]
pub fn htmlharness_command() -> Command {
    let command = Command::new("htmlharness")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Replay an HTML corpus to a browser one file per request")
        .arg(directory_arg("Corpus directory to replay"))
        .arg(port_arg())
        .arg(
            Arg::new("resume")
                .long("resume")
                .action(ArgAction::SetTrue)
                .help("Continue after the files recorded in the existing session log"),
        );
    logging_args(command)
}

/// `htmlscan <directory>`
#[must_use]
pub fn htmlscan_command() -> Command {
    let command = Command::new("htmlscan")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Report HTML tags and attributes missing from a corpus")
        .arg(directory_arg("Corpus directory to scan"))
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Output as JSON"),
        );
    logging_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn commands_are_well_formed() {
        htmlfuzz_command().debug_assert();
        htmlgen_command().debug_assert();
        htmlharness_command().debug_assert();
        htmlscan_command().debug_assert();
    }

    #[test]
    fn port_range_enforced() {
        for bad in ["80", "1023", "65536", "-1", "http"] {
            let err = htmlfuzz_command()
                .try_get_matches_from(["htmlfuzz", bad])
                .unwrap_err();
            assert!(
                matches!(err.kind(), ErrorKind::ValueValidation | ErrorKind::UnknownArgument),
                "{bad}: {:?}",
                err.kind()
            );
        }
        for good in ["1024", "8080", "65535"] {
            let matches = htmlfuzz_command()
                .try_get_matches_from(["htmlfuzz", good])
                .unwrap();
            assert_eq!(matches.get_one::<u16>("port").copied(), good.parse().ok());
        }
    }

    #[test]
    fn htmlfuzz_defaults() {
        let matches = htmlfuzz_command()
            .try_get_matches_from(["htmlfuzz", "8080"])
            .unwrap();
        assert_eq!(matches.get_one::<u64>("retention"), None);
        assert_eq!(matches.get_one::<u64>("start-at"), Some(&1));
        assert!(matches.get_one::<SessionSeed>("seed").is_none());
    }

    #[test]
    fn seed_is_validated() {
        let matches = htmlfuzz_command()
            .try_get_matches_from(["htmlfuzz", "8080", "--seed", "1480275799.15"])
            .unwrap();
        assert_eq!(
            matches.get_one::<SessionSeed>("seed").map(SessionSeed::as_str),
            Some("1480275799.15")
        );
        assert!(htmlfuzz_command()
            .try_get_matches_from(["htmlfuzz", "8080", "--seed", "../x"])
            .is_err());
    }

    #[test]
    fn retention_help_matches_default() {
        assert!(RETENTION_HELP.contains(&format!(
            "[default: {}]",
            htmlfuzz_session::DEFAULT_RETENTION_WINDOW
        )));
    }

    #[test]
    fn zero_retention_rejected_by_parser() {
        assert!(htmlfuzz_command()
            .try_get_matches_from(["htmlfuzz", "8080", "--retention", "0"])
            .is_err());
    }

    #[test]
    fn htmlgen_requires_both_arguments() {
        let err = htmlgen_command()
            .try_get_matches_from(["htmlgen", "corpus"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        assert!(htmlgen_command()
            .try_get_matches_from(["htmlgen", "corpus", "-3"])
            .is_err());
    }

    #[test]
    fn htmlharness_parses_resume() {
        let matches = htmlharness_command()
            .try_get_matches_from(["htmlharness", "corpus", "9000", "--resume"])
            .unwrap();
        assert!(matches.get_flag("resume"));
        assert_eq!(matches.get_one::<u16>("port"), Some(&9000));
    }
}
