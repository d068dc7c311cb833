//! HTML corpus coverage scanner

use anyhow::Context;
use htmlfuzz_cli::{args, telemetry};
use htmlfuzz_scan::CoverageScanner;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let matches = args::htmlscan_command().get_matches();
    telemetry::init(matches.get_flag("verbose"), matches.get_flag("log-json"));

    let directory = matches
        .get_one::<PathBuf>("directory")
        .context("directory is required")?;

    let mut scanner = CoverageScanner::new()?;
    let report = scanner.scan(directory)?;

    if matches.get_flag("json") {
        println!("{}", report.to_json()?);
    } else {
        print!("{report}");
    }
    Ok(())
}
