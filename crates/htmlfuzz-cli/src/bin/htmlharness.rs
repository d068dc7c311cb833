//! Sequential corpus replay server

use anyhow::Context;
use htmlfuzz_cli::{args, server, telemetry};
use htmlfuzz_session::{log_file_name, ReplayHarness, ReplayOptions};
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let matches = args::htmlharness_command().get_matches();
    telemetry::init(matches.get_flag("verbose"), matches.get_flag("log-json"));

    let directory = matches
        .get_one::<PathBuf>("directory")
        .context("directory is required")?;
    let port = *matches.get_one::<u16>("port").context("port is required")?;
    let options = ReplayOptions::default().with_resume(matches.get_flag("resume"));

    let harness = ReplayHarness::open(directory, log_file_name(port), options)?;
    println!(
        "Found {} files in corpus, {} left to serve",
        harness.files().len(),
        harness.remaining()
    );
    println!("Point the web browser to be tested at http://127.0.0.1:{port}");

    let harness = Arc::new(Mutex::new(harness));
    server::serve(server::replay_routes(harness), port, server::ctrl_c()).await
}
