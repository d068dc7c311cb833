//! Grammar-driven HTML generation server

use anyhow::Context;
use htmlfuzz_cli::{args, server, telemetry};
use htmlfuzz_grammar::{html_grammar, GrammarFlavor, MutationPayload};
use htmlfuzz_session::{Session, SessionConfig, SessionSeed, DEFAULT_RETENTION_WINDOW};
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let matches = args::htmlfuzz_command().get_matches();
    telemetry::init(matches.get_flag("verbose"), matches.get_flag("log-json"));

    let port = *matches.get_one::<u16>("port").context("port is required")?;
    let seed = matches
        .get_one::<SessionSeed>("seed")
        .cloned()
        .unwrap_or_else(SessionSeed::now);
    let retention = matches
        .get_one::<u64>("retention")
        .copied()
        .unwrap_or(DEFAULT_RETENTION_WINDOW);
    let start_at = matches.get_one::<u64>("start-at").copied().unwrap_or(1);
    let output_root = matches
        .get_one::<PathBuf>("output-root")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("."));

    // The payload calls back to this server and carries the seed
    let payload = MutationPayload::render(seed.as_str(), port);
    let grammar = html_grammar(&GrammarFlavor::Fuzz(payload)).context("building HTML grammar")?;

    let config = SessionConfig::new()
        .with_output_root(output_root)
        .with_seed(seed.clone())
        .with_retention_window(retention)
        .start_at(start_at);
    let session = Session::start(config, Arc::new(grammar))
        .with_context(|| format!("starting session {seed}"))?;

    println!("Session seed: {seed}");
    println!("Point the web browser to be tested at http://127.0.0.1:{port}");

    let session = Arc::new(Mutex::new(session));
    server::serve(server::generation_routes(Arc::clone(&session)), port, server::ctrl_c()).await?;

    session.lock().stop()?;
    Ok(())
}
