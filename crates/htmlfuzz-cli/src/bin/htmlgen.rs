//! Batch HTML corpus generator

use anyhow::Context;
use htmlfuzz_cli::{args, telemetry};
use htmlfuzz_grammar::{html_grammar, Expander, GrammarFlavor, START_SYMBOL};
use htmlfuzz_session::{generate_corpus, SessionSeed};
use std::path::PathBuf;
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    let matches = args::htmlgen_command().get_matches();
    telemetry::init(matches.get_flag("verbose"), matches.get_flag("log-json"));

    let directory = matches
        .get_one::<PathBuf>("directory")
        .context("directory is required")?;
    let count = *matches
        .get_one::<usize>("number-of-files")
        .context("number of files is required")?;
    let seed = matches
        .get_one::<SessionSeed>("seed")
        .cloned()
        .unwrap_or_else(SessionSeed::now);

    let grammar = html_grammar(&GrammarFlavor::Corpus).context("building HTML grammar")?;
    let expander = Expander::new(Arc::new(grammar));

    let written = generate_corpus(directory, count, &expander, START_SYMBOL, &mut seed.rng())?;

    println!("Wrote {} pages to {} (seed {seed})", written.len(), directory.display());
    Ok(())
}
