//! Tracing subscriber setup shared by all binaries

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber
///
/// `RUST_LOG` overrides the default level (`info`, or `debug` when
/// `verbose`). Output goes to stderr so stdout stays clean for reports.
pub fn init(verbose: bool, json: bool) {
    let filter = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into());

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .without_time()
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    if let Err(error) = result {
        eprintln!("tracing already initialised: {error}");
    }
}
