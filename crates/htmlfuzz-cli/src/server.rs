//! HTTP delivery
//!
//! One route per server: `GET /` runs a single generation or replay event,
//! any other GET path answers with an empty body. State sits behind one
//! mutex, so requests are served strictly one at a time.

use htmlfuzz_session::{ReplayHarness, Session};
use parking_lot::Mutex;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use warp::http::StatusCode;
use warp::reply::{Reply, Response};
use warp::{Filter, Rejection};

/// Listener address for `port`
#[must_use]
pub fn listen_addr(port: u16) -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], port))
}

fn empty_body() -> impl Filter<Extract = (Response,), Error = Rejection> + Clone {
    warp::get()
        .and(warp::path::tail())
        .map(|_tail| warp::reply::html(String::new()).into_response())
}

fn failure(label: &str, error: &dyn std::fmt::Display) -> Response {
    warp::reply::with_status(format!("{label} failed: {error}"), StatusCode::INTERNAL_SERVER_ERROR)
        .into_response()
}

/// Routes of the generation server
pub fn generation_routes(
    session: Arc<Mutex<Session>>,
) -> impl Filter<Extract = (Response,), Error = Rejection> + Clone {
    let root = warp::get().and(warp::path::end()).map(move || {
        let result = session.lock().generate_one();
        match result {
            Ok(artifact) => {
                tracing::info!(sequence = artifact.sequence_number, "Served generated document");
                warp::reply::html(artifact.content).into_response()
            }
            Err(error) => {
                tracing::error!(%error, "Generation event failed");
                failure("generation", &error)
            }
        }
    });
    root.or(empty_body()).unify()
}

/// Routes of the replay server
pub fn replay_routes(
    harness: Arc<Mutex<ReplayHarness>>,
) -> impl Filter<Extract = (Response,), Error = Rejection> + Clone {
    let root = warp::get().and(warp::path::end()).map(move || {
        let result = harness.lock().next_page();
        match result {
            Ok(page) => warp::reply::html(page.into_body()).into_response(),
            Err(error) => {
                tracing::error!(%error, "Replay event failed");
                failure("replay", &error)
            }
        }
    });
    root.or(empty_body()).unify()
}

/// Serve `routes` on `port` until `shutdown` resolves
///
/// # Errors
/// Fails if the port cannot be bound
pub async fn serve<F>(
    routes: F,
    port: u16,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()>
where
    F: Filter<Extract = (Response,), Error = Rejection> + Clone + Send + Sync + 'static,
{
    let (addr, server) = warp::serve(routes).try_bind_with_graceful_shutdown(listen_addr(port), shutdown)?;
    tracing::info!(%addr, "Listening; point the browser under test at this address");
    server.await;
    Ok(())
}

/// Resolves on Ctrl-C
pub async fn ctrl_c() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "Could not listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
