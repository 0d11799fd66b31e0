//! Tracing subscriber set-up for the binary.

use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

/// Install a global `fmt` subscriber filtered by `RUST_LOG`.
///
/// Output goes to stderr so command reports on stdout stay parseable. A
/// second call leaves the existing subscriber in place and logs a warning.
pub fn init_tracing(json: bool) {
    let builder = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr);
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(error) = result {
        warn!(error = %error, "tracing init failed");
    }
}
