//! Tracing subscriber setup for the `chartransfer` binary.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset.
///
/// The binary's events carry the target `chartransfer` while the library
/// modules log under `chartransfer_cli`; both must be listed.
pub const DEFAULT_FILTER: &str = "chartransfer=info,chartransfer_cli=info";

/// Install the global subscriber. Events go to stderr so failures reach
/// the operator's terminal.
pub fn init() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
