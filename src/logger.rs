pub use tracing::{debug, error, info, warn, trace, instrument};
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt::{self, format::FmtSpan}};

/// Installs the global subscriber. Panics if one is already set.
pub fn init() {
    if let Err(e) = try_init() {
        panic!("failed to install tracing subscriber: {e}");
    }
}

/// Installs the global subscriber, for hosts that may already have one.
///
/// Filtering follows `RUST_LOG` and defaults to `info`.
pub fn try_init() -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_timer(fmt::time::uptime())
        .with_span_events(span_events(&env_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
}

/// Span close events carry per-stage detection time; only emit them when
/// the filter lets debug output through.
fn span_events(filter: &EnvFilter) -> FmtSpan {
    let directives = filter.to_string();
    if directives.contains("debug") || directives.contains("trace") {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    }
}
