//! Logging setup for the route-graph binary.
//!
//! Log output goes to stderr so stdout carries only answers. The filter comes
//! from `--log`, then the `ROUTE_GRAPH_LOG` environment variable, then the
//! default level `warn`.
//!
//! - `ROUTE_GRAPH_LOG=debug` - per-query parameters and outcomes
//! - `ROUTE_GRAPH_LOG=route_graph_core=trace` - also missing route hops

use tracing_subscriber::{fmt, EnvFilter};

pub const LOG_ENV: &str = "ROUTE_GRAPH_LOG";

const DEFAULT_LEVEL: &str = "warn";

fn filter(filter_override: Option<&str>) -> EnvFilter {
    match filter_override {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL)),
    }
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(filter_override: Option<&str>) {
    let subscriber = fmt()
        .with_env_filter(filter(filter_override))
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .compact();

    let _ = subscriber.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        assert_eq!(filter(Some("debug")).to_string(), "debug");
    }

    #[test]
    fn test_filter_scoped_to_test_writer() {
        let subscriber = fmt()
            .with_env_filter(filter(Some("debug")))
            .with_test_writer()
            .compact()
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!("logging scoped to this test");
        });
    }
}
