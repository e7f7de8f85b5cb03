//! Tracing subscriber setup.

use crate::settings::LogFormat;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "sport_api=info,tower_http=info";

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().with_target(false).init(),
    }
}
