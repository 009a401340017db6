use tracing_subscriber::EnvFilter;

/// Selects JSON log lines instead of the human-readable format.
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

const DEFAULT_FILTER: &str = "info,tower_http=info";

/// Installs the global tracing subscriber. `RUST_LOG` overrides the default
/// filter.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let json = std::env::var(ENV_LOG_FORMAT)
        .is_ok_and(|format| format.eq_ignore_ascii_case("json"));
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
