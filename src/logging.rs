use tracing_subscriber::EnvFilter;

/// Initialise the tracing subscriber. The level defaults to `info` and is
/// raised to `debug` when the settings file enables debug logging; only then
/// may `RUST_LOG` override the filter, so a stray environment variable never
/// makes a normal run verbose.
pub fn init(debug: bool) {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("info")
    };

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
