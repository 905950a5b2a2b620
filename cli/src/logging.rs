use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Logs go to stderr so that stdout stays clean for paths and JSON.
/// `RUST_LOG` wins over the verbosity flag.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .try_init();
}
