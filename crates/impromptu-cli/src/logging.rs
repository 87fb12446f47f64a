//! Tracing subscriber setup

use impromptu_core::config::LoggingConfig;
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins; otherwise `debug` when verbose, else the configured level
pub fn filter_directive(config: &LoggingConfig, verbose: bool) -> String {
    if verbose {
        "debug".to_string()
    } else {
        config.level.clone()
    }
}

fn env_filter(config: &LoggingConfig, verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(config, verbose)))
}

/// Subscriber used while the configuration itself is being loaded
pub fn bootstrap(verbose: bool) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&LoggingConfig::default(), verbose))
        .with_writer(std::io::stderr)
        .finish()
}

/// Install the global subscriber from the loaded configuration
pub fn init(config: &LoggingConfig, verbose: bool) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config, verbose))
        .with_writer(std::io::stderr);

    // A subscriber may already be installed; logging then goes there instead.
    let _ = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
