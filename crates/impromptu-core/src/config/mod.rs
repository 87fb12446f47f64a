//! Configuration for Impromptu
//!
//! Defaults, then `impromptu_config.json`, then `IMPROMPTU_*` environment variables.

pub mod loader;
pub mod model;

pub use loader::{ConfigLoader, ConfigSource, ENV_PREFIX};
pub use model::{
    AnnotationConfig, Config, DEFAULT_PRICES_BASE_URL, DEFAULT_VIDEO_BASE_URL, LoggingConfig,
    PriceApiConfig,
};

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "impromptu_config.json";

/// Load configuration the way the CLI does: defaults, the given file, then the environment
pub fn load_config(path: impl AsRef<std::path::Path>) -> crate::error::ImpromptuResult<Config> {
    ConfigLoader::new()
        .with_defaults()
        .with_file(path)
        .with_env()
        .load()
}
