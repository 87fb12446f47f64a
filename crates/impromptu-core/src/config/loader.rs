//! Configuration loading and layering

use super::model::Config;
use crate::error::{ImpromptuError, ImpromptuResult};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Prefix shared by every environment override
pub const ENV_PREFIX: &str = "IMPROMPTU_";

/// Source of configuration data
#[derive(Debug, Clone)]
pub enum ConfigSource {
    /// Built-in defaults
    Default,
    /// JSON configuration file; a missing file contributes nothing
    File(PathBuf),
    /// `IMPROMPTU_*` variables from the process environment
    Environment,
    /// Explicit key/value overrides using the environment variable names
    Overrides(HashMap<String, String>),
}

/// Configuration loader with support for multiple layered sources.
///
/// Sources are applied in the order they were added; later sources win. File contents are
/// deep-merged into the configuration built so far, so a file only needs the keys it
/// changes.
pub struct ConfigLoader {
    sources: Vec<ConfigSource>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Add a configuration source
    pub fn add_source(mut self, source: ConfigSource) -> Self {
        self.sources.push(source);
        self
    }

    pub fn with_defaults(self) -> Self {
        self.add_source(ConfigSource::Default)
    }

    pub fn with_file<P: AsRef<Path>>(self, path: P) -> Self {
        self.add_source(ConfigSource::File(path.as_ref().to_path_buf()))
    }

    pub fn with_env(self) -> Self {
        self.add_source(ConfigSource::Environment)
    }

    pub fn with_overrides(self, overrides: HashMap<String, String>) -> Self {
        self.add_source(ConfigSource::Overrides(overrides))
    }

    /// Load configuration from all sources and validate the result
    pub fn load(self) -> ImpromptuResult<Config> {
        let mut config = Config::default();

        for source in &self.sources {
            config = apply_source(config, source)?;
        }

        config.validate()?;
        tracing::debug!(
            video_base_url = %config.annotation.base_url,
            prices_base_url = %config.prices.base_url,
            locations = config.lexicon.len(),
            "configuration loaded"
        );
        Ok(config)
    }
}

fn apply_source(config: Config, source: &ConfigSource) -> ImpromptuResult<Config> {
    match source {
        ConfigSource::Default => {
            tracing::debug!("Loading default config");
            Ok(Config::default())
        }
        ConfigSource::File(path) => {
            tracing::debug!("Loading config from file: {}", path.display());
            merge_file(config, path)
        }
        ConfigSource::Environment => {
            tracing::debug!("Loading config from environment");
            let vars: HashMap<String, String> = std::env::vars()
                .filter(|(key, _)| key.starts_with(ENV_PREFIX))
                .collect();
            apply_overrides(config, &vars)
        }
        ConfigSource::Overrides(vars) => apply_overrides(config, vars),
    }
}

fn merge_file(config: Config, path: &Path) -> ImpromptuResult<Config> {
    if !path.exists() {
        tracing::debug!("Config file {} not found, keeping current values", path.display());
        return Ok(config);
    }

    let content = fs::read_to_string(path).map_err(|e| {
        ImpromptuError::io_with_path(
            format!("Failed to read config file: {}", e),
            path.display().to_string(),
        )
    })?;

    let overlay: Value = serde_json::from_str(&content).map_err(|e| {
        ImpromptuError::config(format!("Failed to parse config file: {}", e))
            .with_context(format!("Parsing JSON configuration from '{}'", path.display()))
    })?;

    let mut base = serde_json::to_value(&config)?;
    merge_values(&mut base, overlay);

    serde_json::from_value(base).map_err(|e| {
        ImpromptuError::config(format!("Invalid config file: {}", e))
            .with_context(format!("Reading configuration from '{}'", path.display()))
    })
}

/// Deep-merge `overlay` into `base`. Objects merge key by key; anything else replaces.
fn merge_values(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

fn apply_overrides(
    mut config: Config,
    vars: &HashMap<String, String>,
) -> ImpromptuResult<Config> {
    let get = |name: &str| {
        vars.get(&format!("{}{}", ENV_PREFIX, name))
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    if let Some(key) = get("VIDEO_API_KEY") {
        config.annotation.api_key = Some(key);
    }
    if let Some(url) = get("VIDEO_BASE_URL") {
        config.annotation.base_url = url;
    }
    if let Some(url) = get("PRICES_BASE_URL") {
        config.prices.base_url = url;
    }
    if let Some(level) = get("LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Some(attempts) = get("MAX_ATTEMPTS") {
        config.retry.max_attempts = attempts.parse().map_err(|_| {
            ImpromptuError::config(format!(
                "{}MAX_ATTEMPTS must be a positive integer, got '{}'",
                ENV_PREFIX, attempts
            ))
        })?;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::Duration;
    use tempfile::NamedTempFile;

    fn overrides(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = ConfigLoader::new()
            .with_defaults()
            .with_file("/definitely/not/here/impromptu_config.json")
            .load()
            .unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_file_merges_over_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "prices": {{"base_url": "http://localhost:9000"}},
                "retry": {{"retry_delay": "10ms"}},
                "lexicon": [{{"name": "Rome", "keywords": ["Colosseum", "Rome"]}}]
            }}"#
        )
        .unwrap();

        let config = ConfigLoader::new()
            .with_defaults()
            .with_file(file.path())
            .load()
            .unwrap();

        assert_eq!(config.prices.base_url, "http://localhost:9000");
        assert_eq!(config.prices.request_timeout, Duration::from_secs(30));
        assert_eq!(config.retry.retry_delay, Duration::from_millis(10));
        assert_eq!(config.retry.max_attempts, 3);
        assert_eq!(config.lexicon.len(), 1);
        assert!(config.lexicon.iter().any(|entry| entry.name == "Rome"));
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = ConfigLoader::new().with_file(file.path()).load().unwrap_err();
        assert!(matches!(err, ImpromptuError::Config { .. }));
        assert!(err.context().is_some());
    }

    #[test]
    fn test_overrides_win_over_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"annotation": {{"api_key": "from-file"}}, "prices": {{"base_url": "http://file"}}}}"#
        )
        .unwrap();

        let config = ConfigLoader::new()
            .with_file(file.path())
            .with_overrides(overrides(&[
                ("IMPROMPTU_VIDEO_API_KEY", "from-env"),
                ("IMPROMPTU_LOG_LEVEL", "debug"),
            ]))
            .load()
            .unwrap();

        assert_eq!(config.annotation.api_key.as_deref(), Some("from-env"));
        assert_eq!(config.prices.base_url, "http://file");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_blank_override_ignored() {
        let config = ConfigLoader::new()
            .with_overrides(overrides(&[("IMPROMPTU_PRICES_BASE_URL", "   ")]))
            .load()
            .unwrap();
        assert_eq!(config.prices.base_url, crate::config::DEFAULT_PRICES_BASE_URL);
    }

    #[test]
    fn test_bad_max_attempts_override() {
        let err = ConfigLoader::new()
            .with_overrides(overrides(&[("IMPROMPTU_MAX_ATTEMPTS", "lots")]))
            .load()
            .unwrap_err();
        assert!(err.to_string().contains("MAX_ATTEMPTS"));

        let err = ConfigLoader::new()
            .with_overrides(overrides(&[("IMPROMPTU_MAX_ATTEMPTS", "0")]))
            .load()
            .unwrap_err();
        assert!(matches!(err, ImpromptuError::Config { .. }));
    }

    #[test]
    fn test_duplicate_lexicon_names_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"lexicon": [{{"name": "Rome", "keywords": []}}, {{"name": "Rome", "keywords": []}}]}}"#
        )
        .unwrap();

        let err = ConfigLoader::new().with_file(file.path()).load().unwrap_err();
        assert!(err.to_string().contains("Duplicate location"));
    }
}
