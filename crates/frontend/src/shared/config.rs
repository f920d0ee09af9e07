//! Client configuration.
//!
//! The browser cannot read a config file at runtime, so the default TOML is
//! embedded in the bundle. The API base URL can be overridden at build time
//! with the `CURATOR_API_BASE` environment variable.

use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    pub api: ApiConfig,
    pub collections: ListConfig,
    pub constants: ListConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ListConfig {
    pub page_size: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("page_size must be positive in [{0}]")]
    ZeroPageSize(&'static str),
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "https://maestro-api-dev.secil.biz"

[collections]
page_size = 10

[constants]
page_size = 36
"#;

static CONFIG: Lazy<Config> = Lazy::new(|| {
    let config = load_config(DEFAULT_CONFIG, option_env!("CURATOR_API_BASE")).unwrap_or_else(|e| {
        log::warn!("Falling back to built-in configuration: {}", e);
        Config::builtin()
    });
    log::info!("API base: {}", config.api.base_url);
    config
});

impl Config {
    fn builtin() -> Self {
        Self {
            api: ApiConfig {
                base_url: "https://maestro-api-dev.secil.biz".to_string(),
            },
            collections: ListConfig { page_size: 10 },
            constants: ListConfig { page_size: 36 },
        }
    }
}

/// Parse configuration and apply the base URL override
pub fn load_config(contents: &str, base_override: Option<&str>) -> Result<Config, ConfigError> {
    let mut config: Config = toml::from_str(contents)?;

    if let Some(base) = base_override.map(str::trim).filter(|b| !b.is_empty()) {
        config.api.base_url = base.to_string();
    }
    config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();

    if config.collections.page_size == 0 {
        return Err(ConfigError::ZeroPageSize("collections"));
    }
    if config.constants.page_size == 0 {
        return Err(ConfigError::ZeroPageSize("constants"));
    }
    Ok(config)
}

/// Process-wide configuration
pub fn config() -> &'static Config {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(DEFAULT_CONFIG, None).unwrap();
        assert_eq!(config, Config::builtin());
    }

    #[test]
    fn test_base_override_trims_slashes() {
        let config = load_config(DEFAULT_CONFIG, Some(" http://localhost:5000/ ")).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:5000");

        let config = load_config(DEFAULT_CONFIG, Some("")).unwrap();
        assert_eq!(config.api.base_url, "https://maestro-api-dev.secil.biz");
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let toml = DEFAULT_CONFIG.replace("page_size = 36", "page_size = 0");
        assert!(matches!(
            load_config(&toml, None),
            Err(ConfigError::ZeroPageSize("constants"))
        ));
    }

    #[test]
    fn test_malformed_config() {
        assert!(matches!(load_config("[api", None), Err(ConfigError::Parse(_))));
    }
}
