use anyhow::{Context, Result, bail};
use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use std::path::Path;

use super::AppConfig;

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

/// Repository-local config file, looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "numagg.toml";

/// Prefix for environment overrides, `__` separates nested keys
pub const ENV_PREFIX: &str = "NUMAGG_";

impl AppConfig {
    pub fn load_with_custom_config(custom_config: Option<&str>) -> Result<Self> {
        tracing::trace!("CONFIG LOAD: Starting");

        if let Some(custom_path) = custom_config {
            if !Path::new(custom_path).is_file() {
                bail!("Config file not found: {}", custom_path);
            }
        }

        let config: AppConfig = Self::figment(custom_config)
            .extract()
            .context("Invalid numagg configuration")?;

        tracing::trace!("CONFIG LOAD: Final config = {:?}", config);
        Ok(config)
    }

    /// Build the layered provider chain without extracting it
    pub fn figment(custom_config: Option<&str>) -> Figment {
        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG)); // Embedded defaults

        // If custom config is specified, use only that + defaults + env vars
        if let Some(custom_path) = custom_config {
            figment = figment.merge(Toml::file(custom_path));
        } else {
            // Standard priority: user config -> local config
            figment = figment
                .merge(Toml::file(Self::user_config_path()))
                .merge(Toml::file(LOCAL_CONFIG_FILE));
        }

        // Environment variables always have highest priority
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn user_config_path() -> String {
        match std::env::var("HOME") {
            Ok(home) => format!("{}/.config/numagg/config.toml", home),
            Err(_) => "~/.config/numagg/config.toml".to_string(),
        }
    }
}
