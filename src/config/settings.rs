//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub api: ApiConfig,
    pub events: EventsConfig,
    pub filters: FiltersConfig,
    pub registration: RegistrationConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// Events API configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

/// Event listing configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct EventsConfig {
    pub page_size: u32,
    pub featured_limit: u32,
}

/// Filter bar configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct FiltersConfig {
    pub search_debounce_ms: u64,
}

/// Registration form configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct RegistrationConfig {
    pub school_email_domain: String,
}

/// Date/time display configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub utc_offset_hours: i32,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: Option<String>,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::from_file("config")
    }

    /// Load settings from a specific file (extension optional) layered
    /// under `ADTO_*` environment variables
    pub fn from_file(path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("ADTO")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::AdtoError> {
        super::validation::validate_settings(self)
    }

    /// Debounce window for search input
    pub fn search_debounce(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.filters.search_debounce_ms)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            timeout_seconds: 10,
            user_agent: format!("adto-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            page_size: 9,
            featured_limit: 10,
        }
    }
}

impl Default for FiltersConfig {
    fn default() -> Self {
        Self {
            search_debounce_ms: 500,
        }
    }
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            school_email_domain: "@addu.edu.ph".to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { utc_offset_hours: 8 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_path: None,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            events: EventsConfig::default(),
            filters: FiltersConfig::default(),
            registration: RegistrationConfig::default(),
            display: DisplayConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    #[test]
    #[serial]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("adto.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[api]\nbase_url = \"https://api.example.edu\"\n\n[events]\npage_size = 12"
        )
        .unwrap();

        let settings = Settings::from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(settings.api.base_url, "https://api.example.edu");
        assert_eq!(settings.events.page_size, 12);
        // untouched sections keep defaults
        assert_eq!(settings.events.featured_limit, 10);
        assert_eq!(settings.registration.school_email_domain, "@addu.edu.ph");
    }

    #[test]
    #[serial]
    fn test_environment_overrides() {
        std::env::set_var("ADTO_API__BASE_URL", "https://env.example.edu");
        std::env::set_var("ADTO_FILTERS__SEARCH_DEBOUNCE_MS", "250");
        let settings = Settings::from_file("does-not-exist").unwrap();
        std::env::remove_var("ADTO_API__BASE_URL");
        std::env::remove_var("ADTO_FILTERS__SEARCH_DEBOUNCE_MS");

        assert_eq!(settings.api.base_url, "https://env.example.edu");
        assert_eq!(settings.search_debounce(), std::time::Duration::from_millis(250));
    }

    #[test]
    fn test_round_trips_through_toml() {
        let settings = Settings::default();
        let text = toml::to_string(&settings).unwrap();
        let parsed: Settings = toml::from_str(&text).unwrap();
        assert_eq!(parsed, settings);
    }
}
