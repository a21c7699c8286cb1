//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{AdtoError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_api_config(&settings.api)?;
    validate_events_config(&settings.events)?;
    validate_registration_config(&settings.registration)?;
    validate_display_config(&settings.display)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate Events API configuration
fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    if config.base_url.trim().is_empty() {
        return Err(AdtoError::Config(
            "API base URL is required".to_string()
        ));
    }

    let parsed = url::Url::parse(&config.base_url)?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(AdtoError::Config(
            format!("API base URL must be http(s), got {}", parsed.scheme())
        ));
    }

    if config.timeout_seconds == 0 {
        return Err(AdtoError::Config(
            "API timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate event listing configuration
fn validate_events_config(config: &super::EventsConfig) -> Result<()> {
    if config.page_size == 0 {
        return Err(AdtoError::Config(
            "Page size must be greater than 0".to_string()
        ));
    }

    if config.featured_limit == 0 {
        return Err(AdtoError::Config(
            "Featured event limit must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate registration configuration
fn validate_registration_config(config: &super::RegistrationConfig) -> Result<()> {
    let domain = &config.school_email_domain;
    if !domain.starts_with('@') || domain.len() < 2 {
        return Err(AdtoError::Config(
            format!("School email domain must look like @school.edu, got {:?}", domain)
        ));
    }

    Ok(())
}

/// Validate display configuration
fn validate_display_config(config: &super::DisplayConfig) -> Result<()> {
    if !(-12..=14).contains(&config.utc_offset_hours) {
        return Err(AdtoError::Config(
            format!("UTC offset out of range: {}", config.utc_offset_hours)
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(AdtoError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(AdtoError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
