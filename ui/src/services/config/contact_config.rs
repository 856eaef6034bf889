//! Configuration for the contact form
//!
//! Defaults target the public ViaCEP service. A JSON override can be baked in
//! at compile time through the `CONTACT_FORM_CONFIG` environment variable.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::features::contact::{default_options, SelectOption};

/// Postal-code lookup settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Service root; requests go to `{base_url}/{cep}/json/`
    pub base_url: String,

    /// Timeout for a single lookup in milliseconds
    pub timeout_ms: u64,

    pub user_agent: String,

    /// Number of resolved CEPs kept in memory
    pub cache_capacity: usize,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: "https://viacep.com.br/ws".to_string(),
            timeout_ms: 5_000,
            user_agent: "contact-form/1.0".to_string(),
            cache_capacity: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub lookup: LookupConfig,

    /// Entries offered by the option multi-select
    pub options: Vec<SelectOption>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            lookup: LookupConfig::default(),
            options: default_options(),
        }
    }
}

impl ContactConfig {
    /// Parse a JSON override; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ContactConfig =
            serde_json::from_str(json).context("Failed to parse contact form configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Compile-time override if present, defaults otherwise
    pub fn load() -> Self {
        match option_env!("CONTACT_FORM_CONFIG") {
            Some(json) => Self::from_json(json).unwrap_or_else(|e| {
                tracing::warn!("Invalid configuration, using defaults: {:#}", e);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.lookup.base_url.trim().is_empty() {
            bail!("lookup.base_url must not be empty");
        }

        if self.lookup.timeout_ms == 0 {
            bail!("lookup.timeout_ms must be greater than 0");
        }

        if self.options.is_empty() {
            bail!("options must contain at least one entry");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ContactConfig::default();
        assert_eq!(config.lookup.base_url, "https://viacep.com.br/ws");
        assert_eq!(config.lookup.timeout_ms, 5_000);
        assert_eq!(config.options.len(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = ContactConfig::from_json(r#"{"lookup": {"timeout_ms": 1500}}"#).unwrap();
        assert_eq!(config.lookup.timeout_ms, 1500);
        assert_eq!(config.lookup.base_url, "https://viacep.com.br/ws");
        assert_eq!(config.options, default_options());
    }

    #[test]
    fn test_options_override() {
        let config = ContactConfig::from_json(
            r#"{"options": [{"value": "email", "label": "E-mail"}, {"value": "phone", "label": "Telefone"}]}"#,
        )
        .unwrap();
        assert_eq!(config.options[1], SelectOption::new("phone", "Telefone"));
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        assert!(ContactConfig::from_json("not json").is_err());
        assert!(ContactConfig::from_json(r#"{"options": []}"#).is_err());
        assert!(ContactConfig::from_json(r#"{"lookup": {"timeout_ms": 0}}"#).is_err());
    }
}
