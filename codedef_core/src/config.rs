//! # Registry Configuration
//!
//! Deployment settings for building a [`DesignCodeRegistry`](crate::registry::DesignCodeRegistry):
//! the default display locale and the locale override files to layer on top
//! of the built-in text.
//!
//! ```toml
//! locale = "ru"
//! override_files = ["overrides/site.toml"]
//! ```
//!
//! Relative override paths are resolved against the directory holding the
//! config file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{CodeError, CodeResult};

/// Registry configuration loaded from TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    /// Display locale, `None` for the default (Latin) text
    pub locale: Option<String>,
    /// Override files merged in order; later files win
    pub override_files: Vec<PathBuf>,
}

impl RegistryConfig {
    /// Parse a config from TOML text
    pub fn from_toml_str(text: &str) -> CodeResult<Self> {
        toml::from_str(text).map_err(|e| CodeError::serialization(format!("Invalid config: {}", e)))
    }

    /// Load a config file, resolving relative override paths against its directory
    pub fn load(path: &Path) -> CodeResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            CodeError::file_error("read config", path.display().to_string(), e.to_string())
        })?;
        let mut config = Self::from_toml_str(&text).map_err(|e| match e {
            CodeError::SerializationError { reason } => {
                CodeError::serialization(format!("{} ({})", reason, path.display()))
            }
            other => other,
        })?;

        if let Some(base) = path.parent() {
            for file in &mut config.override_files {
                if file.is_relative() {
                    *file = base.join(&*file);
                }
            }
        }

        tracing::debug!(
            path = %path.display(),
            locale = ?config.locale,
            overrides = config.override_files.len(),
            "loaded registry config"
        );
        Ok(config)
    }

    /// Use `locale` instead of the configured one when given
    pub fn with_locale(mut self, locale: Option<String>) -> Self {
        if locale.is_some() {
            self.locale = locale;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;

    #[test]
    fn test_empty_config() {
        let config = RegistryConfig::from_toml_str("").unwrap();
        assert_eq!(config, RegistryConfig::default());
    }

    #[test]
    fn test_parse_config() {
        let config = RegistryConfig::from_toml_str(
            "locale = \"ru\"\noverride_files = [\"a.toml\", \"/etc/codedef/b.toml\"]\n",
        )
        .unwrap();
        assert_eq!(config.locale.as_deref(), Some("ru"));
        assert_eq!(config.override_files.len(), 2);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = RegistryConfig::from_toml_str("langauge = \"ru\"").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_load_resolves_relative_paths() {
        let dir = temp_dir().join("codedef_test_config");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("codedef.toml");
        fs::write(&path, "override_files = [\"site.toml\"]\n").unwrap();

        let config = RegistryConfig::load(&path).unwrap();
        assert_eq!(config.override_files, vec![dir.join("site.toml")]);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_cli_locale_takes_precedence() {
        let config = RegistryConfig {
            locale: Some("ru".to_string()),
            override_files: Vec::new(),
        };
        assert_eq!(config.clone().with_locale(None).locale.as_deref(), Some("ru"));
        assert_eq!(
            config.with_locale(Some("en".to_string())).locale.as_deref(),
            Some("en")
        );
    }
}
