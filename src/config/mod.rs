#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use toml_config::TomlConfig;

pub const DEFAULT_BASE_URL: &str = "https://petstore.swagger.io/v2";

/// Resolved settings handed to the HTTP adapter and the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleSettings {
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
    pub headers: Vec<(String, String)>,
    pub default_status: String,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: None,
            headers: Vec::new(),
            default_status: "available".to_string(),
        }
    }
}

/// Values given on the command line; each one wins over the file.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl ConsoleSettings {
    pub fn resolve(file: Option<&TomlConfig>, overrides: &SettingsOverrides) -> Self {
        let mut settings = Self::default();

        if let Some(file) = file {
            if let Some(base_url) = &file.api.base_url {
                settings.base_url = base_url.clone();
            }
            settings.timeout_seconds = file.api.timeout_seconds;
            settings.headers = file.headers();
            if let Some(status) = &file.console.default_status {
                settings.default_status = status.clone();
            }
        }

        if let Some(base_url) = &overrides.base_url {
            settings.base_url = base_url.clone();
        }
        if overrides.timeout_seconds.is_some() {
            settings.timeout_seconds = overrides.timeout_seconds;
        }

        settings
    }
}

impl ConfigProvider for ConsoleSettings {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }

    fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    fn default_status(&self) -> &str {
        &self.default_status
    }
}

impl Validate for ConsoleSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("base_url", &self.base_url)?;
        if let Some(timeout) = self.timeout_seconds {
            validation::validate_positive_number("timeout_seconds", timeout, 1)?;
        }
        validation::validate_non_empty_string("default_status", &self.default_status)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ConsoleSettings::resolve(None, &SettingsOverrides::default());
        assert_eq!(settings, ConsoleSettings::default());
        assert_eq!(settings.base_url(), DEFAULT_BASE_URL);
        assert_eq!(settings.timeout_seconds(), None);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = TomlConfig::from_toml_str(
            r#"
[api]
base_url = "http://file.example/v2"
timeout_seconds = 20

[api.headers]
api_key = "k"

[console]
default_status = "pending"
"#,
        )
        .unwrap();

        let from_file = ConsoleSettings::resolve(Some(&file), &SettingsOverrides::default());
        assert_eq!(from_file.base_url, "http://file.example/v2");
        assert_eq!(from_file.timeout_seconds, Some(20));
        assert_eq!(from_file.default_status(), "pending");
        assert_eq!(from_file.headers().len(), 1);

        let overridden = ConsoleSettings::resolve(
            Some(&file),
            &SettingsOverrides {
                base_url: Some("http://cli.example/v2".to_string()),
                timeout_seconds: Some(3),
            },
        );
        assert_eq!(overridden.base_url, "http://cli.example/v2");
        assert_eq!(overridden.timeout_seconds, Some(3));
        assert_eq!(overridden.default_status, "pending");
    }

    #[test]
    fn test_invalid_override_fails_validation() {
        let settings = ConsoleSettings::resolve(
            None,
            &SettingsOverrides {
                base_url: Some("ftp://petstore".to_string()),
                timeout_seconds: None,
            },
        );
        assert!(settings.validate().is_err());
    }
}
