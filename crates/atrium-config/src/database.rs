//! Research store configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_path() -> String {
    "atrium.db".to_string()
}

const fn default_foreign_keys() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Local database file, or `:memory:`.
    #[serde(default = "default_path")]
    pub path: String,

    /// Remote libSQL URL (e.g., `libsql://research.example.io`). Takes
    /// precedence over `path` when set together with `auth_token`.
    #[serde(default)]
    pub url: String,

    /// Auth token for the remote database.
    #[serde(default)]
    pub auth_token: String,

    /// Enforce foreign keys per connection. Cascading deletes rely on it.
    #[serde(default = "default_foreign_keys")]
    pub foreign_keys: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            url: String::new(),
            auth_token: String::new(),
            foreign_keys: default_foreign_keys(),
        }
    }
}

impl DatabaseConfig {
    /// Check if a remote database is configured.
    pub fn is_remote(&self) -> bool {
        !self.url.is_empty() && !self.auth_token.is_empty()
    }

    /// Check the section is usable: either remote credentials or a local path.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a URL is set without a token or
    /// the URL scheme is not `libsql://`, `https://`, or `http://`, and
    /// `ConfigError::NotConfigured` if neither a URL nor a path is set.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.url.is_empty() {
            if self.auth_token.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "database.auth_token".into(),
                    reason: "required when database.url is set".into(),
                });
            }
            let known_scheme = ["libsql://", "https://", "http://"]
                .iter()
                .any(|scheme| self.url.starts_with(scheme));
            if !known_scheme {
                return Err(ConfigError::InvalidValue {
                    field: "database.url".into(),
                    reason: format!("unsupported scheme in '{}'", self.url),
                });
            }
            return Ok(());
        }
        if self.path.is_empty() {
            return Err(ConfigError::NotConfigured {
                section: "database".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_local() {
        let config = DatabaseConfig::default();
        assert_eq!(config.path, "atrium.db");
        assert!(config.foreign_keys);
        assert!(!config.is_remote());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn remote_when_url_and_token_set() {
        let config = DatabaseConfig {
            url: "libsql://research.example.io".into(),
            auth_token: "token123".into(),
            ..Default::default()
        };
        assert!(config.is_remote());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn url_without_token_is_invalid() {
        let config = DatabaseConfig {
            url: "libsql://research.example.io".into(),
            ..Default::default()
        };
        assert!(!config.is_remote());
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "database.auth_token"
        ));
    }

    #[test]
    fn unknown_scheme_is_invalid() {
        let config = DatabaseConfig {
            url: "postgres://db".into(),
            auth_token: "t".into(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "database.url"
        ));
    }

    #[test]
    fn empty_path_is_not_configured() {
        let config = DatabaseConfig {
            path: String::new(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotConfigured { .. })
        ));
    }
}
