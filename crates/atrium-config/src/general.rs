//! General application configuration.

use serde::{Deserialize, Serialize};

fn default_format() -> String {
    "json".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Output format used when `--format` is not given: `json`, `table`, or `raw`.
    #[serde(default = "default_format")]
    pub default_format: String,

    /// Log filter used when neither `ATRIUM_LOG` nor `--quiet`/`--verbose` is set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
            log_level: default_log_level(),
        }
    }
}
