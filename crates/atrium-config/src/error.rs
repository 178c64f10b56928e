//! Errors raised while loading or validating the Atrium config.
//!
//! Loading merges the project and user `config.toml` files with the `ATRIUM_*`
//! environment layer; validation then checks `[database]` can open a store.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A config file or `ATRIUM_*` variable failed to parse or extract.
    #[error("Failed to load Atrium config: {0}")]
    Figment(#[from] figment::Error),

    /// A section has neither of the fields it needs, e.g. `[database]` with
    /// no `url` and an empty `path`.
    #[error("Atrium [{section}] section is not configured (set ATRIUM_{env}__* or edit .atrium/config.toml)", env = .section.to_uppercase())]
    NotConfigured { section: String },

    /// A dotted key such as `database.url` holds an unusable value.
    #[error("Invalid Atrium config value '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
