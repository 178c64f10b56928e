//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use atrium_config::AtriumConfig;

#[test]
fn loads_database_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "/var/lib/atrium/research.db"
foreign_keys = false
"#,
        )?;

        let config: AtriumConfig = Figment::from(Serialized::defaults(AtriumConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.database.path, "/var/lib/atrium/research.db");
        assert!(!config.database.foreign_keys);
        assert!(!config.database.is_remote());
        Ok(())
    });
}

#[test]
fn loads_remote_database_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
url = "libsql://research.example.io"
auth_token = "toml-token"
"#,
        )?;

        let config: AtriumConfig = Figment::from(Serialized::defaults(AtriumConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!(config.database.is_remote());
        assert!(config.database.validate().is_ok());
        // Untouched fields keep their defaults
        assert_eq!(config.database.path, "atrium.db");
        assert!(config.database.foreign_keys);
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".atrium")?;
        jail.create_file(
            ".atrium/config.toml",
            r#"
[general]
default_format = "table"
"#,
        )?;

        let config: AtriumConfig = AtriumConfig::figment().extract()?;
        assert_eq!(config.general.default_format, "table");
        assert_eq!(config.general.log_level, "warn");
        Ok(())
    });
}

#[test]
fn env_var_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".atrium")?;
        jail.create_file(
            ".atrium/config.toml",
            r#"
[database]
path = "from-toml.db"

[general]
log_level = "info"
"#,
        )?;
        jail.set_env("ATRIUM_DATABASE__PATH", "from-env.db");

        let config: AtriumConfig = AtriumConfig::figment().extract()?;
        assert_eq!(config.database.path, "from-env.db");
        // TOML value not overridden by env should remain
        assert_eq!(config.general.log_level, "info");
        Ok(())
    });
}

#[test]
fn env_var_overrides_default() {
    Jail::expect_with(|jail| {
        jail.set_env("ATRIUM_GENERAL__LOG_LEVEL", "debug");
        jail.set_env("ATRIUM_DATABASE__FOREIGN_KEYS", "false");

        let config: AtriumConfig = Figment::from(Serialized::defaults(AtriumConfig::default()))
            .merge(Env::prefixed("ATRIUM_").split("__"))
            .extract()?;

        assert_eq!(config.general.log_level, "debug");
        assert!(!config.database.foreign_keys);
        Ok(())
    });
}

/// Typo'd env var keys are silently ignored by figment.
#[test]
fn typo_env_var_silently_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("ATRIUM_DATABASE__PATHH", "typo.db");

        let config: AtriumConfig = AtriumConfig::figment().extract()?;
        assert_eq!(
            config.database.path, "atrium.db",
            "typo'd env var should be silently ignored by figment"
        );
        Ok(())
    });
}

#[test]
fn malformed_toml_is_an_error() {
    Jail::expect_with(|jail| {
        jail.create_dir(".atrium")?;
        jail.create_file(".atrium/config.toml", "[database\npath = 1")?;

        assert!(AtriumConfig::figment().extract::<AtriumConfig>().is_err());
        Ok(())
    });
}
