use anyhow::Context;
use atrium_config::AtriumConfig;

/// Load layered configuration, honouring a `.env` file and `--database`.
///
/// An explicit database path always selects a local store.
pub fn load_config(database_override: Option<&str>) -> anyhow::Result<AtriumConfig> {
    let mut config =
        AtriumConfig::load_with_dotenv().context("failed to load atrium configuration")?;

    if let Some(path) = database_override {
        apply_database_override(&mut config, path);
    }

    Ok(config)
}

fn apply_database_override(config: &mut AtriumConfig, path: &str) {
    tracing::debug!(path, "database path overridden on the command line");
    config.database.path = path.to_string();
    config.database.url.clear();
    config.database.auth_token.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_switches_to_local_path() {
        let mut config = AtriumConfig::default();
        config.database.url = "libsql://research.example.io".into();
        config.database.auth_token = "token".into();

        apply_database_override(&mut config, "/tmp/research.db");

        assert_eq!(config.database.path, "/tmp/research.db");
        assert!(!config.database.is_remote());
    }
}
