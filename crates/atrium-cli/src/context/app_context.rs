use anyhow::Context;
use atrium_config::AtriumConfig;
use atrium_db::service::ResearchService;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: ResearchService,
}

impl AppContext {
    /// Open the configured research store.
    pub async fn init(config: &AtriumConfig) -> anyhow::Result<Self> {
        let service = ResearchService::from_config(&config.database)
            .await
            .with_context(|| {
                if config.database.is_remote() {
                    format!("failed to open remote research database {}", config.database.url)
                } else {
                    format!("failed to open research database at {}", config.database.path)
                }
            })?;

        tracing::debug!(remote = config.database.is_remote(), "research database ready");
        Ok(Self { service })
    }
}
