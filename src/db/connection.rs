use sea_orm::DatabaseConnection;
use tracing::info;

use super::providers;
use crate::config::DatabaseConfig;

/// Connects through the provider matching the configured url scheme and
/// syncs the schema from the entity definitions.
pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let registry = providers::default_registry()?;
    let provider = registry.provider_for_url(&cfg.url)?;

    info!("connecting via {} provider", provider.id().as_str());
    let db = provider.connect(cfg).await?;
    provider.post_connect(&db, cfg).await?;

    info!("syncing database schema from entities");
    db.get_schema_registry("zombie_registry::db::entities::*")
        .sync(&db)
        .await?;
    Ok(db)
}
