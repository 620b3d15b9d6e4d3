use std::path::Path;

use anyhow::Context;
use reg_config::{DatabaseConfig, RegConfig};
use reg_db::service::RegService;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: RegService,
    pub config: RegConfig,
}

impl AppContext {
    /// Open the configured database, or `database_override` when given.
    ///
    /// Creates the parent directory of a file-backed database.
    pub async fn init(config: RegConfig, database_override: Option<&str>) -> anyhow::Result<Self> {
        let database = match database_override {
            Some(path) => DatabaseConfig {
                path: path.to_string(),
            },
            None => config.database.clone(),
        };
        database.validate()?;
        let db_path = database.path.as_str();

        if !database.is_in_memory() {
            if let Some(parent) = Path::new(db_path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!("failed to create database directory {}", parent.display())
                    })?;
                }
            }
        }

        tracing::debug!(path = %db_path, "opening registrar database");
        let service = RegService::new_local(db_path)
            .await
            .with_context(|| format!("failed to open database at {db_path}"))?;

        Ok(Self { service, config })
    }
}

#[cfg(test)]
mod tests {
    use reg_config::RegConfig;
    use tempfile::TempDir;

    use super::AppContext;

    #[tokio::test]
    async fn init_creates_database_directory() {
        let temp = TempDir::new().expect("tempdir should create");
        let path = temp.path().join("nested/dir/registrar.db");
        let path = path.to_string_lossy();

        let ctx = AppContext::init(RegConfig::default(), Some(&path))
            .await
            .expect("context should init");
        assert!(temp.path().join("nested/dir").is_dir());
        assert!(ctx.service.list_departments().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn init_accepts_in_memory_override() {
        let ctx = AppContext::init(RegConfig::default(), Some(":memory:"))
            .await
            .expect("context should init");
        assert_eq!(ctx.config.general.default_limit, 20);
    }
}
