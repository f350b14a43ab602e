//! Server state
//!
//! Shared handle passed to every request handler. `Clone` is shallow;
//! the pool and JWT service are reference counted.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::db::repository::admin_user;

#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub pool: SqlitePool,
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    pub fn new(config: Config, pool: SqlitePool, jwt_service: Arc<JwtService>) -> Self {
        Self {
            config,
            pool,
            jwt_service,
        }
    }

    /// Full startup: working directory, database with migrations, JWT
    /// service, and the seed admin account when the table is empty.
    pub async fn initialize(config: &Config) -> anyhow::Result<Self> {
        config.ensure_work_dir()?;

        let db = DbService::new(&config.db_path().to_string_lossy()).await?;
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        let state = Self::new(config.clone(), db.pool, jwt_service);
        state.seed_default_admin().await?;
        Ok(state)
    }

    /// Creates the first admin account on a fresh database.
    ///
    /// Username comes from ADMIN_USERNAME (default "admin"). The
    /// password comes from ADMIN_PASSWORD; when unset in development a
    /// random one is generated and logged once.
    async fn seed_default_admin(&self) -> anyhow::Result<()> {
        if admin_user::count(&self.pool).await? > 0 {
            return Ok(());
        }
        let username = std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".into());
        let password = match std::env::var("ADMIN_PASSWORD") {
            Ok(p) if !p.is_empty() => p,
            _ => {
                if self.config.is_production() {
                    anyhow::bail!("ADMIN_PASSWORD must be set on first start in production");
                }
                let generated = shared::util::confirmation_code();
                tracing::warn!(
                    username = %username,
                    password = %generated,
                    "No ADMIN_PASSWORD set; generated a one-time admin password"
                );
                generated
            }
        };
        let hash = crate::auth::hash_password(&password)
            .map_err(|e| anyhow::anyhow!("Failed to hash seed admin password: {e}"))?;
        admin_user::create(&self.pool, &username, &hash, "Administrator").await?;
        tracing::info!(username = %username, "Seeded initial admin account");
        Ok(())
    }
}
