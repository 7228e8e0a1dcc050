use std::fmt::Debug;

use log::*;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};

use crate::{config::DatabaseConfig, traits::StockStore};

pub const POOL_SIZE: u32 = 10;

/// Postgres-backed implementation of [`StockStore`].
///
/// Cloning is cheap; the pool is shared between clones, and each query checks a connection out of
/// the pool for exactly as long as the query runs.
#[derive(Clone)]
pub struct PgInventoryDb {
    pool: PgPool,
}

impl Debug for PgInventoryDb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "PgInventoryDb ({:?})", self.pool)
    }
}

impl PgInventoryDb {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let options = PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .database(&config.name)
            .username(&config.user)
            .password(config.password.reveal());
        let pool = PgPoolOptions::new().max_connections(POOL_SIZE).connect_with(options).await?;
        info!("🗃️ Connected to the inventory database at {}:{}/{}", config.host, config.port, config.name);
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn run_migrations(&self) -> Result<(), sqlx::Error> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        info!("🗃️ Database migrations are up to date");
        Ok(())
    }
}

impl StockStore for PgInventoryDb {
    type Error = sqlx::Error;

    async fn fetch_stock_count(&self, item_id: &str) -> Result<Option<i64>, Self::Error> {
        let mut conn = self.pool.acquire().await?;
        let count: Option<i64> = sqlx::query_scalar("SELECT stock_count FROM inventory WHERE item_id = $1")
            .bind(item_id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(count)
    }
}
