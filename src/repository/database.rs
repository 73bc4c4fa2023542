use diesel::pg::PgConnection;
use diesel::r2d2::{self, ConnectionManager, PooledConnection};

use crate::config::Config;
use crate::errors::ApiError;

pub type DBPool = r2d2::Pool<ConnectionManager<PgConnection>>;
pub type DBConnection = PooledConnection<ConnectionManager<PgConnection>>;

#[derive(Debug, Clone)]
pub struct Database {
    pool: DBPool,
}

impl Database {
    /// Builds the pool and opens the first connection, so a bad URL or an
    /// unreachable server fails at startup instead of on the first request.
    pub fn connect(config: &Config) -> Result<Self, r2d2::PoolError> {
        let manager = ConnectionManager::<PgConnection>::new(config.database_url.as_str());
        let pool = r2d2::Pool::builder()
            .max_size(config.pool_max_size)
            .build(manager)?;
        tracing::info!(max_size = config.pool_max_size, "Successfully connected to database");
        Ok(Database { pool })
    }

    pub fn connection(&self) -> Result<DBConnection, ApiError> {
        Ok(self.pool.get()?)
    }
}
