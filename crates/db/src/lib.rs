//! MySQL access for the show catalogue: pool construction, liveness ping,
//! and the two read queries the site needs.

mod shows;

use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::Connection;

pub use shows::*;
pub use sqlx::MySqlPool;

/// Connection settings for the external show database.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

/// Build a bounded pool (4 connections) without dialing the server yet.
/// Reachability is decided by [`ping`], so startup failure is deterministic.
pub fn pool(config: &DbConfig) -> MySqlPool {
    let options = MySqlConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.database);
    MySqlPoolOptions::new()
        .max_connections(4)
        .connect_lazy_with(options)
}

/// One round trip to the server: acquire a connection, ping, release.
pub async fn ping(pool: &MySqlPool) -> Result<(), sqlx::Error> {
    let mut conn = pool.acquire().await?;
    conn.ping().await
}
