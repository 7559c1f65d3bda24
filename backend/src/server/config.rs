//! Environment-driven application configuration.
//!
//! The database settings keep the variable names the deployment already
//! uses: either a full `DATABASE_URL`, or `DB_USER`/`DB_PASSWORD`/
//! `DB_HOST`/`DB_NAME` composed into one.

use std::env;
use std::net::SocketAddr;

/// Application configuration assembled at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    database_url: String,
    bind_addr: SocketAddr,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| {
            let user = env::var("DB_USER").unwrap_or_else(|_| "my_user".into());
            let password = env::var("DB_PASSWORD").unwrap_or_else(|_| "yourpassword".into());
            let host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".into());
            let name = env::var("DB_NAME").unwrap_or_else(|_| "spatial_db".into());
            format!("postgresql://{user}:{password}@{host}/{name}")
        });

        let bind_addr = env::var("BIND_ADDR")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 8080)));

        Self {
            database_url,
            bind_addr,
        }
    }

    /// Connection URL for the store.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Socket address the HTTP server binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
