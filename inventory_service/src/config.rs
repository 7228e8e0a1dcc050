use std::env;

use log::*;
use swiftorder_common::Secret;

const DEFAULT_INVENTORY_SERVICE_HOST: &str = "127.0.0.1";
const DEFAULT_INVENTORY_SERVICE_PORT: u16 = 5000;
const DEFAULT_DB_HOST: &str = "localhost";
const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_DB_NAME: &str = "inventory";
const DEFAULT_DB_USER: &str = "postgres";

#[derive(Clone, Debug)]
pub struct InventoryConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
}

/// Connection settings for the inventory database. The password never appears in `Debug` output;
/// it is wrapped in a [`Secret`].
#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: Secret<String>,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_INVENTORY_SERVICE_HOST.to_string(),
            port: DEFAULT_INVENTORY_SERVICE_PORT,
            database: DatabaseConfig::default(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_DB_HOST.to_string(),
            port: DEFAULT_DB_PORT,
            name: DEFAULT_DB_NAME.to_string(),
            user: DEFAULT_DB_USER.to_string(),
            password: Secret::default(),
        }
    }
}

impl InventoryConfig {
    pub fn new(host: &str, port: u16) -> Self {
        Self { host: host.to_string(), port, ..Default::default() }
    }

    pub fn from_env_or_default() -> Self {
        let host = env::var("INVENTORY_SERVICE_HOST").ok().unwrap_or_else(|| DEFAULT_INVENTORY_SERVICE_HOST.into());
        let port = env::var("INVENTORY_SERVICE_PORT")
            .map(|s| {
                s.parse::<u16>().unwrap_or_else(|e| {
                    error!(
                        "🪛️ {s} is not a valid port for INVENTORY_SERVICE_PORT. {e} Using the default, \
                         {DEFAULT_INVENTORY_SERVICE_PORT}, instead."
                    );
                    DEFAULT_INVENTORY_SERVICE_PORT
                })
            })
            .ok()
            .unwrap_or(DEFAULT_INVENTORY_SERVICE_PORT);
        let database = DatabaseConfig::from_env_or_default();
        Self { host, port, database }
    }
}

impl DatabaseConfig {
    pub fn from_env_or_default() -> Self {
        let host = env::var("DB_HOST").ok().unwrap_or_else(|| DEFAULT_DB_HOST.into());
        let port = env::var("DB_PORT")
            .map(|s| {
                s.parse::<u16>().unwrap_or_else(|e| {
                    error!("🪛️ {s} is not a valid port for DB_PORT. {e} Using the default, {DEFAULT_DB_PORT}, instead.");
                    DEFAULT_DB_PORT
                })
            })
            .ok()
            .unwrap_or(DEFAULT_DB_PORT);
        let name = env::var("DB_NAME").ok().unwrap_or_else(|| DEFAULT_DB_NAME.into());
        let user = env::var("DB_USER").ok().unwrap_or_else(|| DEFAULT_DB_USER.into());
        let password = env::var("DB_PASSWORD").map(Secret::new).unwrap_or_else(|_| {
            error!("🪛️ DB_PASSWORD is not set. Please set it to the password for the inventory database.");
            Secret::default()
        });
        Self { host, port, name, user, password }
    }
}
