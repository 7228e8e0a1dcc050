use std::{env, time::Duration};

use log::*;

const DEFAULT_ORDER_API_HOST: &str = "127.0.0.1";
const DEFAULT_ORDER_API_PORT: u16 = 3000;
const DEFAULT_USER_SERVICE_URL: &str = "http://localhost:8080";
const DEFAULT_INVENTORY_SERVICE_URL: &str = "http://localhost:5000";
const DEFAULT_UPSTREAM_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone, Debug)]
pub struct OrderApiConfig {
    pub host: String,
    pub port: u16,
    /// Base URL of the user (credit) service, e.g. "http://user-service:8080".
    pub user_service_url: String,
    /// Base URL of the inventory service, e.g. "http://inventory-service:5000".
    pub inventory_service_url: String,
    /// Upper bound on each upstream call. A service that does not answer within this window is
    /// reported as unavailable.
    pub upstream_timeout: Duration,
}

impl Default for OrderApiConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_ORDER_API_HOST.to_string(),
            port: DEFAULT_ORDER_API_PORT,
            user_service_url: DEFAULT_USER_SERVICE_URL.to_string(),
            inventory_service_url: DEFAULT_INVENTORY_SERVICE_URL.to_string(),
            upstream_timeout: DEFAULT_UPSTREAM_TIMEOUT,
        }
    }
}

impl OrderApiConfig {
    pub fn new(host: &str, port: u16) -> Self {
        Self { host: host.to_string(), port, ..Default::default() }
    }

    pub fn from_env_or_default() -> Self {
        let host = env::var("ORDER_API_HOST").ok().unwrap_or_else(|| DEFAULT_ORDER_API_HOST.into());
        let port = env::var("ORDER_API_PORT")
            .map(|s| {
                s.parse::<u16>().unwrap_or_else(|e| {
                    error!(
                        "🪛️ {s} is not a valid port for ORDER_API_PORT. {e} Using the default, \
                         {DEFAULT_ORDER_API_PORT}, instead."
                    );
                    DEFAULT_ORDER_API_PORT
                })
            })
            .ok()
            .unwrap_or(DEFAULT_ORDER_API_PORT);
        let user_service_url = env::var("USER_SERVICE_URL").ok().unwrap_or_else(|| {
            info!("🪛️ USER_SERVICE_URL is not set. Using the default, {DEFAULT_USER_SERVICE_URL}, instead.");
            DEFAULT_USER_SERVICE_URL.into()
        });
        let inventory_service_url = env::var("INVENTORY_SERVICE_URL").ok().unwrap_or_else(|| {
            info!("🪛️ INVENTORY_SERVICE_URL is not set. Using the default, {DEFAULT_INVENTORY_SERVICE_URL}, instead.");
            DEFAULT_INVENTORY_SERVICE_URL.into()
        });
        let upstream_timeout = env::var("ORDER_API_UPSTREAM_TIMEOUT")
            .map(|s| {
                s.parse::<u64>().map(Duration::from_secs).unwrap_or_else(|e| {
                    error!(
                        "🪛️ {s} is not a valid number of seconds for ORDER_API_UPSTREAM_TIMEOUT. {e} Using the \
                         default, {}s, instead.",
                        DEFAULT_UPSTREAM_TIMEOUT.as_secs()
                    );
                    DEFAULT_UPSTREAM_TIMEOUT
                })
            })
            .ok()
            .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT);
        Self { host, port, user_service_url, inventory_service_url, upstream_timeout }
    }
}
