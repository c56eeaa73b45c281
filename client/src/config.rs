use common::config::{parse_socket_addrs, try_load, var};
use common::constants::{
    AUTH_TOKEN_VAR, BASE_PORT, CONNECT_TIMEOUT_VAR, DEFAULT_STALE_SECONDS, SERVERS_VAR,
    SERVER_IP_ADDRESS, STALE_SECS_VAR, TIMEOUT_SECONDS,
};
use common::error::ConfigError;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Catalog servers, tried in order until one accepts.
    pub servers: Vec<SocketAddr>,
    pub auth_token: Option<String>,
    /// How long a fetched collection is served from cache.
    pub stale_after: Duration,
    pub connect_timeout: Duration,
}

impl ClientConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let default_server = format!("{SERVER_IP_ADDRESS}:{BASE_PORT}");
        let servers = parse_socket_addrs(SERVERS_VAR, &var(SERVERS_VAR).unwrap_or(default_server))?;
        let stale_secs: u64 = try_load(STALE_SECS_VAR, &DEFAULT_STALE_SECONDS.to_string())?;
        let timeout_secs: u64 = try_load(CONNECT_TIMEOUT_VAR, &TIMEOUT_SECONDS.to_string())?;
        Ok(Self {
            servers,
            auth_token: var(AUTH_TOKEN_VAR),
            stale_after: Duration::from_secs(stale_secs),
            connect_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
