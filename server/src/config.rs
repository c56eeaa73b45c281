use common::config::{try_load, var};
use common::constants::{
    AUTH_TOKEN_VAR, BASE_DELAY_MILLIS, BIND_IP_VAR, BASE_PORT, CATALOG_PATH_VAR, LATENCY_VAR, PORT_VAR,
    SERVER_IP_ADDRESS,
};
use common::error::ConfigError;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

pub struct ServerConfig {
    pub addr: SocketAddr,
    /// When set, every request must carry this token.
    pub auth_token: Option<String>,
    /// JSON catalog to serve instead of the built-in seed.
    pub catalog_path: Option<PathBuf>,
    pub latency_millis: u64,
}

impl ServerConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let ip: IpAddr = try_load(BIND_IP_VAR, SERVER_IP_ADDRESS)?;
        let port: u16 = try_load(PORT_VAR, &BASE_PORT.to_string())?;
        Ok(Self {
            addr: SocketAddr::new(ip, port),
            auth_token: var(AUTH_TOKEN_VAR),
            catalog_path: var(CATALOG_PATH_VAR).map(PathBuf::from),
            latency_millis: try_load(LATENCY_VAR, &BASE_DELAY_MILLIS.to_string())?,
        })
    }
}
