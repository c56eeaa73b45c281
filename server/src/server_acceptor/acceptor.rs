use crate::config::ServerConfig;
use crate::server_actors::catalog::Catalog;
use crate::server_actors::connection::Connection;
use actix::prelude::*;
use colored::Color;
use common::logger::Logger;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Accepts catalog connections and spawns one `Connection` actor per socket.
pub struct Acceptor {
    pub addr: SocketAddr,
    pub catalog: Addr<Catalog>,
    pub auth_token: Option<String>,
    pub latency_millis: u64,
    pub logger: Arc<Logger>,
}

impl Acceptor {
    pub fn new(config: &ServerConfig, catalog: Addr<Catalog>) -> Self {
        Self {
            addr: config.addr,
            catalog,
            auth_token: config.auth_token.clone(),
            latency_millis: config.latency_millis,
            logger: Arc::new(Logger::new("Acceptor", Color::Magenta)),
        }
    }

    pub async fn start(&self) -> std::io::Result<()> {
        let listener = TcpListener::bind(self.addr).await?;
        self.logger
            .info(format!("Acceptor started, listening on {}", self.addr));
        if self.auth_token.is_some() {
            self.logger.info("Requests must carry the configured auth token");
        }
        self.accept_connections(listener).await
    }

    async fn accept_connections(&self, listener: TcpListener) -> std::io::Result<()> {
        loop {
            match listener.accept().await {
                Ok((stream, client_addr)) => {
                    self.logger
                        .info(format!("Accepted connection from {}", client_addr));
                    Connection::new(
                        stream,
                        client_addr,
                        self.catalog.clone(),
                        self.auth_token.clone(),
                        self.latency_millis,
                    )
                    .start();
                }
                Err(e) => {
                    self.logger.warn(format!("Failed to accept connection: {}", e));
                }
            }
        }
    }
}
