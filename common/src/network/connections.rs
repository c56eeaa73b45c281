use crate::logger::Logger;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;

/// Tries a single `SocketAddr`, giving up after `limit`.
pub async fn connect(server_addr: SocketAddr, limit: Duration) -> Option<TcpStream> {
    match timeout(limit, TcpStream::connect(server_addr)).await {
        Ok(Ok(stream)) => Some(stream),
        _ => None,
    }
}

/// Tries every address in order and returns the first stream that opens.
pub async fn connect_some(
    servers: &[SocketAddr],
    limit: Duration,
    logger: &Logger,
) -> Option<TcpStream> {
    for addr in servers {
        logger.debug(format!("Trying server: {addr}"));
        if let Some(stream) = connect(*addr, limit).await {
            logger.info(format!("Connected to {addr}"));
            return Some(stream);
        }
        logger.warn(format!("Failed to connect to {addr}"));
    }
    logger.error("Could not connect to any server.");
    None
}
