mod config;
mod error;
mod messages;
mod seed;
mod server_acceptor;
mod server_actors;

use crate::config::ServerConfig;
use crate::seed::load_catalog;
use crate::server_acceptor::acceptor::Acceptor;
use crate::server_actors::catalog::Catalog;
use actix::Actor;
use colored::Color;
use common::logger::Logger;
use tokio::signal::ctrl_c;

#[actix::main]
async fn main() -> std::io::Result<()> {
    let logger = Logger::new("Catalog Server", Color::Magenta);
    let config = ServerConfig::load()?;

    let data = load_catalog(config.catalog_path.as_deref()).inspect_err(|e| {
        logger.error(format!("Could not load catalog: {e}"));
    })?;
    let catalog = Catalog::new(data).start();
    let acceptor = Acceptor::new(&config, catalog);

    tokio::select! {
        res = acceptor.start() => res?,
        _ = ctrl_c() => {
            logger.info("Ctrl-C received, shutting down...");
            actix::System::current().stop();
        }
    }
    Ok(())
}
