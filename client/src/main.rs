use actix::prelude::*;
use client::client_actors::app::App;
use client::client_actors::catalog_client::CatalogClient;
use client::client_actors::ui_handler::{listen_stdin, UIHandler};
use client::config::ClientConfig;
use client::views;
use colored::Color;
use common::logger::Logger;
use std::sync::Arc;
use tokio::signal::ctrl_c;
use tokio::sync::Notify;

#[actix::main]
async fn main() -> std::io::Result<()> {
    let logger = Logger::new("Client", Color::Yellow);
    let config = ClientConfig::load()?;

    println!("{}", views::welcome_banner());

    let fetcher = CatalogClient::connect(&config).await.start();
    let shutdown = Arc::new(Notify::new());
    let ui_shutdown = shutdown.clone();
    let _app = App::create(move |ctx| {
        let ui = UIHandler::new(ctx.address().recipient(), ui_shutdown).start();
        listen_stdin(ui.clone());
        App::new(fetcher.recipient(), ui.recipient())
    });

    tokio::select! {
        _ = ctrl_c() => logger.info("Ctrl-C received, shutting down..."),
        _ = shutdown.notified() => logger.info("Shutting down..."),
    }
    System::current().stop();
    Ok(())
}
