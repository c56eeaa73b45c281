use crate::messages::internal_messages::{GetMenuItems, GetRestaurants};
use crate::server_actors::catalog::Catalog;
use actix::prelude::*;
use colored::Color;
use common::logger::Logger;
use common::messages::shared_messages::NetworkMessage;
use common::messages::{
    FetchCollection, MenuItemCollection, RequestFailed, Resource, RestaurantCollection,
    Unauthorized,
};
use common::network::communicator::Communicator;
use common::utils::jittered_delay;
use std::net::SocketAddr;
use tokio::net::TcpStream;

/// One actor per accepted socket. Answers `FetchCollection` requests from the
/// catalog, checking the bearer token first when one is configured.
pub struct Connection {
    pub peer_addr: SocketAddr,
    pub communicator: Option<Communicator<Connection>>,
    /// Held until `started` can bind the communicator to this actor's address.
    pub pending_stream: Option<TcpStream>,
    pub catalog: Addr<Catalog>,
    pub auth_token: Option<String>,
    pub latency_millis: u64,
    pub logger: Logger,
}

impl Connection {
    pub fn new(
        stream: TcpStream,
        peer_addr: SocketAddr,
        catalog: Addr<Catalog>,
        auth_token: Option<String>,
        latency_millis: u64,
    ) -> Self {
        Self {
            peer_addr,
            communicator: None,
            pending_stream: Some(stream),
            catalog,
            auth_token,
            latency_millis,
            logger: Logger::new(format!("Connection {peer_addr}"), Color::Blue),
        }
    }

    fn is_authorized(&self, request: &FetchCollection) -> bool {
        match &self.auth_token {
            Some(expected) => request.auth_token.as_deref() == Some(expected.as_str()),
            None => true,
        }
    }

    fn reply(&self, message: NetworkMessage) {
        let sent = self
            .communicator
            .as_ref()
            .is_some_and(|communicator| communicator.send(message));
        if !sent {
            self.logger.warn("Could not send reply, connection is gone");
        }
    }

    /// Replies after the configured simulated latency.
    fn reply_later(&self, message: NetworkMessage, ctx: &mut Context<Self>) {
        if self.latency_millis == 0 {
            self.reply(message);
            return;
        }
        ctx.run_later(jittered_delay(self.latency_millis), move |act, _ctx| {
            act.reply(message)
        });
    }

    fn serve(&mut self, request: FetchCollection, ctx: &mut Context<Self>) {
        let request_id = request.request_id;
        self.logger
            .info(format!("Request #{request_id} for {}", request.resource));

        if !self.is_authorized(&request) {
            self.logger
                .warn(format!("Request #{request_id} rejected: bad token"));
            self.reply_later(
                NetworkMessage::Unauthorized(Unauthorized {
                    request_id,
                    reason: "missing or invalid auth token".to_string(),
                }),
                ctx,
            );
            return;
        }

        match request.resource {
            Resource::Restaurants => {
                self.catalog
                    .send(GetRestaurants)
                    .into_actor(self)
                    .map(move |res, act, ctx| {
                        let reply = match res {
                            Ok(restaurants) => {
                                NetworkMessage::RestaurantCollection(RestaurantCollection {
                                    request_id,
                                    restaurants,
                                })
                            }
                            Err(e) => failed(request_id, e),
                        };
                        act.reply_later(reply, ctx);
                    })
                    .spawn(ctx);
            }
            Resource::MenuItems { restaurant_id } => {
                self.catalog
                    .send(GetMenuItems { restaurant_id })
                    .into_actor(self)
                    .map(move |res, act, ctx| {
                        let reply = match res {
                            Ok(menu_items) => {
                                NetworkMessage::MenuItemCollection(MenuItemCollection {
                                    request_id,
                                    menu_items,
                                })
                            }
                            Err(e) => failed(request_id, e),
                        };
                        act.reply_later(reply, ctx);
                    })
                    .spawn(ctx);
            }
        }
    }
}

fn failed(request_id: u64, e: MailboxError) -> NetworkMessage {
    NetworkMessage::RequestFailed(RequestFailed {
        request_id,
        reason: format!("catalog unavailable: {e}"),
    })
}

impl Actor for Connection {
    type Context = Context<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        let Some(stream) = self.pending_stream.take() else {
            self.logger.error("No stream available");
            ctx.stop();
            return;
        };
        match Communicator::new(stream, ctx.address()) {
            Ok(communicator) => {
                self.communicator = Some(communicator);
                self.logger.debug("Communicator started");
            }
            Err(e) => {
                self.logger.error(format!("Could not set up connection: {e}"));
                ctx.stop();
            }
        }
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        if let Some(mut communicator) = self.communicator.take() {
            communicator.shutdown();
        }
        self.logger.info("Connection closed");
    }
}

impl Handler<NetworkMessage> for Connection {
    type Result = ();

    fn handle(&mut self, msg: NetworkMessage, ctx: &mut Self::Context) -> Self::Result {
        match msg {
            NetworkMessage::FetchCollection(request) => self.serve(request, ctx),
            NetworkMessage::ConnectionClosed(_) => ctx.stop(),
            other => self
                .logger
                .warn(format!("Ignoring unexpected message from client: {other:?}")),
        }
    }
}
