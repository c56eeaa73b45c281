use crate::config::ClientConfig;
use crate::messages::internal_messages::{FetchQuery, QueryResolved};
use crate::query::Collection;
use actix::prelude::*;
use colored::Color;
use common::error::FetchError;
use common::logger::Logger;
use common::messages::shared_messages::NetworkMessage;
use common::messages::{FetchCollection, Resource};
use common::network::communicator::Communicator;
use common::network::connections::connect_some;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpStream;

struct CacheEntry {
    collection: Collection,
    fetched_at: Instant,
}

struct Waiter {
    mount_id: u64,
    reply_to: Recipient<QueryResolved>,
}

/// Fetch layer of the client. Owns the catalog connection and a per-resource
/// cache; concurrent queries for the same resource share one request.
pub struct CatalogClient {
    pub communicator: Option<Communicator<CatalogClient>>,
    /// Held until `started` can bind the communicator to this actor's address.
    pub pending_stream: Option<TcpStream>,
    pub auth_token: Option<String>,
    pub stale_after: Duration,
    cache: HashMap<Resource, CacheEntry>,
    in_flight: HashMap<Resource, Vec<Waiter>>,
    requests: HashMap<u64, Resource>,
    next_request_id: u64,
    pub logger: Logger,
}

impl CatalogClient {
    pub fn new(stream: Option<TcpStream>, auth_token: Option<String>, stale_after: Duration) -> Self {
        Self {
            communicator: None,
            pending_stream: stream,
            auth_token,
            stale_after,
            cache: HashMap::new(),
            in_flight: HashMap::new(),
            requests: HashMap::new(),
            next_request_id: 1,
            logger: Logger::new("Catalog Client", Color::Cyan),
        }
    }

    /// Opens the first reachable server from `config`. A client with no
    /// connection still starts; every query then fails with `NotConnected`.
    pub async fn connect(config: &ClientConfig) -> Self {
        let logger = Logger::new("Catalog Client", Color::Cyan);
        let stream = connect_some(&config.servers, config.connect_timeout, &logger).await;
        Self::new(stream, config.auth_token.clone(), config.stale_after)
    }

    fn fresh(&self, resource: &Resource) -> Option<Collection> {
        self.cache
            .get(resource)
            .filter(|entry| entry.fetched_at.elapsed() < self.stale_after)
            .map(|entry| entry.collection.clone())
    }

    fn request(&mut self, resource: &Resource) -> Result<(), FetchError> {
        let communicator = self.communicator.as_ref().ok_or(FetchError::NotConnected)?;
        let request_id = self.next_request_id;
        let sent = communicator.send(NetworkMessage::FetchCollection(FetchCollection {
            request_id,
            resource: resource.clone(),
            auth_token: self.auth_token.clone(),
        }));
        if !sent {
            return Err(FetchError::ConnectionLost);
        }
        self.next_request_id += 1;
        self.requests.insert(request_id, resource.clone());
        self.logger
            .debug(format!("Request #{request_id} sent for {resource}"));
        Ok(())
    }

    fn resolve(&mut self, request_id: u64, result: Result<Collection, FetchError>) {
        let Some(resource) = self.requests.remove(&request_id) else {
            self.logger
                .warn(format!("Response for unknown request #{request_id}"));
            return;
        };
        let result = match result {
            Ok(collection) if !collection.answers(&resource) => Err(FetchError::Malformed(
                format!("wrong collection kind for {resource}"),
            )),
            other => other,
        };
        match &result {
            Ok(collection) => {
                self.logger
                    .info(format!("{resource}: {} entries", collection.len()));
                self.cache.insert(
                    resource.clone(),
                    CacheEntry {
                        collection: collection.clone(),
                        fetched_at: Instant::now(),
                    },
                );
            }
            Err(e) => self.logger.warn(format!("{resource} failed: {e}")),
        }
        self.notify(&resource, result);
    }

    fn notify(&mut self, resource: &Resource, result: Result<Collection, FetchError>) {
        for waiter in self.in_flight.remove(resource).unwrap_or_default() {
            waiter.reply_to.do_send(QueryResolved {
                resource: resource.clone(),
                mount_id: waiter.mount_id,
                result: result.clone(),
            });
        }
    }

    fn fail_all(&mut self, error: FetchError) {
        self.requests.clear();
        let pending: Vec<Resource> = self.in_flight.keys().cloned().collect();
        for resource in pending {
            self.notify(&resource, Err(error.clone()));
        }
    }
}

impl Actor for CatalogClient {
    type Context = Context<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        let Some(stream) = self.pending_stream.take() else {
            self.logger.warn("Started without a connection");
            return;
        };
        match Communicator::new(stream, ctx.address()) {
            Ok(communicator) => {
                self.logger
                    .debug(format!("Talking to {}", communicator.peer_address));
                self.communicator = Some(communicator);
            }
            Err(e) => self.logger.error(format!("Could not set up connection: {e}")),
        }
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        if let Some(mut communicator) = self.communicator.take() {
            communicator.shutdown();
        }
    }
}

impl Handler<FetchQuery> for CatalogClient {
    type Result = ();

    fn handle(&mut self, msg: FetchQuery, _ctx: &mut Self::Context) -> Self::Result {
        if let Some(collection) = self.fresh(&msg.resource) {
            self.logger.debug(format!("Cache hit for {}", msg.resource));
            msg.reply_to.do_send(QueryResolved {
                resource: msg.resource,
                mount_id: msg.mount_id,
                result: Ok(collection),
            });
            return;
        }

        let waiter = Waiter {
            mount_id: msg.mount_id,
            reply_to: msg.reply_to,
        };
        if let Some(waiters) = self.in_flight.get_mut(&msg.resource) {
            waiters.push(waiter);
            return;
        }

        match self.request(&msg.resource) {
            Ok(()) => {
                self.in_flight.insert(msg.resource, vec![waiter]);
            }
            Err(e) => {
                self.logger.warn(format!("{} not requested: {e}", msg.resource));
                waiter.reply_to.do_send(QueryResolved {
                    resource: msg.resource,
                    mount_id: waiter.mount_id,
                    result: Err(e),
                });
            }
        }
    }
}

impl Handler<NetworkMessage> for CatalogClient {
    type Result = ();

    fn handle(&mut self, msg: NetworkMessage, _ctx: &mut Self::Context) -> Self::Result {
        match msg {
            NetworkMessage::RestaurantCollection(c) => self.resolve(
                c.request_id,
                Ok(Collection::Restaurants(Arc::new(c.restaurants))),
            ),
            NetworkMessage::MenuItemCollection(c) => self.resolve(
                c.request_id,
                Ok(Collection::MenuItems(Arc::new(c.menu_items))),
            ),
            NetworkMessage::Unauthorized(u) => {
                self.resolve(u.request_id, Err(FetchError::Unauthorized(u.reason)))
            }
            NetworkMessage::RequestFailed(f) => {
                self.resolve(f.request_id, Err(FetchError::Server(f.reason)))
            }
            NetworkMessage::ConnectionClosed(closed) => {
                self.logger
                    .error(format!("Server {} closed the connection", closed.remote_addr));
                if let Some(mut communicator) = self.communicator.take() {
                    communicator.shutdown();
                }
                self.fail_all(FetchError::ConnectionLost);
            }
            other => self
                .logger
                .warn(format!("Ignoring unexpected message from server: {other:?}")),
        }
    }
}
