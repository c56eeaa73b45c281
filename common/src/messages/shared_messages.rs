use crate::messages::catalog_messages::*;
use actix::prelude::*;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Every message that travels over a catalog connection.
///
/// Serialized as one JSON object per line, tagged by `"type"`.
#[derive(Serialize, Deserialize, Debug, Message, Clone)]
#[serde(tag = "type")]
#[rtype(result = "()")]
pub enum NetworkMessage {
    /// Client asks for a collection.
    FetchCollection(FetchCollection),
    /// Server answers with restaurants.
    RestaurantCollection(RestaurantCollection),
    /// Server answers with menu items.
    MenuItemCollection(MenuItemCollection),
    /// Server refused the request's credentials.
    Unauthorized(Unauthorized),
    /// Server could not serve the request.
    RequestFailed(RequestFailed),

    /// Local only: the remote end hung up.
    ConnectionClosed(ConnectionClosed),
}

#[derive(Serialize, Deserialize, Debug, Message, Clone)]
#[rtype(result = "()")]
pub struct ConnectionClosed {
    pub remote_addr: SocketAddr,
}

/// Stops a transport actor and drops its socket half.
#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct Shutdown;
