use crate::commands::Command;
use crate::query::Collection;
use crate::router::Route;
use crate::store::AppState;
use actix::prelude::*;
use common::error::FetchError;
use common::messages::Resource;

/////////////////////////////////////////////////////////////////////
// Messages to the CatalogClient
/////////////////////////////////////////////////////////////////////

/// Asks for a collection on behalf of the page mounted as `mount_id`.
#[derive(Message)]
#[rtype(result = "()")]
pub struct FetchQuery {
    pub resource: Resource,
    pub mount_id: u64,
    pub reply_to: Recipient<QueryResolved>,
}

/////////////////////////////////////////////////////////////////////
// Messages to the App
/////////////////////////////////////////////////////////////////////

#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct QueryResolved {
    pub resource: Resource,
    pub mount_id: u64,
    pub result: Result<Collection, FetchError>,
}

#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct UserCommand(pub Command);

/// Read-only view of the app, used by tests and diagnostics.
#[derive(Debug, Clone)]
pub struct AppSnapshot {
    pub route: Route,
    pub mount_id: u64,
    pub state: AppState,
}

#[derive(Message)]
#[rtype(result = "AppSnapshot")]
pub struct Inspect;

/////////////////////////////////////////////////////////////////////
// Messages to the UIHandler
/////////////////////////////////////////////////////////////////////

#[derive(Message, Debug, Clone, PartialEq)]
#[rtype(result = "()")]
pub enum UIMessage {
    /// Replaces the whole screen.
    ShowScreen(String),
    /// One-line feedback printed under the screen.
    ShowHint(String),
    /// Printed before the application shuts down.
    Fatal(String),
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct InputLine(pub String);

#[derive(Message)]
#[rtype(result = "()")]
pub struct InputClosed;
