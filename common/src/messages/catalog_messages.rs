use crate::constants::{MENU_ITEMS_PATH, RESTAURANTS_PATH};
use crate::types::menu_item::MenuItem;
use crate::types::restaurant::Restaurant;
use actix::Message;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A collection the catalog can serve. Doubles as the client's query key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Resource {
    Restaurants,
    MenuItems { restaurant_id: Option<String> },
}

impl Resource {
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Restaurants => RESTAURANTS_PATH,
            Resource::MenuItems { .. } => MENU_ITEMS_PATH,
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::MenuItems {
                restaurant_id: Some(id),
            } => write!(f, "{}?restaurant={}", self.path(), id),
            _ => write!(f, "{}", self.path()),
        }
    }
}

/// Client request for a whole collection.
///
/// ## Contents
/// - `request_id`: Echoed back in the response.
/// - `resource`: The collection wanted.
/// - `auth_token`: Bearer token, checked only when the server has one configured.
#[derive(Message, Debug, Clone, Serialize, Deserialize)]
#[rtype(result = "()")]
pub struct FetchCollection {
    pub request_id: u64,
    pub resource: Resource,
    pub auth_token: Option<String>,
}

#[derive(Message, Debug, Clone, Serialize, Deserialize)]
#[rtype(result = "()")]
pub struct RestaurantCollection {
    pub request_id: u64,
    pub restaurants: Vec<Restaurant>,
}

#[derive(Message, Debug, Clone, Serialize, Deserialize)]
#[rtype(result = "()")]
pub struct MenuItemCollection {
    pub request_id: u64,
    pub menu_items: Vec<MenuItem>,
}

/// The request carried a missing or wrong token.
#[derive(Message, Debug, Clone, Serialize, Deserialize)]
#[rtype(result = "()")]
pub struct Unauthorized {
    pub request_id: u64,
    pub reason: String,
}

#[derive(Message, Debug, Clone, Serialize, Deserialize)]
#[rtype(result = "()")]
pub struct RequestFailed {
    pub request_id: u64,
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_paths_and_display() {
        assert_eq!(Resource::Restaurants.to_string(), "/api/restaurants");
        let scoped = Resource::MenuItems {
            restaurant_id: Some("pizza-hut".to_string()),
        };
        assert_eq!(scoped.path(), "/api/menu-items");
        assert_eq!(scoped.to_string(), "/api/menu-items?restaurant=pizza-hut");
    }
}
