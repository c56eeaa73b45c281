use actix::prelude::*;
use common::types::menu_item::MenuItem;
use common::types::restaurant::Restaurant;

/////////////////////////////////////////////////////////////////////
// Messages to the Catalog
/////////////////////////////////////////////////////////////////////

#[derive(Message, Debug)]
#[rtype(result = "Vec<Restaurant>")]
pub struct GetRestaurants;

/// `restaurant_id: None` asks for every menu item.
#[derive(Message, Debug)]
#[rtype(result = "Vec<MenuItem>")]
pub struct GetMenuItems {
    pub restaurant_id: Option<String>,
}
