use crate::messages::internal_messages::{GetMenuItems, GetRestaurants};
use crate::seed::CatalogData;
use actix::prelude::*;
use colored::Color;
use common::logger::Logger;
use common::types::menu_item::MenuItem;
use common::types::restaurant::Restaurant;

/// The `Catalog` actor owns the restaurant and menu collections served to
/// every connection. Collections are read-only once loaded.
pub struct Catalog {
    pub restaurants: Vec<Restaurant>,
    pub menu_items: Vec<MenuItem>,
    pub logger: Logger,
}

impl Catalog {
    pub fn new(data: CatalogData) -> Self {
        Self {
            restaurants: data.restaurants,
            menu_items: data.menu_items,
            logger: Logger::new("Catalog", Color::Green),
        }
    }
}

impl Actor for Catalog {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        self.logger.info(format!(
            "Serving {} restaurants and {} menu items",
            self.restaurants.len(),
            self.menu_items.len()
        ));
    }
}

impl Handler<GetRestaurants> for Catalog {
    type Result = MessageResult<GetRestaurants>;

    fn handle(&mut self, _msg: GetRestaurants, _ctx: &mut Self::Context) -> Self::Result {
        MessageResult(self.restaurants.clone())
    }
}

impl Handler<GetMenuItems> for Catalog {
    type Result = MessageResult<GetMenuItems>;

    fn handle(&mut self, msg: GetMenuItems, _ctx: &mut Self::Context) -> Self::Result {
        let items = match msg.restaurant_id {
            Some(id) => self
                .menu_items
                .iter()
                .filter(|item| item.restaurant_id == id)
                .cloned()
                .collect(),
            None => self.menu_items.clone(),
        };
        self.logger.debug(format!("Serving {} menu items", items.len()));
        MessageResult(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::default_catalog;

    #[actix_rt::test]
    async fn test_menu_items_are_scoped_by_restaurant() {
        let catalog = Catalog::new(default_catalog()).start();

        let all = catalog
            .send(GetMenuItems {
                restaurant_id: None,
            })
            .await
            .unwrap();
        let pizza = catalog
            .send(GetMenuItems {
                restaurant_id: Some("pizza-hut".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(all.len(), 12);
        assert_eq!(pizza.len(), 4);
        assert!(pizza.iter().all(|i| i.restaurant_id == "pizza-hut"));
    }

    #[actix_rt::test]
    async fn test_restaurants_keep_catalog_order() {
        let catalog = Catalog::new(default_catalog()).start();
        let restaurants = catalog.send(GetRestaurants).await.unwrap();
        let names: Vec<&str> = restaurants.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Pizza Hut", "KFC", "Savour Foods", "Ginyaki"]);
    }
}
