use crate::error::CatalogError;
use common::types::menu_item::MenuItem;
use common::types::restaurant::Restaurant;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Everything the catalog serves.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogData {
    pub restaurants: Vec<Restaurant>,
    pub menu_items: Vec<MenuItem>,
}

impl CatalogData {
    /// Ids must be unique and every menu item must point at a known restaurant.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut restaurant_ids = HashSet::new();
        for restaurant in &self.restaurants {
            if !restaurant_ids.insert(restaurant.id.as_str()) {
                return Err(CatalogError::Invalid(format!(
                    "duplicate restaurant id {}",
                    restaurant.id
                )));
            }
        }

        let mut item_ids = HashSet::new();
        for item in &self.menu_items {
            if !item_ids.insert(item.id.as_str()) {
                return Err(CatalogError::Invalid(format!(
                    "duplicate menu item id {}",
                    item.id
                )));
            }
            if !restaurant_ids.contains(item.restaurant_id.as_str()) {
                return Err(CatalogError::Invalid(format!(
                    "menu item {} references unknown restaurant {}",
                    item.id, item.restaurant_id
                )));
            }
        }
        Ok(())
    }
}

/// Reads a catalog file, or falls back to the built-in seed.
pub fn load_catalog(path: Option<&Path>) -> Result<CatalogData, CatalogError> {
    let data = match path {
        Some(path) => serde_json::from_str::<CatalogData>(&fs::read_to_string(path)?)?,
        None => default_catalog(),
    };
    data.validate()?;
    Ok(data)
}

struct RestaurantSeed {
    id: &'static str,
    name: &'static str,
    cuisine: &'static str,
    rating: f32,
    is_open: bool,
    delivery_time: &'static str,
    delivery_fee: u32,
    distance: &'static str,
    minimum_order: u32,
    address: &'static str,
}

impl From<RestaurantSeed> for Restaurant {
    fn from(seed: RestaurantSeed) -> Self {
        Restaurant {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            cuisine: seed.cuisine.to_string(),
            rating: seed.rating,
            image: format!("/images/restaurants/{}.jpg", seed.id),
            is_open: seed.is_open,
            delivery_time: seed.delivery_time.to_string(),
            delivery_fee: seed.delivery_fee,
            distance: seed.distance.to_string(),
            minimum_order: seed.minimum_order,
            address: seed.address.to_string(),
            preparation_time: None,
        }
    }
}

fn item(
    id: &str,
    restaurant_id: &str,
    name: &str,
    description: &str,
    price: u32,
    category: &str,
    is_popular: bool,
) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        restaurant_id: restaurant_id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        image: format!("/images/menu/{id}.jpg"),
        category: category.to_string(),
        is_popular,
    }
}

pub fn default_catalog() -> CatalogData {
    let restaurants = vec![
        RestaurantSeed {
            id: "pizza-hut",
            name: "Pizza Hut",
            cuisine: "Italian",
            rating: 4.5,
            is_open: true,
            delivery_time: "25-35 min",
            delivery_fee: 99,
            distance: "1.2 km",
            minimum_order: 800,
            address: "12 Main Boulevard, Gulberg",
        },
        RestaurantSeed {
            id: "kfc",
            name: "KFC",
            cuisine: "Fast Food",
            rating: 4.2,
            is_open: false,
            delivery_time: "20-30 min",
            delivery_fee: 79,
            distance: "0.8 km",
            minimum_order: 500,
            address: "45 Mall Road",
        },
        RestaurantSeed {
            id: "savour-foods",
            name: "Savour Foods",
            cuisine: "Pakistani",
            rating: 4.7,
            is_open: true,
            delivery_time: "30-40 min delivery",
            delivery_fee: 120,
            distance: "2.5 km",
            minimum_order: 600,
            address: "Blue Area, Jinnah Avenue",
        },
        RestaurantSeed {
            id: "ginyaki",
            name: "Ginyaki",
            cuisine: "Chinese",
            rating: 4.3,
            is_open: true,
            delivery_time: "35-45 min",
            delivery_fee: 150,
            distance: "3.1 km",
            minimum_order: 1000,
            address: "F-7 Markaz",
        },
    ]
    .into_iter()
    .map(Restaurant::from)
    .collect();

    let menu_items = vec![
        item("ph-1", "pizza-hut", "Chicken Tikka Pizza", "Spicy tikka chunks, onions, green chillies", 1450, "Pizza", true),
        item("ph-2", "pizza-hut", "Margherita", "Mozzarella and tomato sauce", 1100, "Pizza", false),
        item("ph-3", "pizza-hut", "Garlic Bread", "Four pieces with cheese", 450, "Sides", false),
        item("ph-4", "pizza-hut", "Molten Lava Cake", "Warm chocolate centre", 390, "Desserts", true),
        item("kfc-1", "kfc", "Zinger Burger", "Crispy fillet, lettuce, mayo", 650, "Burgers", true),
        item("kfc-2", "kfc", "Hot Wings (6 pcs)", "Spicy fried wings", 520, "Sides", false),
        item("sf-1", "savour-foods", "Pulao Kabab", "Chicken pulao with two shami kababs", 720, "Rice", true),
        item("sf-2", "savour-foods", "Chicken Karahi", "Half, served with naan", 1350, "Curries", false),
        item("sf-3", "savour-foods", "Kheer", "Rice pudding", 250, "Desserts", false),
        item("gy-1", "ginyaki", "Kung Pao Chicken", "Peanuts, dried chillies", 1250, "Mains", true),
        item("gy-2", "ginyaki", "Egg Fried Rice", "Wok tossed", 650, "Rice", false),
        item("gy-3", "ginyaki", "Hot and Sour Soup", "Serves two", 550, "Soups", false),
    ];

    CatalogData {
        restaurants,
        menu_items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_is_valid() {
        let data = default_catalog();
        assert!(data.validate().is_ok());
        assert!(data.restaurants.iter().any(|r| !r.is_open));
    }

    #[test]
    fn test_validate_rejects_dangling_menu_item() {
        let mut data = default_catalog();
        data.menu_items[0].restaurant_id = "nowhere".to_string();
        assert!(matches!(data.validate(), Err(CatalogError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_duplicate_restaurant() {
        let mut data = default_catalog();
        let copy = data.restaurants[0].clone();
        data.restaurants.push(copy);
        assert!(matches!(data.validate(), Err(CatalogError::Invalid(_))));
    }

    #[test]
    fn test_load_catalog_reads_json_file() {
        let path = std::env::temp_dir().join(format!("catalog-{}.json", std::process::id()));
        let json = serde_json::to_string(&default_catalog()).unwrap();
        fs::write(&path, json).unwrap();

        let data = load_catalog(Some(&path)).unwrap();
        assert_eq!(data.restaurants.len(), 4);
        assert_eq!(data.menu_items.len(), 12);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_catalog_reports_missing_file() {
        let missing = Path::new("/definitely/not/here/catalog.json");
        assert!(matches!(load_catalog(Some(missing)), Err(CatalogError::Io(_))));
    }
}
