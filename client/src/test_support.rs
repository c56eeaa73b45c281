use common::types::menu_item::MenuItem;
use common::types::restaurant::Restaurant;

pub fn restaurant(id: &str, name: &str, cuisine: &str, is_open: bool) -> Restaurant {
    Restaurant {
        id: id.to_string(),
        name: name.to_string(),
        cuisine: cuisine.to_string(),
        rating: 4.4,
        image: format!("/images/{id}.jpg"),
        is_open,
        delivery_time: "25-35 min".to_string(),
        delivery_fee: 99,
        distance: "1.2 km".to_string(),
        minimum_order: 800,
        address: "12 Main Boulevard".to_string(),
        preparation_time: None,
    }
}

pub fn menu_item(id: &str, category: &str, price: u32) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        restaurant_id: "pizza-hut".to_string(),
        name: format!("Dish {id}"),
        description: "Tasty".to_string(),
        price,
        image: String::new(),
        category: category.to_string(),
        is_popular: false,
    }
}

/// Pizza Hut (open, Italian) followed by KFC (closed, Fast Food).
pub fn pizza_and_kfc() -> Vec<Restaurant> {
    vec![
        restaurant("pizza-hut", "Pizza Hut", "Italian", true),
        restaurant("kfc", "KFC", "Fast Food", false),
    ]
}

pub fn sample_menu() -> Vec<MenuItem> {
    vec![
        menu_item("m1", "Pizza", 1200),
        menu_item("m2", "Sides", 400),
        menu_item("m3", "Pizza", 1500),
        menu_item("m4", "Desserts", 350),
    ]
}
