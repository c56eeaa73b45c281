pub mod cart;
pub mod menu_item;
pub mod restaurant;
pub mod service_type;
