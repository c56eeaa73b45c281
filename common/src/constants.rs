pub const SERVER_IP_ADDRESS: &str = "127.0.0.1";
pub const BASE_PORT: u16 = 8080;
pub const TIMEOUT_SECONDS: u64 = 2;
pub const DEFAULT_STALE_SECONDS: u64 = 30;
const DELAY_TENTHS: u64 = 3;
pub const BASE_DELAY_MILLIS: u64 = 100 * DELAY_TENTHS;

pub const RESTAURANTS_PATH: &str = "/api/restaurants";
pub const MENU_ITEMS_PATH: &str = "/api/menu-items";

pub const ALL_CATEGORIES: &str = "all";
pub const DEFAULT_DELIVERY_LOCATION: &str = "Downtown";
pub const LISTING_PLACEHOLDERS: usize = 4;
pub const MENU_PLACEHOLDERS: usize = 6;
pub const MAX_QUANTITY_PER_LINE: u32 = 99;
pub const MAX_SPLIT_PEOPLE: u32 = 20;

pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";
pub const SERVERS_VAR: &str = "FOOD_SERVERS";
pub const PORT_VAR: &str = "FOOD_PORT";
pub const BIND_IP_VAR: &str = "FOOD_BIND_IP";
pub const AUTH_TOKEN_VAR: &str = "FOOD_AUTH_TOKEN";
pub const STALE_SECS_VAR: &str = "FOOD_STALE_SECS";
pub const CONNECT_TIMEOUT_VAR: &str = "FOOD_CONNECT_TIMEOUT_SECS";
pub const CATALOG_PATH_VAR: &str = "FOOD_CATALOG";
pub const LATENCY_VAR: &str = "FOOD_LATENCY_MS";
