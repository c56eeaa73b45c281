pub mod app;
pub mod catalog_client;
pub mod ui_handler;
