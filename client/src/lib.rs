pub mod client_actors;
pub mod commands;
pub mod config;
pub mod messages;
pub mod modals;
pub mod pages;
pub mod query;
pub mod router;
pub mod store;
pub mod views;

#[cfg(test)]
mod test_support;
