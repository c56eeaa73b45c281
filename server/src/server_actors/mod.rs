pub mod catalog;
pub mod connection;
