pub mod catalog_messages;
pub mod shared_messages;

pub use catalog_messages::*;
pub use shared_messages::*;
