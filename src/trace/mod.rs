pub mod conversation;
pub mod store;
