pub mod store_service;
pub mod user;
