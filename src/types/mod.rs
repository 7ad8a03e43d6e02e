pub mod error;
pub mod exercise;
pub mod response;
pub mod user;
