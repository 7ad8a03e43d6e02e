pub mod create;
pub mod logs;
