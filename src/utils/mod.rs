pub mod date;
pub mod ids;
pub mod log_filter;
pub mod webutils;
