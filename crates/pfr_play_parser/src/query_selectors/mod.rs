pub mod config;
pub mod parse_schedule;
pub mod parse_tables;

pub use config::config::*;
pub use parse_schedule::*;
pub use parse_tables::*;
