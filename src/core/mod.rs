pub mod config;
pub mod encoding;
