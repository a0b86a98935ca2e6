pub mod config;
pub mod help;
pub mod new;
pub mod version;
