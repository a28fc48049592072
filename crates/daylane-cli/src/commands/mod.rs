pub mod config;
pub mod days;
pub mod layout;
