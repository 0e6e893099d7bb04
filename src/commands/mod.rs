pub mod complete;
pub mod config;
pub mod edit;
