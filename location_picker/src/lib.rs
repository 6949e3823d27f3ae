pub mod cli;
pub mod config;
pub mod errors;
pub mod geolocation;
pub mod maps;
pub mod notices;
pub mod picker;
pub mod store_client;
