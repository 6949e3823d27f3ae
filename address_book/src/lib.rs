pub mod contracts;
pub mod data_transfer;
pub mod errors;
mod store;
