pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{Result, StoreError};
