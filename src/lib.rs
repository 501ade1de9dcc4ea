pub mod api;
pub mod config;
pub mod error;
pub mod etherscan;
pub mod server;
pub mod tools;

pub use config::Config;
pub use error::ApiError;
pub use etherscan::{EtherscanClient, OperationClient};
