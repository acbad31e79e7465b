// Rezizer URL builder library

pub mod builder;
pub mod cli;
pub mod config;
pub mod constants;
pub mod encoder;
pub mod error;
pub mod logging;
pub mod operations;
pub mod signer;

pub use builder::UrlBuilder;
pub use config::RezizerConfig;
pub use error::RezizerError;
pub use operations::{OperationSet, OperationValue};
