use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no token provided, add `TOKEN` to the environment or .env file")]
    MissingToken,
}
