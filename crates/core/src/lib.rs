//! Core types for botapi-docs
//!
//! Domain types of the Bot API specification document, the snapshot built
//! from it, Bot API wire types and environment configuration.

mod api_spec;
pub mod constants;
mod env_config;
mod error;
mod snapshot;
pub mod telegram;

pub use api_spec::*;
pub use constants::*;
pub use env_config::*;
pub use error::*;
pub use snapshot::*;
