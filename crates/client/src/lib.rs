//! HTTP clients for botapi-docs.
//!
//! [`SpecFetcher`] downloads the machine-readable Bot API specification and
//! [`BotClient`] talks to the Telegram Bot API on behalf of the bot.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]

pub mod bot_api;
pub mod error;
pub mod spec_fetcher;


pub use bot_api::BotClient;
pub use error::{BotApiError, FetchError};
pub use spec_fetcher::{SpecFetcher, SpecSource};
