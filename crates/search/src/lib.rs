//! Query engine over documentation snapshots
//!
//! Two steps, both synchronous and allocation-light:
//! 1. [`parse_query`] normalizes the raw inline query text
//! 2. [`search`] matches the effective query against method and type identifiers

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]

mod matcher;
mod query;

pub use matcher::{Entry, search, search_with_limit};
pub use query::{Query, normalize, parse_query};
