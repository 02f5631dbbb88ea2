//! Service layer for botapi-docs
//!
//! Keeps the documentation snapshot fresh, renders articles and handles
//! updates delivered by either the webhook server or the polling loop.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::cognitive_complexity, reason = "Complex async flows are inherent")]
#![allow(clippy::min_ident_chars, reason = "Short error vars are idiomatic")]

mod dispatcher;
mod error;
mod inline_response;
mod inline_service;
mod polling;
mod refresh;
mod render;
mod snapshot_store;
mod transport;


pub use dispatcher::{Dispatcher, is_start_command, start_text};
pub use error::ServiceError;
pub use inline_response::{AnswerKind, InlineAnswer, article};
pub use inline_service::InlineQueryService;
pub use polling::run_polling;
pub use refresh::{RefreshMode, SnapshotCache};
pub use render::{render, render_method, render_type, sanitize_html};
pub use snapshot_store::SnapshotStore;
pub use transport::BotTransport;
