//! REST API endpoint implementations.
//!
//! # What this module handles:
//! - URL construction for the config, command, filter and report endpoints
//! - Response decoding and classification
//! - Sending requests with the shared retry discipline
//!
//! # What this module does NOT handle:
//! - Operation validation (see [`crate::validation`])
//! - Change tracking (see [`crate::session`])

mod classify;
mod request;
pub mod url_encoding;
mod urls;

pub use classify::{
    ResponseOutcome, STATUS_SANITY_PROTECTION, classify, decode_body, is_nothing_to_do,
};
pub use request::send_request_with_retry;
pub use urls::{command_url, config_url, query_url};
