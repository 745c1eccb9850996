//! OP5 Monitor configuration REST API client.
//!
//! This crate provides a typed client for the OP5 Monitor `/api` endpoints:
//! object CRUD under `/config`, command submission, filter and report
//! queries, and the staged-change workflow (list, commit, discard).
//!
//! Requests are validated locally before anything is sent, transient
//! server conditions (HTTP 509 sanity protection and retryable 500s) are
//! retried with a fixed wait, and every call returns an explicit
//! [`Result`].

pub mod client;
pub mod endpoints;
pub mod error;
pub mod format;
pub mod metrics;
pub mod models;
pub mod retry;
pub mod session;
pub mod validation;

pub use client::Op5Client;
pub use client::builder::Op5ClientBuilder;
pub use endpoints::ResponseOutcome;
pub use error::{ClientError, Result};
pub use metrics::{ErrorCategory, MetricsCollector};
pub use models::{ApiResponse, Method, ObjectData, ObjectType, Operation, ServiceName};
pub use retry::{RetryDecision, RetryPolicy};
pub use session::{
    BulkFailure, BulkItem, BulkReport, ChangeTracker, ConfirmPrompt, Session, SyncOutcome,
};
pub use validation::{RequiredFieldSet, validate_fields, validate_request};
