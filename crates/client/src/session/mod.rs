//! Staged-change workflow on top of [`Op5Client`].
//!
//! The server stages configuration edits and applies them only on an
//! explicit commit. A [`Session`] routes every call through one
//! [`ChangeTracker`] so callers can tell whether this session has staged
//! anything, and exposes the commit workflow.
//!
//! # Invariants
//! - The tracker is updated only after a successful response
//! - `commit_changes` consults the server's change list, never just the local flag

mod bulk;
mod sync;

pub use bulk::{BulkFailure, BulkItem, BulkReport};
pub use sync::SyncOutcome;

use serde_json::Value;
use tracing::{debug, info};

use crate::client::Op5Client;
use crate::error::{ClientError, Result};
use crate::models::{ApiResponse, Method, ObjectData, ObjectType, Operation};

/// Yes/no confirmation consulted before an unforced commit.
pub trait ConfirmPrompt {
    fn ask(&self, question: &str) -> bool;
}

impl<F> ConfirmPrompt for F
where
    F: Fn(&str) -> bool,
{
    fn ask(&self, question: &str) -> bool {
        self(question)
    }
}

/// Whether this session has staged edits that have not been committed or discarded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeTracker {
    modified: bool,
}

impl ChangeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Update the flag after `op` succeeded with `response`.
    pub fn observe(&mut self, op: &Operation, response: &ApiResponse) {
        if op.object_type.is_change() {
            let cleared = match op.method {
                Method::Post | Method::Delete => true,
                Method::Get => response.is_empty(),
                _ => false,
            };
            if cleared {
                self.modified = false;
            }
        } else if op.method.is_mutating() {
            self.modified = true;
        }
    }
}

/// A sequence of calls sharing one change tracker.
pub struct Session<'a> {
    client: &'a Op5Client,
    tracker: ChangeTracker,
    prompt: Option<Box<dyn ConfirmPrompt + Send + Sync + 'a>>,
}

impl<'a> Session<'a> {
    pub fn new(client: &'a Op5Client) -> Self {
        Self {
            client,
            tracker: ChangeTracker::new(),
            prompt: None,
        }
    }

    /// Ask `prompt` before committing unless the commit is forced.
    pub fn with_prompt(mut self, prompt: impl ConfirmPrompt + Send + Sync + 'a) -> Self {
        self.prompt = Some(Box::new(prompt));
        self
    }

    pub fn client(&self) -> &Op5Client {
        self.client
    }

    pub fn tracker(&self) -> ChangeTracker {
        self.tracker
    }

    pub fn is_modified(&self) -> bool {
        self.tracker.is_modified()
    }

    /// Execute an operation and record its effect on the tracker.
    pub async fn execute(&mut self, op: &Operation) -> Result<ApiResponse> {
        let response = self.client.operation(op).await?;
        self.tracker.observe(op, &response);
        Ok(response)
    }

    pub async fn create(&mut self, object_type: ObjectType, data: ObjectData) -> Result<ApiResponse> {
        self.execute(&Operation::create(object_type, data)).await
    }

    /// Read one object, or every object of the type when `name` is empty.
    pub async fn read(&mut self, object_type: ObjectType, name: &str) -> Result<ApiResponse> {
        self.execute(&Operation::read(object_type, name)).await
    }

    /// Partial update (PATCH).
    pub async fn update(
        &mut self,
        object_type: ObjectType,
        name: &str,
        data: ObjectData,
    ) -> Result<ApiResponse> {
        self.execute(&Operation::update(object_type, name, data)).await
    }

    /// Full replacement (PUT).
    pub async fn overwrite(
        &mut self,
        object_type: ObjectType,
        name: &str,
        data: ObjectData,
    ) -> Result<ApiResponse> {
        self.execute(&Operation::overwrite(object_type, name, data)).await
    }

    pub async fn delete(&mut self, object_type: ObjectType, name: &str) -> Result<ApiResponse> {
        self.execute(&Operation::delete(object_type, name)).await
    }

    /// List the changes staged on the server.
    pub async fn get_changes(&mut self) -> Result<ApiResponse> {
        self.execute(&Operation::new(Method::Get, ObjectType::Change))
            .await
    }

    /// Discard every staged change on the server.
    pub async fn undo_changes(&mut self) -> Result<ApiResponse> {
        self.execute(&Operation::new(Method::Delete, ObjectType::Change))
            .await
    }

    /// Commit the changes staged on the server.
    ///
    /// # Errors
    ///
    /// - `ClientError::NothingToCommit` when the server lists no staged changes
    /// - `ClientError::CommitDeclined` when the prompt was declined
    pub async fn commit_changes(&mut self, force: bool) -> Result<ApiResponse> {
        let changes = self.get_changes().await?;
        if changes.is_empty() {
            info!("Not attempting commit since nothing has been modified on the server");
            return Err(ClientError::NothingToCommit);
        }

        if !force {
            if let Some(prompt) = &self.prompt {
                let question = format!(
                    "There are {} staged changes. Do you want to commit them?",
                    changes.len()
                );
                if !prompt.ask(&question) {
                    info!("Commit declined");
                    return Err(ClientError::CommitDeclined);
                }
            }
        }

        let response = self
            .execute(&Operation::new(Method::Post, ObjectType::Change))
            .await?;
        if let Some(m) = self.client.metrics() {
            m.record_commit(force);
        }
        Ok(response)
    }

    /// Members of a hostgroup, contactgroup, servicegroup or usergroup.
    ///
    /// A group that cannot be read, or has no `members` field, yields an
    /// empty list.
    pub async fn get_group_members(
        &mut self,
        group_type: ObjectType,
        group_name: &str,
    ) -> Result<Vec<String>> {
        if !group_type.is_group() {
            return Err(ClientError::Validation(format!(
                "object type '{group_type}' is not a group type"
            )));
        }

        match self.read(group_type, group_name).await {
            Ok(response) => Ok(response
                .payload
                .get("members")
                .and_then(Value::as_array)
                .map(|members| {
                    members
                        .iter()
                        .filter_map(Value::as_str)
                        .map(str::to_owned)
                        .collect()
                })
                .unwrap_or_default()),
            Err(e) if e.is_fatal() => Err(e),
            Err(e) => {
                debug!(group = group_name, error = %e, "Group could not be read");
                Ok(Vec::new())
            }
        }
    }
}
