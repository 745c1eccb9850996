//! Applying one verb to many objects with periodic commits.
//!
//! The server degrades under too many pending edits, so a commit is forced
//! after every `slice_size` items and once more at the end.

use tracing::{error, info, warn};

use crate::error::{ClientError, Result};
use crate::models::{Method, ObjectData, ObjectType, Operation};
use crate::session::Session;

/// One target of a bulk run.
#[derive(Debug, Clone, PartialEq)]
pub struct BulkItem {
    pub object_type: ObjectType,
    /// Empty for creates.
    pub name: String,
    pub data: Option<ObjectData>,
}

impl BulkItem {
    pub fn new(object_type: ObjectType, name: impl Into<String>) -> Self {
        Self {
            object_type,
            name: name.into(),
            data: None,
        }
    }

    pub fn with_data(mut self, data: ObjectData) -> Self {
        self.data = Some(data);
        self
    }

    fn into_operation(self, method: Method) -> Operation {
        Operation {
            method,
            object_type: self.object_type,
            name: self.name,
            data: self.data,
        }
    }
}

/// A per-item failure that did not stop the run.
#[derive(Debug)]
pub struct BulkFailure {
    /// Position of the item in the input.
    pub index: usize,
    pub operation: Operation,
    pub error: ClientError,
}

/// Result of [`Session::bulk_operation`].
#[derive(Debug, Default)]
pub struct BulkReport {
    pub succeeded: usize,
    pub failures: Vec<BulkFailure>,
    /// Commits that actually applied changes.
    pub commits: usize,
}

impl BulkReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

impl Session<'_> {
    /// Apply `method` to every item in order.
    ///
    /// # Errors
    ///
    /// - `ClientError::Validation` when `slice_size` is zero
    /// - Fatal item errors and failed commits abort the run
    pub async fn bulk_operation<I>(
        &mut self,
        method: Method,
        items: I,
        slice_size: usize,
    ) -> Result<BulkReport>
    where
        I: IntoIterator<Item = BulkItem>,
    {
        if slice_size == 0 {
            return Err(ClientError::Validation(
                "bulk slice size must be at least 1".to_string(),
            ));
        }

        let mut report = BulkReport::default();

        for (index, item) in items.into_iter().enumerate() {
            let op = item.into_operation(method);
            match self.execute(&op).await {
                Ok(_) => report.succeeded += 1,
                Err(e) if e.is_fatal() => {
                    error!(index, error = %e, "Aborting bulk operation");
                    return Err(e);
                }
                Err(e) => {
                    warn!(index, name = %op.name, error = %e, "Bulk item failed, continuing");
                    report.failures.push(BulkFailure {
                        index,
                        operation: op,
                        error: e,
                    });
                }
            }

            if (index + 1) % slice_size == 0 {
                self.commit_slice(&mut report).await?;
            }
        }

        self.commit_slice(&mut report).await?;
        info!(
            succeeded = report.succeeded,
            failed = report.failures.len(),
            commits = report.commits,
            "Bulk operation finished"
        );
        Ok(report)
    }

    async fn commit_slice(&mut self, report: &mut BulkReport) -> Result<()> {
        match self.commit_changes(true).await {
            Ok(_) => {
                report.commits += 1;
                Ok(())
            }
            Err(e) if e.is_benign() || e.is_not_attempted() => Ok(()),
            Err(e) => Err(e),
        }
    }
}
