//! Object CRUD against the config endpoint.

use tracing::{debug, info, warn};

use crate::client::Op5Client;
use crate::endpoints::{config_url, send_request_with_retry};
use crate::error::{ClientError, Result};
use crate::format::describe_operation;
use crate::models::{ApiResponse, Method, ObjectType, Operation, ServiceName};
use crate::validation::validate_request;

impl Op5Client {
    /// Validate and execute a single object operation.
    ///
    /// # Errors
    ///
    /// - `ClientError::Validation` when the operation is malformed; nothing is sent
    /// - `ClientError::DryRun` for non-GET operations in dry-run mode
    /// - Any error from [`send_request_with_retry`]
    pub async fn operation(&self, op: &Operation) -> Result<ApiResponse> {
        if let Err(e) = validate_request(op) {
            warn!(error = %e, "Operation rejected before sending");
            if let Some(m) = self.metrics() {
                let endpoint = format!("/config/{}", op.object_type);
                m.record_client_error(&endpoint, op.method.as_str(), &e);
            }
            return Err(e);
        }

        if self.dry_run && op.method.is_mutating() {
            let text = describe_operation(op.method, op.object_type, &op.name, op.data.as_ref());
            warn!("DRYRUN: {text}");
            return Err(ClientError::DryRun(text));
        }

        let parent_is_hostgroup = self.service_parent_is_hostgroup(op).await?;
        self.send_config(op, parent_is_hostgroup).await
    }

    /// Check whether the host part of a service name is actually a hostgroup.
    ///
    /// The API addresses services on hosts and on hostgroups with the same
    /// path, so hostgroup services need an explicit `parent_type` marker.
    /// Only done in debug mode.
    async fn service_parent_is_hostgroup(&self, op: &Operation) -> Result<bool> {
        let applies = self.debug
            && op.object_type == ObjectType::Service
            && !op.name.is_empty()
            && matches!(
                op.method,
                Method::Get | Method::Patch | Method::Put | Method::Delete
            );
        if !applies {
            return Ok(false);
        }

        let service = ServiceName::parse(&op.name)?;
        info!(
            hostgroup = %service.host,
            "Checking if the service parent is a hostgroup"
        );

        let lookup = Operation::read(ObjectType::Hostgroup, service.host);
        match self.send_config(&lookup, false).await {
            Ok(_) => Ok(true),
            Err(e) if e.is_fatal() => Err(e),
            Err(e) => {
                debug!(error = %e, "Service parent is not a hostgroup");
                Ok(false)
            }
        }
    }

    async fn send_config(&self, op: &Operation, parent_is_hostgroup: bool) -> Result<ApiResponse> {
        let url = config_url(&self.base_url, op);
        let endpoint = format!("/config/{}", op.object_type);
        match &op.data {
            Some(data) => debug!(method = %op.method, url = %url, data = %serde_json::Value::Object(data.clone()), "Sending request"),
            None => debug!(method = %op.method, url = %url, "Sending request"),
        }

        let mut builder = self.request(op.method.into(), &url, self.timeout);
        if parent_is_hostgroup {
            builder = builder.query(&[("parent_type", "hostgroup")]);
        }
        if let Some(data) = &op.data {
            builder = builder.json(data);
        }

        let response = send_request_with_retry(
            builder,
            &self.retry_policy,
            &endpoint,
            op.method.as_str(),
            self.metrics(),
        )
        .await?;

        let text = describe_operation(op.method, op.object_type, &op.name, op.data.as_ref());
        if op.method.is_mutating() {
            info!("{text}");
        } else {
            debug!("{text}");
        }
        Ok(response)
    }
}
