//! Command submission against `/command/{type}`.

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::client::Op5Client;
use crate::endpoints::{command_url, send_request_with_retry};
use crate::error::{ClientError, Result};
use crate::models::{ApiResponse, ObjectData};

impl Op5Client {
    /// Submit an operational command such as `ACKNOWLEDGE_HOST_PROBLEM`.
    ///
    /// Commands are never sent in dry-run mode.
    pub async fn command_operation(
        &self,
        command_type: &str,
        data: &ObjectData,
    ) -> Result<ApiResponse> {
        if command_type.trim().is_empty() {
            return Err(ClientError::Validation("Command type not set".to_string()));
        }

        let url = command_url(&self.base_url, command_type);
        let body = Value::Object(data.clone());
        debug!(url = %url, data = %body, "POST command");

        if self.dry_run {
            let text = format!("POST(command/{command_type}) data: {body}");
            warn!("DRYRUN: {text}");
            return Err(ClientError::DryRun(text));
        }

        let builder = self
            .request(reqwest::Method::POST, &url, self.query_timeout)
            .json(&body);
        let endpoint = format!("/command/{command_type}");
        let response = send_request_with_retry(
            builder,
            &self.retry_policy,
            &endpoint,
            "POST",
            self.metrics(),
        )
        .await?;

        info!("POST(command/{command_type}): sent data: '{body}'");
        Ok(response)
    }

    /// Alias of [`Op5Client::command_operation`].
    pub async fn command(&self, command_type: &str, data: &ObjectData) -> Result<ApiResponse> {
        self.command_operation(command_type, data).await
    }
}
