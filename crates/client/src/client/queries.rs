//! Filter and report reads whose query travels as request parameters.

use tracing::{debug, info};

use crate::client::Op5Client;
use crate::endpoints::url_encoding::encode_path_segment;
use crate::endpoints::{query_url, send_request_with_retry};
use crate::error::Result;
use crate::models::ApiResponse;

/// Path of the event report endpoint.
pub const REPORT_EVENT_PATH: &str = "/report/event";

impl Op5Client {
    /// GET `api_path` with `params` as the query string.
    ///
    /// Reads are executed in dry-run mode too.
    pub async fn operation_querystring(
        &self,
        api_path: &str,
        params: &[(String, String)],
    ) -> Result<ApiResponse> {
        let url = query_url(&self.base_url, api_path);
        debug!(url = %url, params = ?params, "GET with query string");

        let builder = self
            .request(reqwest::Method::GET, &url, self.query_timeout)
            .query(params);
        let response = send_request_with_retry(
            builder,
            &self.retry_policy,
            api_path,
            "GET",
            self.metrics(),
        )
        .await?;

        info!(entries = response.len(), "GET({api_path}): query succeeded");
        Ok(response)
    }

    /// Run a filter query, e.g. `filter("query", "[hosts] state != 0")`.
    pub async fn filter(&self, filter_type: &str, query: &str) -> Result<ApiResponse> {
        let path = format!("/filter/{}", encode_path_segment(filter_type));
        let params = [
            ("query".to_string(), query.to_string()),
            ("format".to_string(), "json".to_string()),
        ];
        self.operation_querystring(&path, &params).await
    }

    /// Query the event report.
    pub async fn report(&self, params: &[(String, String)]) -> Result<ApiResponse> {
        self.operation_querystring(REPORT_EVENT_PATH, params).await
    }
}
