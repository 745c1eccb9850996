//! URL construction for the API endpoints.
//!
//! `base_url` is the API root without a trailing slash, e.g.
//! `https://op5.example.com/api`.

use crate::endpoints::url_encoding::{encode_object_name, encode_path_segment};
use crate::models::{Method, Operation};

/// URL of the config endpoint for an object operation.
///
/// The encoded name is appended for GET/PATCH/PUT/DELETE on non-change
/// types. An empty name on GET addresses the whole collection.
pub fn config_url(base_url: &str, op: &Operation) -> String {
    let mut url = format!("{base_url}/config/{}", op.object_type);
    let takes_name = !matches!(op.method, Method::Post) && !op.object_type.is_change();
    if takes_name && !op.name.is_empty() {
        url.push('/');
        url.push_str(&encode_object_name(&op.name));
    }
    url
}

/// URL of the command endpoint, e.g. `{base}/command/ACKNOWLEDGE_HOST_PROBLEM`.
pub fn command_url(base_url: &str, command_type: &str) -> String {
    format!("{base_url}/command/{}", encode_path_segment(command_type))
}

/// URL of a querystring endpoint given its API path, e.g. `/filter/query`.
pub fn query_url(base_url: &str, api_path: &str) -> String {
    if api_path.starts_with('/') {
        format!("{base_url}{api_path}")
    } else {
        format!("{base_url}/{api_path}")
    }
}
