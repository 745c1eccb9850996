//! Idempotent create-or-update.

use serde_json::Value;
use tracing::{debug, info};

use crate::error::Result;
use crate::models::{ApiResponse, ObjectData, ObjectType};
use crate::session::Session;

/// What [`Session::sync`] did.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncOutcome {
    /// The object was absent and has been created.
    Created(ApiResponse),
    /// At least one field differed; one update was sent.
    Updated(ApiResponse),
    /// The server copy already matched; nothing was sent.
    Unchanged,
}

impl Session<'_> {
    /// Make the server copy of `name` carry the fields in `desired`.
    ///
    /// Fields the server has but `desired` omits are left alone. A read
    /// failing with 404 means the object is absent; any other read failure
    /// is returned.
    pub async fn sync(
        &mut self,
        object_type: ObjectType,
        name: &str,
        desired: ObjectData,
    ) -> Result<SyncOutcome> {
        let current = match self.read(object_type, name).await {
            Ok(response) => response,
            Err(e) if e.is_not_found() => {
                info!(object_type = %object_type, name, "Object absent, creating it");
                return self.create(object_type, desired).await.map(SyncOutcome::Created);
            }
            Err(e) => return Err(e),
        };

        match first_difference(&desired, &current.payload) {
            Some(key) => {
                let current_value = current.payload.get(key).unwrap_or(&Value::Null);
                info!(
                    key,
                    desired = %desired[key],
                    current = %current_value,
                    "Field did not match, making an update request"
                );
                self.update(object_type, name, desired)
                    .await
                    .map(SyncOutcome::Updated)
            }
            None => {
                debug!(object_type = %object_type, name, "Server copy already up to date");
                Ok(SyncOutcome::Unchanged)
            }
        }
    }
}

/// First key of `desired` whose value differs from `current`.
///
/// Lists are compared as sets.
pub(crate) fn first_difference<'d>(desired: &'d ObjectData, current: &Value) -> Option<&'d str> {
    desired
        .iter()
        .find(|(key, wanted)| match current.get(key.as_str()) {
            None => true,
            Some(actual) => !values_match(wanted, actual),
        })
        .map(|(key, _)| key.as_str())
}

fn values_match(wanted: &Value, actual: &Value) -> bool {
    match (wanted, actual) {
        (Value::Array(wanted), Value::Array(actual)) => {
            wanted.iter().all(|v| actual.contains(v)) && actual.iter().all(|v| wanted.contains(v))
        }
        _ => wanted == actual,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data(value: Value) -> ObjectData {
        match value {
            Value::Object(map) => map,
            _ => ObjectData::new(),
        }
    }

    #[test]
    fn test_list_order_is_ignored() {
        let desired = data(json!({"notification_options": ["c", "r", "w"]}));
        let current = json!({"notification_options": ["r", "w", "c"], "host_name": "web01"});
        assert_eq!(first_difference(&desired, &current), None);
    }

    #[test]
    fn test_scalar_difference_detected() {
        let desired = data(json!({"address": "10.0.0.2"}));
        let current = json!({"address": "10.0.0.1"});
        assert_eq!(first_difference(&desired, &current), Some("address"));
    }

    #[test]
    fn test_missing_key_is_a_difference() {
        let desired = data(json!({"alias": "Web"}));
        assert_eq!(first_difference(&desired, &json!({})), Some("alias"));
    }

    #[test]
    fn test_list_subset_is_a_difference() {
        let desired = data(json!({"hostgroups": ["web"]}));
        let current = json!({"hostgroups": ["web", "linux"]});
        assert_eq!(first_difference(&desired, &current), Some("hostgroups"));
    }

    #[test]
    fn test_list_against_scalar_is_a_difference() {
        let desired = data(json!({"contacts": ["ops"]}));
        let current = json!({"contacts": "ops"});
        assert_eq!(first_difference(&desired, &current), Some("contacts"));
    }
}
