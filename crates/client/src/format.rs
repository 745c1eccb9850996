//! Human-readable descriptions of operations.
//!
//! Used for dry-run reports and the success log line of each mutating call.

use serde_json::Value;

use crate::models::{Method, ObjectData, ObjectType};

/// Fields worth echoing for host, hostgroup and service operations, in display order.
const INTERESTING_FIELDS: &[&str] = &[
    "service_description",
    "host_name",
    "hostgroup_name",
    "address",
    "hostgroups",
    "contact_groups",
    "check_command",
    "check_command_args",
];

/// Describe an operation in one line.
///
/// # Examples
///
/// ```
/// use op5_client::format::describe_operation;
/// use op5_client::models::{Method, ObjectType};
///
/// assert_eq!(
///     describe_operation(Method::Delete, ObjectType::Host, "web01", None),
///     "DELETE(host) name: web01"
/// );
/// assert_eq!(
///     describe_operation(Method::Post, ObjectType::Change, "", None),
///     "Commit saved"
/// );
/// ```
pub fn describe_operation(
    method: Method,
    object_type: ObjectType,
    name: &str,
    data: Option<&ObjectData>,
) -> String {
    if object_type.is_change() {
        return match method {
            Method::Get => "Got list of changes".to_string(),
            Method::Post => "Commit saved".to_string(),
            Method::Delete => "Changes removed".to_string(),
            _ => format!("{method}({object_type})"),
        };
    }

    let mut text = format!("{method}({object_type})");
    if !name.is_empty() {
        text.push_str(&format!(" name: {name}"));
    }

    let Some(data) = data.filter(|d| !d.is_empty()) else {
        return text;
    };

    match object_type {
        ObjectType::Host | ObjectType::Hostgroup | ObjectType::Service => {
            let fields: Vec<String> = INTERESTING_FIELDS
                .iter()
                .filter_map(|field| {
                    data.get(*field)
                        .map(|value| format!("{field}='{}'", display_value(value)))
                })
                .collect();
            format!("{text} ({})", fields.join(", "))
        }
        _ => format!("{text} data: {}", Value::Object(data.clone())),
    }
}

/// Strings without quotes, everything else as compact JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
