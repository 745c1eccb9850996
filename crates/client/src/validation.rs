//! Local validation of operations before any network I/O.
//!
//! # What this module handles:
//! - Structural checks on verb, object type, name and body
//! - Required-field checks for object creation
//!
//! # Invariants
//! - Rules run in a fixed order and stop at the first failure
//! - A rejected operation is never sent
//! - The `change` pseudo-type is exempt from every rule except type membership

use std::borrow::Cow;

use crate::error::{ClientError, Result};
use crate::models::{Method, ObjectData, ObjectType, Operation, ServiceName};

/// Fields an object must carry when it is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredFieldSet {
    /// Every one of these must be present.
    pub required: Vec<Cow<'static, str>>,
    /// For each group, at least one member must be present.
    pub one_of: Vec<Vec<Cow<'static, str>>>,
}

impl RequiredFieldSet {
    fn all(fields: &[&'static str]) -> Self {
        Self {
            required: fields.iter().map(|f| Cow::Borrowed(*f)).collect(),
            one_of: Vec::new(),
        }
    }

    /// The creation rule for `object_type`.
    ///
    /// Types without an explicit rule need either `name` or `<type>_name`.
    pub fn for_type(object_type: ObjectType) -> Self {
        match object_type {
            ObjectType::Command => Self::all(&["command_line", "command_name"]),
            ObjectType::Contact => Self::all(&["alias", "contact_name"]),
            ObjectType::GraphTemplate => Self::all(&["check"]),
            ObjectType::Hostdependency => Self::all(&["dependent_host_name", "host_name"]),
            ObjectType::Hostescalation => Self::all(&[
                "first_notification",
                "host_name",
                "last_notification",
                "notification_interval",
            ]),
            ObjectType::Service => Self {
                required: vec![Cow::Borrowed("service_description")],
                one_of: vec![vec![
                    Cow::Borrowed("host_name"),
                    Cow::Borrowed("hostgroup_name"),
                ]],
            },
            ObjectType::Servicedependency => Self::all(&["dependent_service", "service"]),
            ObjectType::User => Self::all(&["username", "password"]),
            other => Self {
                required: Vec::new(),
                one_of: vec![vec![
                    Cow::Borrowed("name"),
                    Cow::Owned(format!("{}_name", other.as_str())),
                ]],
            },
        }
    }

    /// Describe the first unmet requirement, if any.
    pub fn first_missing(&self, data: &ObjectData) -> Option<String> {
        if let Some(group) = self
            .one_of
            .iter()
            .find(|group| !group.iter().any(|f| data.contains_key(f.as_ref())))
        {
            return Some(format!("one of [{}]", group.join(", ")));
        }
        self.required
            .iter()
            .find(|f| !data.contains_key(f.as_ref()))
            .map(|f| f.to_string())
    }
}

/// Check that a create request carries the minimum fields for its type.
pub fn validate_fields(object_type: ObjectType, data: &ObjectData) -> Result<()> {
    match RequiredFieldSet::for_type(object_type).first_missing(data) {
        None => Ok(()),
        Some(missing) => Err(ClientError::Validation(format!(
            "POST({object_type}): required property {missing} not set for a {object_type} object"
        ))),
    }
}

/// Check the structural legality of an operation.
///
/// Verb and object type membership are guaranteed by the types; see
/// [`Operation::parse`] for untyped input.
pub fn validate_request(op: &Operation) -> Result<()> {
    if op.object_type.is_change() {
        return Ok(());
    }

    let prefix = format!("{}({})", op.method, op.object_type);

    if op.method.requires_data() && !op.has_data() {
        return Err(ClientError::Validation(format!("{prefix}: data not set")));
    }

    if op.method.requires_name() && op.name.is_empty() {
        return Err(ClientError::Validation(format!("{prefix}: name not set")));
    }

    if op.method != Method::Post
        && op.object_type == ObjectType::Service
        && !op.name.is_empty()
        && ServiceName::parse(&op.name).is_err()
    {
        return Err(ClientError::Validation(format!(
            "{prefix}: invalid service name '{}'",
            op.name
        )));
    }

    if op.method == Method::Post {
        // `requires_data` above guarantees a body for POST.
        if let Some(data) = &op.data {
            validate_fields(op.object_type, data)?;
        }
    }

    Ok(())
}
