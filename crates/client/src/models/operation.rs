//! Operation value objects.
//!
//! An [`Operation`] is built per call, validated, executed and dropped. It
//! owns no identity beyond the request it describes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::object_type::{Method, ObjectType};
use crate::error::{ClientError, Result};

/// Field map sent as the JSON body of a create or update.
pub type ObjectData = Map<String, Value>;

/// Separator between the host and description parts of a service name.
pub const SERVICE_NAME_SEPARATOR: char = ';';

/// A single request against the configuration API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub method: Method,
    pub object_type: ObjectType,
    /// Object name; empty for creates and for "list all" reads.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub data: Option<ObjectData>,
}

impl Operation {
    pub fn new(method: Method, object_type: ObjectType) -> Self {
        Self {
            method,
            object_type,
            name: String::new(),
            data: None,
        }
    }

    /// Build an operation from untyped input, as received from a caller.
    ///
    /// Unknown verbs and object types are rejected here, before any other
    /// rule is evaluated.
    pub fn parse(
        method: &str,
        object_type: &str,
        name: &str,
        data: Option<ObjectData>,
    ) -> Result<Self> {
        let method: Method = method.parse()?;
        let object_type: ObjectType = object_type.parse()?;
        Ok(Self {
            method,
            object_type,
            name: name.to_string(),
            data,
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_data(mut self, data: ObjectData) -> Self {
        self.data = Some(data);
        self
    }

    pub fn create(object_type: ObjectType, data: ObjectData) -> Self {
        Self::new(Method::Post, object_type).with_data(data)
    }

    pub fn read(object_type: ObjectType, name: impl Into<String>) -> Self {
        Self::new(Method::Get, object_type).with_name(name)
    }

    pub fn update(object_type: ObjectType, name: impl Into<String>, data: ObjectData) -> Self {
        Self::new(Method::Patch, object_type)
            .with_name(name)
            .with_data(data)
    }

    pub fn overwrite(object_type: ObjectType, name: impl Into<String>, data: ObjectData) -> Self {
        Self::new(Method::Put, object_type)
            .with_name(name)
            .with_data(data)
    }

    pub fn delete(object_type: ObjectType, name: impl Into<String>) -> Self {
        Self::new(Method::Delete, object_type).with_name(name)
    }

    /// Whether the body is absent or has no fields.
    pub fn has_data(&self) -> bool {
        self.data.as_ref().is_some_and(|d| !d.is_empty())
    }
}

/// Composite service identifier: `"<host_name>;<service_description>"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceName {
    /// Host (or hostgroup) part.
    pub host: String,
    pub description: String,
}

impl ServiceName {
    pub fn new(host: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            description: description.into(),
        }
    }

    /// Split a composite name at the first separator.
    pub fn parse(name: &str) -> Result<Self> {
        name.split_once(SERVICE_NAME_SEPARATOR)
            .map(|(host, description)| Self::new(host, description))
            .ok_or_else(|| {
                ClientError::Validation(format!(
                    "Invalid service name '{name}': expected '<host_name>{SERVICE_NAME_SEPARATOR}<service_description>'"
                ))
            })
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.host, SERVICE_NAME_SEPARATOR, self.description)
    }
}
