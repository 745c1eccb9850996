//! Object types exposed by the configuration API.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ClientError;

/// A configuration object type, i.e. the `{type}` segment of `/config/{type}`.
///
/// `Change` is a pseudo-type addressing the server's staged change set. It
/// never takes a name and is exempt from field validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectType {
    Host,
    Hostgroup,
    Service,
    Servicegroup,
    Contact,
    Contactgroup,
    HostTemplate,
    ServiceTemplate,
    ContactTemplate,
    Hostdependency,
    Servicedependency,
    Hostescalation,
    Serviceescalation,
    User,
    Usergroup,
    CombinedGraph,
    GraphCollection,
    GraphTemplate,
    ManagementPack,
    Timeperiod,
    Command,
    Change,
}

impl ObjectType {
    /// Every object type, including the `change` pseudo-type.
    pub const ALL: [ObjectType; 22] = [
        Self::Host,
        Self::Hostgroup,
        Self::Service,
        Self::Servicegroup,
        Self::Contact,
        Self::Contactgroup,
        Self::HostTemplate,
        Self::ServiceTemplate,
        Self::ContactTemplate,
        Self::Hostdependency,
        Self::Servicedependency,
        Self::Hostescalation,
        Self::Serviceescalation,
        Self::User,
        Self::Usergroup,
        Self::CombinedGraph,
        Self::GraphCollection,
        Self::GraphTemplate,
        Self::ManagementPack,
        Self::Timeperiod,
        Self::Command,
        Self::Change,
    ];

    /// The API path segment for this type.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Host => "host",
            Self::Hostgroup => "hostgroup",
            Self::Service => "service",
            Self::Servicegroup => "servicegroup",
            Self::Contact => "contact",
            Self::Contactgroup => "contactgroup",
            Self::HostTemplate => "host_template",
            Self::ServiceTemplate => "service_template",
            Self::ContactTemplate => "contact_template",
            Self::Hostdependency => "hostdependency",
            Self::Servicedependency => "servicedependency",
            Self::Hostescalation => "hostescalation",
            Self::Serviceescalation => "serviceescalation",
            Self::User => "user",
            Self::Usergroup => "usergroup",
            Self::CombinedGraph => "combined_graph",
            Self::GraphCollection => "graph_collection",
            Self::GraphTemplate => "graph_template",
            Self::ManagementPack => "management_pack",
            Self::Timeperiod => "timeperiod",
            Self::Command => "command",
            Self::Change => "change",
        }
    }

    /// Whether this is the staged change pseudo-type.
    pub const fn is_change(&self) -> bool {
        matches!(self, Self::Change)
    }

    /// Whether objects of this type carry a `members` list.
    pub const fn is_group(&self) -> bool {
        matches!(
            self,
            Self::Hostgroup | Self::Contactgroup | Self::Servicegroup | Self::Usergroup
        )
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectType {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ClientError::Validation(format!("Invalid object type '{s}'")))
    }
}

/// HTTP verbs accepted by the configuration API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Patch,
    Put,
    Delete,
}

impl Method {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Whether the verb requires a request body.
    pub const fn requires_data(&self) -> bool {
        matches!(self, Self::Post | Self::Patch | Self::Put)
    }

    /// Whether the verb addresses a single named object.
    pub const fn requires_name(&self) -> bool {
        matches!(self, Self::Patch | Self::Put | Self::Delete)
    }

    /// Whether the verb changes server state.
    pub const fn is_mutating(&self) -> bool {
        !matches!(self, Self::Get)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PATCH" => Ok(Self::Patch),
            "PUT" => Ok(Self::Put),
            "DELETE" => Ok(Self::Delete),
            other => Err(ClientError::Validation(format!(
                "Invalid request type '{other}'"
            ))),
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}
