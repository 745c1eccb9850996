//! Data models for the configuration API.
//!
//! Only the request shape is modelled. Object bodies stay as JSON maps
//! because their fields differ per object type and server version.

mod object_type;
mod operation;
mod response;

pub use object_type::{Method, ObjectType};
pub use operation::{ObjectData, Operation, SERVICE_NAME_SEPARATOR, ServiceName};
pub use response::ApiResponse;
