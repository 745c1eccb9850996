//! Authentication types for OP5 client configuration.
//!
//! The monitoring API only supports HTTP basic authentication, so the
//! configuration is a plain username/password pair.
//!
//! Invariants:
//! - The password uses `secrecy::SecretString` to prevent accidental logging.
//! - Serialization includes the secret for config file round-trips; secrecy is for runtime safety.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Module for serializing SecretString as strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Basic authentication credentials for the monitoring API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// API user name.
    pub username: String,
    /// API password.
    #[serde(with = "secret_string")]
    pub password: SecretString,
}

impl AuthConfig {
    /// Create credentials from a username and a plain password.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::new(password.into().into()),
        }
    }
}
