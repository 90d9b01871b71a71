use serde::Serialize;
use serde_json::Value;

use crate::error::Error;

/// Request body for an API call.
///
/// Accepts either pre-serialized JSON text, which is sent to the server
/// verbatim, or a structured value serialized by the transport.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Raw(String),
    Json(Value),
}

impl Body {
    /// Builds a body from any serializable value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encoding`] if the value cannot be represented as
    /// JSON.
    pub fn json<T: Serialize>(value: &T) -> Result<Self, Error> {
        serde_json::to_value(value)
            .map(Body::Json)
            .map_err(|err| Error::Encoding(err.to_string()))
    }

    /// Renders the body as JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encoding`] if serialization fails.
    pub fn to_json_string(&self) -> Result<String, Error> {
        match self {
            Body::Raw(raw) => Ok(raw.clone()),
            Body::Json(value) => {
                serde_json::to_string(value).map_err(|err| Error::Encoding(err.to_string()))
            }
        }
    }
}

impl From<String> for Body {
    fn from(raw: String) -> Self {
        Body::Raw(raw)
    }
}

impl From<&str> for Body {
    fn from(raw: &str) -> Self {
        Body::Raw(raw.to_string())
    }
}

impl From<Value> for Body {
    fn from(value: Value) -> Self {
        Body::Json(value)
    }
}
