use std::sync::Arc;

use http::Method;
pub use quarry_types::methods::security::{PutUserParams, PutUserResponse};
use quarry_types::{body::Body, error::Error};

use crate::context::Context;
use crate::transport::{RequestOptions, Transport};
use crate::utils::expand;

/// Creates a user, or updates it if it already exists.
///
/// `PUT /_security/user/{username}`. Username and body are required.
pub struct PutUserService {
    transport: Arc<dyn Transport>,
    username: String,
    pretty: bool,
    body: Option<Body>,
}

impl PutUserService {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            username: String::new(),
            pretty: false,
            body: None,
        }
    }

    /// Name of the user to create or update.
    #[must_use]
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Ask the server for an indented, human readable response.
    #[must_use]
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// The user definition. Accepts pre-serialized JSON text or anything
    /// convertible to a [`Body`]; see [`Body::json`] for arbitrary
    /// serializable values such as [`PutUserParams`].
    #[must_use]
    pub fn body(mut self, body: impl Into<Body>) -> Self {
        self.body = Some(body.into());
        self
    }

    fn validate(&self) -> Result<(), Error> {
        let mut missing = Vec::new();
        if self.username.is_empty() {
            missing.push("username");
        }
        if self.body.is_none() {
            missing.push("body");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::MissingRequiredFields(missing))
        }
    }

    fn build_url(&self) -> Result<(String, Vec<(&'static str, String)>), Error> {
        let path = expand(
            "/_security/user/{username}",
            &[("username", self.username.as_str())],
        )?;
        let mut params = Vec::new();
        if self.pretty {
            params.push(("pretty", "true".to_string()));
        }
        Ok((path, params))
    }

    /// Runs the request.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::MissingRequiredFields`] before any I/O when
    /// required parameters are unset, and otherwise propagates encoding,
    /// transport, decoding or cancellation errors.
    pub async fn execute(self, ctx: &Context) -> Result<PutUserResponse, Error> {
        self.validate()?;
        let (path, params) = self.build_url()?;
        let res = self
            .transport
            .perform(
                ctx,
                RequestOptions {
                    method: Method::PUT,
                    path,
                    params,
                    body: self.body,
                },
            )
            .await?;
        serde_json::from_slice(&res).map_err(Error::Decode)
    }
}
