use std::sync::Arc;

use http::Method;
pub use quarry_types::methods::security::EnableUserResponse;
use quarry_types::error::Error;

use crate::context::Context;
use crate::transport::{RequestOptions, Transport};
use crate::utils::expand;

/// Re-enables a disabled user.
///
/// `PUT /_security/user/{username}/_enable`. Username is required.
pub struct EnableUserService {
    transport: Arc<dyn Transport>,
    username: String,
    pretty: bool,
}

impl EnableUserService {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            username: String::new(),
            pretty: false,
        }
    }

    /// Name of the user to enable.
    #[must_use]
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    #[must_use]
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn validate(&self) -> Result<(), Error> {
        if self.username.is_empty() {
            return Err(Error::MissingRequiredFields(vec!["username"]));
        }
        Ok(())
    }

    fn build_url(&self) -> Result<(String, Vec<(&'static str, String)>), Error> {
        let path = expand(
            "/_security/user/{username}/_enable",
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
    /// Fails with [`Error::MissingRequiredFields`] before any I/O when the
    /// username is unset, and otherwise propagates encoding, transport,
    /// decoding or cancellation errors.
    pub async fn execute(self, ctx: &Context) -> Result<EnableUserResponse, Error> {
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
                    body: None,
                },
            )
            .await?;
        serde_json::from_slice(&res).map_err(Error::Decode)
    }
}
