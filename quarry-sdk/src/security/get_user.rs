use std::sync::Arc;

use http::Method;
pub use quarry_types::methods::security::{GetUserResponse, User};
use quarry_types::error::Error;

use crate::context::Context;
use crate::transport::{RequestOptions, Transport};
use crate::utils::expand;

/// Retrieves a user by name, or every user when no username is set.
///
/// `GET /_security/user/{username}` or `GET /_security/user`.
pub struct GetUserService {
    transport: Arc<dyn Transport>,
    username: String,
    pretty: bool,
}

impl GetUserService {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            username: String::new(),
            pretty: false,
        }
    }

    /// Name of the user to fetch. Leave unset to list all users.
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

    fn build_url(&self) -> Result<(String, Vec<(&'static str, String)>), Error> {
        let path = if self.username.is_empty() {
            "/_security/user".to_string()
        } else {
            expand(
                "/_security/user/{username}",
                &[("username", self.username.as_str())],
            )?
        };
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
    /// Propagates encoding, transport, decoding or cancellation errors.
    pub async fn execute(self, ctx: &Context) -> Result<GetUserResponse, Error> {
        let (path, params) = self.build_url()?;
        let res = self
            .transport
            .perform(
                ctx,
                RequestOptions {
                    method: Method::GET,
                    path,
                    params,
                    body: None,
                },
            )
            .await?;
        serde_json::from_slice(&res).map_err(Error::Decode)
    }
}
