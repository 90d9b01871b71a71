use std::sync::Arc;

use http::Method;
pub use quarry_types::methods::security::DisableUserResponse;
use quarry_types::error::Error;

use crate::context::Context;
use crate::transport::{RequestOptions, Transport};
use crate::utils::expand;

/// Disables a user without removing it.
///
/// `PUT /_security/user/{username}/_disable`. Username is required.
pub struct DisableUserService {
    transport: Arc<dyn Transport>,
    username: String,
    pretty: bool,
}

impl DisableUserService {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            username: String::new(),
            pretty: false,
        }
    }

    /// Name of the user to disable.
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
            "/_security/user/{username}/_disable",
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
    pub async fn execute(self, ctx: &Context) -> Result<DisableUserResponse, Error> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::MockTransport;

    #[tokio::test]
    async fn hits_the_disable_endpoint() {
        let transport = MockTransport::replying("{}");
        DisableUserService::new(Arc::clone(&transport) as Arc<dyn Transport>)
            .username("alice")
            .pretty(true)
            .execute(&Context::background())
            .await
            .unwrap();

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, Method::PUT);
        assert_eq!(sent.path, "/_security/user/alice/_disable");
        assert_eq!(sent.params, vec![("pretty", "true".to_string())]);
    }
}
