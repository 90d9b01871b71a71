use std::sync::Arc;

use http::Method;
pub use quarry_types::methods::security::{ChangePasswordParams, ChangePasswordResponse};
use quarry_types::{body::Body, error::Error};

use crate::context::Context;
use crate::transport::{RequestOptions, Transport};
use crate::utils::expand;

/// Changes a user's password.
///
/// `PUT /_security/user/{username}/_password`, or
/// `PUT /_security/user/_password` to change the calling user's own
/// password. Body is required.
pub struct ChangePasswordService {
    transport: Arc<dyn Transport>,
    username: String,
    pretty: bool,
    body: Option<Body>,
}

impl ChangePasswordService {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            username: String::new(),
            pretty: false,
            body: None,
        }
    }

    /// Name of the user whose password changes. Leave unset to target the
    /// authenticated user.
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

    /// The new password payload, typically [`ChangePasswordParams`] via
    /// [`Body::json`].
    #[must_use]
    pub fn body(mut self, body: impl Into<Body>) -> Self {
        self.body = Some(body.into());
        self
    }

    fn validate(&self) -> Result<(), Error> {
        if self.body.is_none() {
            return Err(Error::MissingRequiredFields(vec!["body"]));
        }
        Ok(())
    }

    fn build_url(&self) -> Result<(String, Vec<(&'static str, String)>), Error> {
        let path = if self.username.is_empty() {
            "/_security/user/_password".to_string()
        } else {
            expand(
                "/_security/user/{username}/_password",
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
    /// Fails with [`Error::MissingRequiredFields`] before any I/O when the
    /// body is unset, and otherwise propagates encoding, transport, decoding
    /// or cancellation errors.
    pub async fn execute(self, ctx: &Context) -> Result<ChangePasswordResponse, Error> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::MockTransport;

    #[tokio::test]
    async fn requires_a_body() {
        let transport = MockTransport::replying("{}");
        let err = ChangePasswordService::new(Arc::clone(&transport) as Arc<dyn Transport>)
            .username("alice")
            .execute(&Context::background())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::MissingRequiredFields(fields) if fields == vec!["body"]
        ));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn targets_the_named_user() {
        let transport = MockTransport::replying("{}");
        let params = ChangePasswordParams {
            password: "secret".to_string(),
        };
        ChangePasswordService::new(Arc::clone(&transport) as Arc<dyn Transport>)
            .username("alice")
            .body(Body::json(&params).unwrap())
            .execute(&Context::background())
            .await
            .unwrap();

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.path, "/_security/user/alice/_password");
        assert_eq!(sent.method, Method::PUT);
    }

    #[tokio::test]
    async fn no_username_targets_the_caller() {
        let transport = MockTransport::replying("{}");
        ChangePasswordService::new(Arc::clone(&transport) as Arc<dyn Transport>)
            .body(r#"{"password":"secret"}"#)
            .execute(&Context::background())
            .await
            .unwrap();

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.path, "/_security/user/_password");
    }
}
