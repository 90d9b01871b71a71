use async_trait::async_trait;
use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::Method;
use quarry_types::{body::Body, error::Error};

use crate::context::Context;

/// A single request handed to the transport.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub path: String,
    pub params: Vec<(&'static str, String)>,
    pub body: Option<Body>,
}

/// The shared HTTP client seam.
///
/// Implementations must be safe to share across many service builders.
/// Everything below the request line (auth, pooling, TLS) belongs to the
/// implementation, not to the services calling it.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn perform(&self, ctx: &Context, opts: RequestOptions) -> Result<Bytes, Error>;
}

const ERROR_SNIPPET_LEN: usize = 256;

/// First chunk of an error response body, for diagnostics on rejected
/// requests.
fn error_snippet(body: &Bytes) -> String {
    if body.is_empty() {
        return "<empty body>".to_string();
    }
    let text = String::from_utf8_lossy(body);
    let mut end = text.len().min(ERROR_SNIPPET_LEN);
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text[..end].to_string()
}

/// reqwest-backed transport against a fixed base url.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(api_url: impl ToString) -> Self {
        Self::with_client(reqwest::Client::new(), api_url)
    }

    /// Uses a caller-built reqwest client, keeping its pooling and TLS
    /// settings.
    pub fn with_client(client: reqwest::Client, api_url: impl ToString) -> Self {
        let mut base_url = api_url.to_string();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { client, base_url }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn perform(&self, ctx: &Context, opts: RequestOptions) -> Result<Bytes, Error> {
        if ctx.is_cancelled() {
            return Err(Error::Cancelled);
        }

        let url = format!("{}{}", self.base_url, opts.path);
        tracing::debug!(method = %opts.method, %url, "performing request");

        let mut request = self.client.request(opts.method, url.as_str());
        if !opts.params.is_empty() {
            request = request.query(&opts.params);
        }
        match opts.body {
            Some(Body::Json(ref value)) => request = request.json(value),
            Some(Body::Raw(raw)) => {
                request = request
                    .header(CONTENT_TYPE, "application/json")
                    .body(raw);
            }
            None => {}
        }

        let round_trip = async {
            let response = request
                .send()
                .await
                .map_err(|err| Error::Transport(err.into()))?;
            let status = response.status();
            let body = response
                .bytes()
                .await
                .map_err(|err| Error::Transport(err.into()))?;
            if !status.is_success() {
                tracing::debug!(%status, %url, "request rejected by server");
                let reason = error_snippet(&body);
                return Err(Error::Transport(anyhow::anyhow!(
                    "server responded with status {status}: {reason}"
                )));
            }
            Ok(body)
        };

        tokio::select! {
            () = ctx.cancelled() => Err(Error::Cancelled),
            result = round_trip => result,
        }
    }
}
